//! Unit tests for triage-hospital.

use triage_core::{Area, Category, PatientId, Tick};

use crate::{AdmissionQueue, AreaBoard, Hospital, Patient, PatientStatus};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn cat(v: u8) -> Category {
    Category::new(v).unwrap()
}

fn patient(id: u32, category: u8, arrival_secs: u64, area: Area) -> Patient {
    Patient::new(
        PatientId(id),
        "Arturo",
        "Maldonado",
        cat(category),
        arrival_secs,
        area,
    )
}

// ── Patient ───────────────────────────────────────────────────────────────────

mod patient {
    use super::*;

    #[test]
    fn wait_minutes_integer_division() {
        let p = patient(1000, 3, 0, Area::Sapu);
        assert_eq!(p.wait_minutes(125), 2);
        assert_eq!(p.wait_minutes(59), 0);
        assert_eq!(p.wait_minutes(60), 1);
    }

    #[test]
    fn change_log_is_lifo() {
        let mut p = patient(1000, 3, 0, Area::Sapu);
        assert!(p.pop_last_change().is_none());
        p.record_change("first");
        p.record_change("second");
        assert_eq!(p.pop_last_change().as_deref(), Some("second"));
        assert_eq!(p.pop_last_change().as_deref(), Some("first"));
        assert!(p.pop_last_change().is_none());
    }

    #[test]
    fn mark_attended_sets_status_and_minute() {
        let mut p = patient(1000, 2, 0, Area::Pediatric);
        assert_eq!(p.status(), PatientStatus::Waiting);
        assert!(p.attention_minute().is_none());
        p.mark_attended(Tick(45));
        assert!(p.is_attended());
        assert_eq!(p.attention_minute(), Some(Tick(45)));
    }

    #[test]
    fn summary_unattended() {
        let p = patient(1000, 4, 600, Area::AdultEmergency);
        assert_eq!(
            p.summary(),
            "[P1000] Arturo Maldonado | C4 | urgencia_adulto | Llegó: 00:10:00 hrs | Atendido: No atendido"
        );
    }

    #[test]
    fn summary_attended_includes_wait() {
        let mut p = patient(1001, 1, 600, Area::Sapu);
        // Attended at minute 45 → 45*60 = 2700 s; wait = 2700 - 600 = 2100 s.
        p.mark_attended(Tick(45));
        assert_eq!(
            p.summary(),
            "[P1001] Arturo Maldonado | C1 | SAPU | Llegó: 00:10:00 hrs | \
             Atendido: 00:45:00 hrs | Espera de: 00:35:00 hrs"
        );
    }
}

// ── AdmissionQueue ────────────────────────────────────────────────────────────

mod admission {
    use super::*;

    #[test]
    fn pops_by_category_then_arrival() {
        let mut q = AdmissionQueue::new();
        q.push(PatientId(1), cat(3), 0);
        q.push(PatientId(2), cat(1), 600);
        q.push(PatientId(3), cat(2), 1200);
        q.push(PatientId(4), cat(1), 300);

        assert_eq!(q.pop_next(), Some(PatientId(4))); // C1, earlier arrival
        assert_eq!(q.pop_next(), Some(PatientId(2))); // C1, later arrival
        assert_eq!(q.pop_next(), Some(PatientId(3))); // C2
        assert_eq!(q.pop_next(), Some(PatientId(1))); // C3
        assert_eq!(q.pop_next(), None);
    }

    #[test]
    fn equal_keys_preserve_insertion_order() {
        let mut q = AdmissionQueue::new();
        q.push(PatientId(10), cat(3), 0);
        q.push(PatientId(11), cat(3), 0);
        q.push(PatientId(12), cat(3), 0);
        assert_eq!(q.pop_next(), Some(PatientId(10)));
        assert_eq!(q.pop_next(), Some(PatientId(11)));
        assert_eq!(q.pop_next(), Some(PatientId(12)));
    }

    #[test]
    fn requeue_restores_ordering_invariant() {
        // Spec scenario: a queued C4 patient reassigned to C1 must come out
        // ahead of a C2 patient that arrived earlier.
        let mut q = AdmissionQueue::new();
        q.push(PatientId(1), cat(2), 0);
        q.push(PatientId(2), cat(4), 600);

        assert!(q.requeue(PatientId(2), cat(1)));
        assert_eq!(q.pop_next(), Some(PatientId(2)));
        assert_eq!(q.pop_next(), Some(PatientId(1)));
    }

    #[test]
    fn requeue_keeps_arrival_tiebreak() {
        let mut q = AdmissionQueue::new();
        q.push(PatientId(1), cat(4), 0);
        q.push(PatientId(2), cat(2), 600);
        // Patient 1 becomes C2 as well; its earlier arrival must still win.
        assert!(q.requeue(PatientId(1), cat(2)));
        assert_eq!(q.pop_next(), Some(PatientId(1)));
        assert_eq!(q.pop_next(), Some(PatientId(2)));
    }

    #[test]
    fn requeue_absent_patient_is_noop() {
        let mut q = AdmissionQueue::new();
        q.push(PatientId(1), cat(3), 0);
        assert!(!q.requeue(PatientId(99), cat(1)));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn remove_specific_patient() {
        let mut q = AdmissionQueue::new();
        q.push(PatientId(1), cat(3), 0);
        q.push(PatientId(2), cat(1), 0);
        assert!(q.remove(PatientId(2)));
        assert!(!q.contains(PatientId(2)));
        assert!(!q.remove(PatientId(2)));
        assert_eq!(q.pop_next(), Some(PatientId(1)));
    }

    #[test]
    fn extract_min_under_interleaved_reassignments() {
        // Property: after any resift, pop_next always returns the smallest
        // (category, arrival) pair among the remaining patients.
        let mut q = AdmissionQueue::new();
        for i in 0..10u32 {
            q.push(PatientId(i), cat((i % 5 + 1) as u8), i as u64 * 60);
        }
        q.requeue(PatientId(9), cat(1));
        q.requeue(PatientId(0), cat(5));

        let mut expected: Vec<(u8, u64, PatientId)> = (0..10u32)
            .map(|i| {
                let c = match i {
                    9 => 1,
                    0 => 5,
                    _ => (i % 5 + 1) as u8,
                };
                (c, i as u64 * 60, PatientId(i))
            })
            .collect();
        expected.sort();

        for (c, _, id) in expected {
            let popped = q.pop_next().unwrap();
            // Same priority key ⇒ same extraction slot; ids with equal keys
            // cannot occur here because arrivals are distinct.
            assert_eq!(popped, id, "expected {id} (C{c})");
        }
    }
}

// ── AreaBoard ─────────────────────────────────────────────────────────────────

mod board {
    use super::*;

    #[test]
    fn admit_until_capacity() {
        let mut b = AreaBoard::new(2);
        assert!(b.admit(Area::Sapu, PatientId(1)));
        assert!(b.admit(Area::Sapu, PatientId(2)));
        assert!(b.is_saturated(Area::Sapu));
        assert!(!b.admit(Area::Sapu, PatientId(3)));
        assert_eq!(b.queue(Area::Sapu).len(), 2);
    }

    #[test]
    fn areas_are_independent() {
        let mut b = AreaBoard::new(1);
        assert!(b.admit(Area::Sapu, PatientId(1)));
        assert!(!b.admit(Area::Sapu, PatientId(2)));
        assert!(b.admit(Area::Pediatric, PatientId(2)));
        assert!(!b.is_saturated(Area::AdultEmergency));
    }

    #[test]
    fn size_never_exceeds_capacity() {
        let mut b = AreaBoard::new(3);
        for i in 0..50u32 {
            b.admit(Area::Pediatric, PatientId(i));
            assert!(b.queue(Area::Pediatric).len() <= 3);
        }
    }
}

// ── Hospital ──────────────────────────────────────────────────────────────────

mod hospital {
    use super::*;
    use triage_core::TriageError;

    fn hospital_with(patients: Vec<Patient>, capacity: usize) -> Hospital {
        let mut h = Hospital::new(capacity);
        for p in patients {
            h.register(p);
        }
        h
    }

    #[test]
    fn attend_next_follows_priority_not_arrival() {
        let mut h = hospital_with(
            vec![
                patient(1, 3, 0, Area::Sapu),
                patient(2, 1, 600, Area::Sapu),
                patient(3, 2, 1200, Area::Sapu),
            ],
            100,
        );
        assert_eq!(h.attend_next(Tick(15)), Some(PatientId(2)));
        assert_eq!(h.attend_next(Tick(30)), Some(PatientId(3)));
        assert_eq!(h.attend_next(Tick(45)), Some(PatientId(1)));
        assert_eq!(h.attend_next(Tick(60)), None);
    }

    #[test]
    fn attend_next_marks_and_records() {
        let mut h = hospital_with(vec![patient(1, 2, 0, Area::Pediatric)], 100);
        let id = h.attend_next(Tick(15)).unwrap();
        let p = h.patient(id).unwrap();
        assert!(p.is_attended());
        assert_eq!(p.attention_minute(), Some(Tick(15)));
        assert_eq!(h.attended_count(), 1);
        assert_eq!(h.waiting_count(), 0);
    }

    #[test]
    fn saturated_area_drops_but_keeps_attended_status() {
        // Spec scenario: capacity 1, two attended patients routed to the
        // same area — second admission dropped, registry size stays 1.
        let mut h = hospital_with(
            vec![patient(1, 1, 0, Area::Sapu), patient(2, 2, 0, Area::Sapu)],
            1,
        );
        h.attend_next(Tick(0));
        h.attend_next(Tick(15));

        assert_eq!(h.area_snapshot(Area::Sapu).len(), 1);
        assert!(h.area_is_saturated(Area::Sapu));
        // Both are attended regardless of routing.
        assert_eq!(h.attended_count(), 2);
        assert!(h.patient(PatientId(2)).unwrap().is_attended());
    }

    #[test]
    fn area_snapshot_sorted_and_idempotent() {
        let mut h = hospital_with(
            vec![
                patient(1, 5, 0, Area::Sapu),
                patient(2, 1, 600, Area::Sapu),
                patient(3, 3, 1200, Area::Sapu),
            ],
            100,
        );
        for t in [0u32, 15, 30] {
            h.attend_next(Tick(t));
        }

        let first: Vec<PatientId> = h.area_snapshot(Area::Sapu).iter().map(|p| p.id()).collect();
        let second: Vec<PatientId> = h.area_snapshot(Area::Sapu).iter().map(|p| p.id()).collect();
        assert_eq!(first, vec![PatientId(2), PatientId(3), PatientId(1)]);
        assert_eq!(first, second);
    }

    #[test]
    fn reassign_unknown_id_reports_without_mutation() {
        let mut h = hospital_with(vec![patient(1, 3, 0, Area::Sapu)], 100);
        let err = h.reassign_category(PatientId(99), cat(1)).unwrap_err();
        assert!(matches!(err, TriageError::PatientNotFound(PatientId(99))));
        assert_eq!(h.patient(PatientId(1)).unwrap().category(), cat(3));
    }

    #[test]
    fn reassign_logs_change_and_resifts_queue() {
        let mut h = hospital_with(
            vec![patient(1, 2, 0, Area::Sapu), patient(2, 4, 600, Area::Sapu)],
            100,
        );
        h.reassign_category(PatientId(2), cat(1)).unwrap();

        // Resift: the reassigned patient now outranks the earlier C2.
        assert_eq!(h.attend_next(Tick(15)), Some(PatientId(2)));

        let p = h.patient(PatientId(2)).unwrap();
        assert_eq!(p.category(), cat(1));
        let mut p = p.clone();
        assert_eq!(p.pop_last_change().as_deref(), Some("Reasignado de C4 a C1"));
    }

    #[test]
    fn reassign_attended_patient_skips_queue() {
        let mut h = hospital_with(vec![patient(1, 4, 0, Area::Sapu)], 100);
        h.attend_next(Tick(0));
        h.reassign_category(PatientId(1), cat(2)).unwrap();
        assert_eq!(h.patient(PatientId(1)).unwrap().category(), cat(2));
        assert_eq!(h.waiting_count(), 0);
    }

    #[test]
    fn close_out_completeness() {
        // attended + unattended == total registered, always.
        let mut h = hospital_with(
            (0..6u32).map(|i| patient(i, 3, i as u64 * 60, Area::Sapu)).collect(),
            100,
        );
        h.attend_next(Tick(0));
        h.attend_next(Tick(15));
        h.close_out();

        assert_eq!(h.attended_count() + h.unattended_count(), h.total_registered());
        assert_eq!(h.unattended_count(), 4);
        assert_eq!(h.waiting_count(), 0);

        // A second close-out finds an empty queue and changes nothing.
        h.close_out();
        assert_eq!(h.unattended_count(), 4);
    }

    #[test]
    fn unattended_list_is_queue_membership_at_close() {
        let mut h = hospital_with(
            vec![
                patient(1, 1, 0, Area::Sapu),
                patient(2, 5, 60, Area::Sapu),
                patient(3, 4, 120, Area::Sapu),
            ],
            100,
        );
        h.attend_next(Tick(0)); // takes patient 1
        h.close_out();
        let mut left: Vec<PatientId> = h.unattended().map(|p| p.id()).collect();
        left.sort();
        assert_eq!(left, vec![PatientId(2), PatientId(3)]);
    }
}
