//! The `Hospital` aggregate — single owner of all patient state.

use std::collections::HashMap;

use triage_core::{Area, Category, PatientId, Tick, TriageError, TriageResult};

use crate::admission::AdmissionQueue;
use crate::board::AreaBoard;
use crate::patient::Patient;

/// Owns the full patient map, the admission queue, the area registry, and
/// the two terminal lists (attended history, unattended-at-close).
///
/// All mutation happens through this type; the scheduler and the correction
/// protocol both act on `&mut Hospital` within the same tick-processing call,
/// so no interior mutability or locking is needed.
pub struct Hospital {
    patients:   HashMap<PatientId, Patient>,
    admission:  AdmissionQueue,
    board:      AreaBoard,
    /// Chronological, append-only attention history.
    attended:   Vec<PatientId>,
    /// Built once at close-out from whatever remains in the admission queue.
    unattended: Vec<PatientId>,
}

impl Hospital {
    /// Build a hospital whose three areas share `area_capacity`.
    pub fn new(area_capacity: usize) -> Self {
        Self {
            patients:   HashMap::new(),
            admission:  AdmissionQueue::new(),
            board:      AreaBoard::new(area_capacity),
            attended:   Vec::new(),
            unattended: Vec::new(),
        }
    }

    // ── Arrival ───────────────────────────────────────────────────────────

    /// Register a newly arrived patient: insert into the patient map and the
    /// admission queue.
    pub fn register(&mut self, patient: Patient) {
        let id = patient.id();
        self.admission.push(id, patient.category(), patient.arrival_secs());
        self.patients.insert(id, patient);
    }

    // ── Attention ─────────────────────────────────────────────────────────

    /// Extract and attend the highest-priority waiting patient at minute
    /// `now`.  Appends to the attended history and attempts to route the
    /// patient into its area (silently dropped when the area is saturated —
    /// attended status is independent of area admission).
    ///
    /// Returns `None` when the queue is empty; that is a normal condition,
    /// not a fault.
    pub fn attend_next(&mut self, now: Tick) -> Option<PatientId> {
        let id = self.admission.pop_next()?;
        // Queue membership implies map membership: ids enter both together.
        let patient = self.patients.get_mut(&id)?;
        patient.mark_attended(now);
        let area = patient.area();
        self.attended.push(id);
        self.board.admit(area, id);
        Some(id)
    }

    // ── Reassignment ──────────────────────────────────────────────────────

    /// Reassign a patient's triage category, logging the change to its audit
    /// history first.  If the patient is still waiting, the admission queue
    /// is re-keyed so the next extraction sees the new priority.
    ///
    /// Unknown ids are reported without mutating anything.
    pub fn reassign_category(&mut self, id: PatientId, new: Category) -> TriageResult<()> {
        let patient = self
            .patients
            .get_mut(&id)
            .ok_or(TriageError::PatientNotFound(id))?;
        let old = patient.category();
        patient.record_change(format!("Reasignado de {old} a {new}"));
        patient.reassign_category(new);
        self.admission.requeue(id, new);
        Ok(())
    }

    // ── Close-out ─────────────────────────────────────────────────────────

    /// End-of-run reconciliation: every patient still in the admission queue
    /// is classified unattended.  Runs once, after the tick loop; draining
    /// the queue makes an accidental second call a no-op.
    pub fn close_out(&mut self) {
        self.unattended.extend(self.admission.ids());
        self.admission.clear();
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: PatientId) -> bool {
        self.patients.contains_key(&id)
    }

    /// Total patients registered over the run.
    #[inline]
    pub fn total_registered(&self) -> usize {
        self.patients.len()
    }

    /// Patients currently waiting in the admission queue.
    #[inline]
    pub fn waiting_count(&self) -> usize {
        self.admission.len()
    }

    /// Attended patients in chronological attention order.
    pub fn attended(&self) -> impl Iterator<Item = &Patient> {
        self.attended.iter().filter_map(|id| self.patients.get(id))
    }

    /// Patients classified unattended at close-out.
    pub fn unattended(&self) -> impl Iterator<Item = &Patient> {
        self.unattended.iter().filter_map(|id| self.patients.get(id))
    }

    #[inline]
    pub fn attended_count(&self) -> usize {
        self.attended.len()
    }

    #[inline]
    pub fn unattended_count(&self) -> usize {
        self.unattended.len()
    }

    /// Non-destructive view of an area's members in current priority order
    /// (category ascending, then arrival).
    pub fn area_snapshot(&self, area: Area) -> Vec<&Patient> {
        let mut members: Vec<&Patient> = self
            .board
            .queue(area)
            .ids()
            .iter()
            .filter_map(|id| self.patients.get(id))
            .collect();
        members.sort_by_key(|p| (p.category(), p.arrival_secs()));
        members
    }

    #[inline]
    pub fn area_is_saturated(&self, area: Area) -> bool {
        self.board.is_saturated(area)
    }
}
