//! Post-run report computations over the hospital's attended history.
//!
//! Pure functions — the menu layer only formats what these return.

use std::collections::HashMap;

use triage_core::{Area, Category};
use triage_hospital::{Hospital, Patient};

/// Maximum acceptable wait per category, in minutes.
pub fn max_wait_minutes(category: Category) -> u64 {
    match category.value() {
        1 => 15,
        2 => 30,
        3 => 60,
        4 => 180,
        _ => 360,
    }
}

/// Wait in whole minutes for an attended patient, `None` otherwise.
pub fn wait_minutes(patient: &Patient) -> Option<u64> {
    let attention = patient.attention_minute()?;
    Some(attention.as_secs().saturating_sub(patient.arrival_secs()) / 60)
}

/// Attended count per area, in the fixed area order.
pub fn attended_by_area(hospital: &Hospital) -> Vec<(Area, usize)> {
    let mut counts: HashMap<Area, usize> = HashMap::new();
    for p in hospital.attended() {
        *counts.entry(p.area()).or_default() += 1;
    }
    Area::ALL
        .into_iter()
        .filter_map(|area| counts.get(&area).map(|&n| (area, n)))
        .collect()
}

/// Attended count per category, ascending, omitting empty categories.
pub fn attended_by_category(hospital: &Hospital) -> Vec<(Category, usize)> {
    let mut counts: HashMap<Category, usize> = HashMap::new();
    for p in hospital.attended() {
        *counts.entry(p.category()).or_default() += 1;
    }
    let mut out: Vec<(Category, usize)> = counts.into_iter().collect();
    out.sort_by_key(|&(c, _)| c);
    out
}

/// Average wait in minutes per category, ascending, over attended patients.
pub fn average_wait_by_category(hospital: &Hospital) -> Vec<(Category, u64)> {
    let mut sums: HashMap<Category, (u64, u64)> = HashMap::new();
    for p in hospital.attended() {
        if let Some(wait) = wait_minutes(p) {
            let entry = sums.entry(p.category()).or_default();
            entry.0 += wait;
            entry.1 += 1;
        }
    }
    let mut out: Vec<(Category, u64)> = sums
        .into_iter()
        .map(|(c, (sum, n))| (c, sum / n))
        .collect();
    out.sort_by_key(|&(c, _)| c);
    out
}

/// Attended patients whose wait exceeded their category's maximum:
/// (patient, actual wait, allowed maximum).
pub fn over_max_wait(hospital: &Hospital) -> Vec<(&Patient, u64, u64)> {
    hospital
        .attended()
        .filter_map(|p| {
            let wait = wait_minutes(p)?;
            let max = max_wait_minutes(p.category());
            (wait > max).then_some((p, wait, max))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::{PatientId, Tick};

    fn attended(id: u32, category: u8, arrival_secs: u64, minute: u32) -> Patient {
        let mut p = Patient::new(
            PatientId(id),
            "Inés",
            "Pizarro",
            Category::new(category).unwrap(),
            arrival_secs,
            Area::Sapu,
        );
        p.mark_attended(Tick(minute));
        p
    }

    fn hospital_of(patients: Vec<Patient>) -> Hospital {
        let mut h = Hospital::new(100);
        for p in patients {
            let minute = p.attention_minute();
            h.register(p);
            if let Some(t) = minute {
                h.attend_next(t);
            }
        }
        h
    }

    #[test]
    fn wait_is_attention_minus_arrival() {
        let p = attended(1, 3, 600, 45);
        assert_eq!(wait_minutes(&p), Some(35));
        let unseen = Patient::new(
            PatientId(2),
            "Inés",
            "Pizarro",
            Category::new(3).unwrap(),
            0,
            Area::Sapu,
        );
        assert_eq!(wait_minutes(&unseen), None);
    }

    #[test]
    fn counts_group_by_category() {
        let h = hospital_of(vec![
            attended(1, 2, 0, 15),
            attended(2, 2, 0, 30),
            attended(3, 5, 0, 45),
        ]);
        assert_eq!(
            attended_by_category(&h),
            vec![
                (Category::new(2).unwrap(), 2),
                (Category::new(5).unwrap(), 1),
            ]
        );
    }

    #[test]
    fn over_max_flags_only_excessive_waits() {
        // C1 max is 15 min: a 20-minute wait is flagged, 10 is not.
        let h = hospital_of(vec![attended(1, 1, 0, 20), attended(2, 1, 600, 20)]);
        let flagged = over_max_wait(&h);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].0.id(), PatientId(1));
        assert_eq!((flagged[0].1, flagged[0].2), (20, 15));
    }

    #[test]
    fn average_wait_integer_division() {
        let h = hospital_of(vec![attended(1, 3, 0, 15), attended(2, 3, 0, 30)]);
        // Waits 15 and 30 → average 22 (integer).
        assert_eq!(
            average_wait_by_category(&h),
            vec![(Category::new(3).unwrap(), 22)]
        );
    }
}
