//! Unit tests for triage-core.

use crate::{fmt_hms, Area, Category, PatientId, SimConfig, SimRng, TriageError};

// ── PatientId ─────────────────────────────────────────────────────────────────

mod ids {
    use super::*;

    #[test]
    fn display_and_parse_round_trip() {
        let id = PatientId(1042);
        assert_eq!(id.to_string(), "P1042");
        assert_eq!("P1042".parse::<PatientId>().unwrap(), id);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("1042".parse::<PatientId>().is_err());
        assert!("Pabc".parse::<PatientId>().is_err());
        assert!("".parse::<PatientId>().is_err());
    }
}

// ── Category ──────────────────────────────────────────────────────────────────

mod category {
    use super::*;

    #[test]
    fn accepts_one_through_five() {
        for v in 1..=5u8 {
            assert_eq!(Category::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(Category::new(0), Err(TriageError::InvalidCategory(0))));
        assert!(matches!(Category::new(6), Err(TriageError::InvalidCategory(6))));
    }

    #[test]
    fn more_urgent_sorts_first() {
        let c1 = Category::new(1).unwrap();
        let c5 = Category::new(5).unwrap();
        assert!(c1 < c5);
        assert!(c1.is_most_urgent());
        assert!(!c5.is_most_urgent());
    }

    #[test]
    fn display_form() {
        assert_eq!(Category::new(3).unwrap().to_string(), "C3");
    }
}

// ── Area ──────────────────────────────────────────────────────────────────────

mod area {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for area in Area::ALL {
            assert_eq!(area.as_str().parse::<Area>().unwrap(), area);
        }
    }

    #[test]
    fn unknown_label_errors() {
        assert!(matches!(
            "cardiology".parse::<Area>(),
            Err(TriageError::UnknownArea(_))
        ));
    }
}

// ── Time ──────────────────────────────────────────────────────────────────────

mod time {
    use super::*;

    #[test]
    fn fmt_hms_components() {
        assert_eq!(fmt_hms(0), "00:00:00");
        assert_eq!(fmt_hms(61), "00:01:01");
        assert_eq!(fmt_hms(3 * 3600 + 25 * 60 + 9), "03:25:09");
    }

    #[test]
    fn arrival_interval_integer_division() {
        assert_eq!(SimConfig::new(144, 100, 0).arrival_interval_minutes(), 10);
        assert_eq!(SimConfig::new(200, 100, 0).arrival_interval_minutes(), 7);
    }

    #[test]
    fn tick_seconds() {
        assert_eq!(crate::Tick(10).as_secs(), 600);
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

mod rng {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..32 {
            assert_eq!(a.gen_range(0..1_000_000u32), b.gen_range(0..1_000_000u32));
        }
    }

    #[test]
    fn gen_range_stays_in_bounds() {
        let mut rng = SimRng::new(7);
        for _ in 0..200 {
            let v: u32 = rng.gen_range(3..=5);
            assert!((3..=5).contains(&v));
        }
    }

    #[test]
    fn choose_from_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
