//! Random patient generation.

use triage_core::{Area, Category, PatientId, SimRng};
use triage_hospital::Patient;

/// Patients written to a freshly synthesized roster file.
pub const DEFAULT_ROSTER_SIZE: usize = 100;

/// Arrival spacing for file-loaded rosters: one patient every 10 minutes.
pub const DEFAULT_ARRIVAL_SPACING_SECS: u64 = 600;

/// First assigned id; subsequent patients count up from here.
const FIRST_ID: u32 = 1000;

const FIRST_NAMES: &[&str] = &[
    "Arturo", "Eugenia", "Clotilde", "Basilio", "Remigio", "Eusebia", "Jacinto",
    "Evaristo", "Hortensia", "Prudencio", "Inés", "Filomena", "Serapio",
    "Teófila", "Pascual", "Ciriaco", "Dolores", "Hilario", "Justa", "Aniceto",
];

const LAST_NAMES: &[&str] = &[
    "Maldonado", "Cifuentes", "Barriga", "Godoy", "Albornoz", "Rebolledo",
    "Aránguiz", "Alcayaga", "Mondaca", "Villagrán", "Urrutia", "Pizarro",
    "Labbé", "Olivares", "Zamorano", "Alarcón", "Araya", "Cordero",
    "Sepúlveda", "Aguayo",
];

/// Draw a triage category from the empirical severity distribution:
/// C1 10%, C2 15%, C3 18%, C4 27%, C5 30%.
pub fn draw_category(rng: &mut SimRng) -> Category {
    let r: u8 = rng.gen_range(0..100);
    let value = match r {
        0..=9  => 1,
        10..=24 => 2,
        25..=42 => 3,
        43..=69 => 4,
        _      => 5,
    };
    Category::new(value).unwrap_or(Category::LEAST_URGENT)
}

/// Synthesize `n` patients arriving every `interval_secs` seconds, starting
/// at second 0.  Names are drawn from the fixed pools, categories from
/// [`draw_category`], and areas round-robin so the load spreads evenly.
pub fn generate(n: usize, interval_secs: u64, rng: &mut SimRng) -> Vec<Patient> {
    let mut patients = Vec::with_capacity(n);
    for i in 0..n {
        // The pools are non-empty constants, so `choose` cannot fail.
        let first = rng.choose(FIRST_NAMES).copied().unwrap_or("Arturo");
        let last = rng.choose(LAST_NAMES).copied().unwrap_or("Maldonado");
        patients.push(Patient::new(
            PatientId(FIRST_ID + i as u32),
            first,
            last,
            draw_category(rng),
            i as u64 * interval_secs,
            Area::ALL[i % Area::ALL.len()],
        ));
    }
    patients
}
