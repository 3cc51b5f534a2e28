//! Flat-file roster persistence.
//!
//! # File format
//!
//! Headerless CSV, one patient template per line:
//!
//! ```csv
//! Arturo,Maldonado,SAPU
//! Eugenia,Cifuentes,urgencia_adulto
//! Clotilde,Barriga,infantil
//! ```
//!
//! No escaping is expected.  Lines with fewer than three fields, or whose
//! area is not one of the three known labels, are skipped: the simulation
//! simply runs with fewer patients than the file had lines.  Categories are
//! not persisted — every load assigns fresh random ones, which is what makes
//! the saved-list mode a new simulation rather than a replay.

use std::io::Read;
use std::path::Path;

use triage_core::{Area, PatientId, SimRng};
use triage_hospital::Patient;

use crate::generator::{self, DEFAULT_ARRIVAL_SPACING_SECS, DEFAULT_ROSTER_SIZE};
use crate::RosterError;

/// First assigned id for file-loaded patients, matching the generator.
const FIRST_ID: u32 = 1000;

// ── Save ─────────────────────────────────────────────────────────────────────

/// Write `patients` as a headerless `nombre,apellido,area` file.
pub fn save_roster(path: &Path, patients: &[Patient]) -> Result<(), RosterError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    for p in patients {
        writer.write_record([p.first_name(), p.last_name(), p.area().as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

// ── Load ─────────────────────────────────────────────────────────────────────

/// Load a roster file from `path`.
///
/// Surviving rows become patients with sequential ids, arrivals spaced
/// `interval_secs` apart, and freshly drawn categories.
pub fn load_roster(
    path: &Path,
    interval_secs: u64,
    rng: &mut SimRng,
) -> Result<Vec<Patient>, RosterError> {
    let file = std::fs::File::open(path)?;
    load_roster_reader(file, interval_secs, rng)
}

/// Like [`load_roster`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_roster_reader<R: Read>(
    reader: R,
    interval_secs: u64,
    rng: &mut SimRng,
) -> Result<Vec<Patient>, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut patients = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if record.len() < 3 {
            continue;
        }
        let Ok(area) = record[2].parse::<Area>() else {
            continue;
        };
        let i = patients.len();
        patients.push(Patient::new(
            PatientId(FIRST_ID + i as u32),
            &record[0],
            &record[1],
            generator::draw_category(rng),
            i as u64 * interval_secs,
            area,
        ));
    }
    Ok(patients)
}

/// Load `path`, synthesizing and persisting a default 100-patient roster
/// first when the file does not exist.
///
/// Any I/O failure — creating, writing, or reading — aborts the whole
/// operation; there is no partial roster.
pub fn load_or_create(path: &Path, rng: &mut SimRng) -> Result<Vec<Patient>, RosterError> {
    if !path.exists() {
        let fresh = generator::generate(DEFAULT_ROSTER_SIZE, DEFAULT_ARRIVAL_SPACING_SECS, rng);
        save_roster(path, &fresh)?;
    }
    load_roster(path, DEFAULT_ARRIVAL_SPACING_SECS, rng)
}
