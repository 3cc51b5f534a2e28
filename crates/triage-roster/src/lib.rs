//! `triage-roster` — produces the ordered arrival sequence the simulation
//! consumes.
//!
//! Two sources exist:
//!
//! - [`generate`] — synthesize `n` random patients from fixed name pools,
//!   with the empirical category distribution and round-robin area
//!   assignment.
//! - [`load_roster`] / [`load_or_create`] — the persisted flat-file path: a
//!   headerless `nombre,apellido,area` CSV, one patient template per line.
//!   Malformed lines are skipped; a missing file is synthesized and saved
//!   before loading.
//!
//! Both paths take `&mut SimRng`, so a fixed seed reproduces the exact same
//! roster.

pub mod error;
pub mod file;
pub mod generator;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::RosterError;
pub use file::{load_or_create, load_roster, load_roster_reader, save_roster};
pub use generator::{draw_category, generate, DEFAULT_ARRIVAL_SPACING_SECS, DEFAULT_ROSTER_SIZE};
