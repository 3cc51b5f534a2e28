//! `triage-core` — foundational types for the ER triage simulator.
//!
//! This crate is a dependency of every other `triage-*` crate.  It has no
//! `triage-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`ids`]      | `PatientId`                                         |
//! | [`category`] | `Category` — triage severity level (C1–C5)          |
//! | [`area`]     | `Area` — attention area enum                        |
//! | [`time`]     | `Tick`, `SimConfig`, HH:MM:SS formatting            |
//! | [`rng`]      | `SimRng` — seeded run-level RNG                     |
//! | [`error`]    | `TriageError`, `TriageResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.      |

pub mod area;
pub mod category;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use area::Area;
pub use category::Category;
pub use error::{TriageError, TriageResult};
pub use ids::PatientId;
pub use rng::SimRng;
pub use time::{fmt_hms, SimConfig, Tick, ATTENTION_INTERVAL_MINUTES, HORIZON_MINUTES};
