//! `triage-hospital` — patient state and the priority-ordered admission
//! structures of the ER simulator.
//!
//! # Ownership layout
//!
//! [`Hospital`] is the single owner of all [`Patient`] records, keyed by
//! `PatientId`.  Every other structure — the admission queue, the per-area
//! queues, the attended/unattended lists — holds ids only and resolves them
//! through the hospital's map.  This keeps mutation sites in one place and
//! avoids shared-ownership ceremony for what is a strictly single-threaded
//! aggregate.
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`patient`]   | `Patient`, `PatientStatus`                           |
//! | [`admission`] | `AdmissionQueue` — global priority queue             |
//! | [`board`]     | `AreaQueue`, `AreaBoard` — bounded per-area queues   |
//! | [`hospital`]  | `Hospital` aggregate                                 |

pub mod admission;
pub mod board;
pub mod hospital;
pub mod patient;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use admission::AdmissionQueue;
pub use board::{AreaBoard, AreaQueue};
pub use hospital::Hospital;
pub use patient::{Patient, PatientStatus};
