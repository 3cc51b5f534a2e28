//! `triage-sim` — the time-driven scheduling loop of the ER simulator.
//!
//! # Tick loop
//!
//! ```text
//! for minute in 0..config.horizon_minutes:
//!   ① Attention — every attention_interval minutes: extract the
//!                 highest-priority patient, mark it attended, route it to
//!                 its area, feed the correction protocol.
//!   ② Arrival   — every arrival_interval minutes: register the next
//!                 pending patient; the correction protocol may mark it as
//!                 the miscategorized victim.
//! close-out      — classify everything still queued as unattended.
//! ```
//!
//! Attention runs before arrival within a shared minute, so a patient
//! arriving on an attention tick waits for the next one — priority, not
//! arrival luck, decides who is seen first.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use triage_core::SimConfig;
//! use triage_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::new(144, 100, 42))
//!     .patients(patients)
//!     .build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod correction;
pub mod error;
pub mod observer;
pub mod sim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use correction::CorrectionProtocol;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{CloseReport, Sim};
