//! Simulation observer trait for event reporting and data collection.

use triage_core::{Category, Tick};
use triage_hospital::Patient;

use crate::CloseReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at the simulation's
/// observable events.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The console layer implements this to
/// print the event lines; tests implement it to record exact sequences.
pub trait SimObserver {
    /// A patient was registered into the hospital.
    fn on_arrival(&mut self, _tick: Tick, _patient: &Patient) {}

    /// A patient was extracted from the admission queue and attended.
    fn on_attention(&mut self, _tick: Tick, _patient: &Patient) {}

    /// The correction protocol marked this patient's category as an
    /// operator mistake at admission time.
    fn on_triage_error(&mut self, _tick: Tick, _patient: &Patient) {}

    /// The correction protocol repaired the victim's category.  `patient`
    /// already carries the corrected (`new`) category.
    fn on_correction(&mut self, _tick: Tick, _patient: &Patient, _old: Category, _new: Category) {}

    /// Called once after close-out, with the final counts.
    fn on_close(&mut self, _report: &CloseReport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
