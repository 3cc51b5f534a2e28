//! Fluent builder for constructing a [`Sim`].

use std::collections::VecDeque;

use triage_core::{SimConfig, SimRng};
use triage_hospital::{Hospital, Patient};

use crate::correction::CorrectionProtocol;
use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — arrival load, area capacity, horizon, seed.
/// - `.patients(v)` — the ordered arrival sequence (from `triage-roster`).
///
/// # Optional inputs
///
/// | Method             | Default                                       |
/// |--------------------|-----------------------------------------------|
/// | `.correction(b)`   | `false` — no error injection                  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::new(144, 100, 42))
///     .patients(patients)
///     .correction(true)
///     .build()?;
/// let report = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    patients:   Vec<Patient>,
    correction: bool,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, patients: Vec::new(), correction: false }
    }

    /// Supply the ordered arrival sequence.  Arrival order is generation
    /// order; priority only matters once patients are in the admission
    /// queue.
    pub fn patients(mut self, patients: Vec<Patient>) -> Self {
        self.patients = patients;
        self
    }

    /// Enable the triage-correction protocol (error injection, detection,
    /// one-time repair).  Used by the saved-list simulation mode.
    pub fn correction(mut self, enabled: bool) -> Self {
        self.correction = enabled;
        self
    }

    /// Validate the configuration and assemble a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let cfg = &self.config;
        if cfg.patients_per_day == 0 {
            return Err(SimError::Config("patients_per_day must be at least 1".into()));
        }
        if cfg.horizon_minutes == 0 {
            return Err(SimError::Config("horizon_minutes must be at least 1".into()));
        }
        if cfg.attention_interval_minutes == 0 {
            return Err(SimError::Config("attention_interval_minutes must be at least 1".into()));
        }
        if cfg.arrival_interval_minutes() == 0 {
            return Err(SimError::Config(format!(
                "patients_per_day ({}) exceeds the horizon ({} minutes): arrival interval rounds to zero",
                cfg.patients_per_day, cfg.horizon_minutes
            )));
        }
        if cfg.area_capacity == 0 {
            return Err(SimError::Config("area_capacity must be at least 1".into()));
        }

        let mut rng = SimRng::new(cfg.seed);
        let protocol = self.correction.then(|| CorrectionProtocol::new(&mut rng));
        let hospital = Hospital::new(cfg.area_capacity);

        Ok(Sim::from_parts(
            self.config,
            hospital,
            VecDeque::from(self.patients),
            protocol,
            rng,
        ))
    }
}
