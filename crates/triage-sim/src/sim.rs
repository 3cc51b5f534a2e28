//! The `Sim` struct and its minute loop.

use std::collections::VecDeque;

use triage_core::{SimConfig, SimRng, Tick};
use triage_hospital::{Hospital, Patient};

use crate::correction::CorrectionProtocol;
use crate::observer::SimObserver;
use crate::{SimError, SimResult};

// ── CloseReport ───────────────────────────────────────────────────────────────

/// Final counts produced by close-out.
///
/// Invariant: `attended + unattended == total_registered`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CloseReport {
    pub total_registered: usize,
    pub attended:         usize,
    pub unattended:       usize,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// Owns the hospital, the pending-arrival sequence, the run RNG, and the
/// optional correction protocol.  Everything advances synchronously inside
/// [`Sim::run`] — one logical timeline, no shared state.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    config:   SimConfig,
    hospital: Hospital,
    /// Arrival-ordered patients not yet registered.
    pending:  VecDeque<Patient>,
    protocol: Option<CorrectionProtocol>,
    rng:      SimRng,
}

impl Sim {
    pub(crate) fn from_parts(
        config:   SimConfig,
        hospital: Hospital,
        pending:  VecDeque<Patient>,
        protocol: Option<CorrectionProtocol>,
        rng:      SimRng,
    ) -> Self {
        Self { config, hospital, pending, protocol, rng }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the full horizon, then close out.  Observer hooks fire at each
    /// observable event; close-out runs exactly once, after the loop.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<CloseReport> {
        let arrival_interval = self.config.arrival_interval_minutes();
        let attention_interval = self.config.attention_interval_minutes;

        for minute in 0..self.config.horizon_minutes {
            self.process_minute(Tick(minute), arrival_interval, attention_interval, observer)?;
        }

        self.hospital.close_out();
        let report = CloseReport {
            total_registered: self.hospital.total_registered(),
            attended:         self.hospital.attended_count(),
            unattended:       self.hospital.unattended_count(),
        };
        observer.on_close(&report);
        Ok(report)
    }

    /// Read access to the hospital, for post-run reporting.
    pub fn hospital(&self) -> &Hospital {
        &self.hospital
    }

    /// Mutable access, for operator-driven reassignment after the run.
    pub fn hospital_mut(&mut self) -> &mut Hospital {
        &mut self.hospital
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    // ── Core minute processing ────────────────────────────────────────────

    /// One simulated minute.  Attention runs before arrival so a patient
    /// arriving on a coincident tick is not attended in its arrival minute;
    /// it competes on priority at the next attention tick instead.
    fn process_minute<O: SimObserver>(
        &mut self,
        now:                Tick,
        arrival_interval:   u32,
        attention_interval: u32,
        observer:           &mut O,
    ) -> SimResult<()> {
        // ── Attention phase ───────────────────────────────────────────────
        if now.0 % attention_interval == 0 {
            if let Some(id) = self.hospital.attend_next(now) {
                if let Some(p) = self.hospital.patient(id) {
                    observer.on_attention(now, p);
                }
                self.feed_correction(now, id, observer)?;
            }
        }

        // ── Arrival phase ─────────────────────────────────────────────────
        if now.0 % arrival_interval == 0 {
            if let Some(patient) = self.pending.pop_front() {
                let id = patient.id();
                self.hospital.register(patient);
                if let Some(p) = self.hospital.patient(id) {
                    observer.on_arrival(now, p);
                }
                let marked = match &mut self.protocol {
                    Some(proto) => proto.on_admission(now, id, &mut self.rng),
                    None => false,
                };
                if marked {
                    if let Some(p) = self.hospital.patient(id) {
                        observer.on_triage_error(now, p);
                    }
                }
            }
        }

        Ok(())
    }

    /// Feed an attention event to the correction protocol and apply the
    /// correction when detection completes.
    ///
    /// A C1 victim has no strictly more urgent category to move to; the
    /// protocol goes inert without mutating anything.
    fn feed_correction<O: SimObserver>(
        &mut self,
        now:      Tick,
        attended: triage_core::PatientId,
        observer: &mut O,
    ) -> SimResult<()> {
        let Some(proto) = &mut self.protocol else {
            return Ok(());
        };
        let Some(victim) = proto.on_attention(attended) else {
            return Ok(());
        };
        // Victims are marked at admission, so the lookup cannot miss; surface
        // it as a hospital error rather than panicking if it ever does.
        let old = self
            .hospital
            .patient(victim)
            .map(|p| p.category())
            .ok_or(SimError::Hospital(triage_core::TriageError::PatientNotFound(victim)))?;
        if let Some(new) = CorrectionProtocol::corrected_category(old, &mut self.rng) {
            self.hospital.reassign_category(victim, new)?;
            if let Some(p) = self.hospital.patient(victim) {
                observer.on_correction(now, p, old, new);
            }
        }
        Ok(())
    }
}
