//! The triage-correction protocol: a stateful watcher that models an
//! operator miscategorization and its delayed repair.
//!
//! # Lifecycle
//!
//! ```text
//! Armed { trigger }            one random minute in the first 1200
//!   │  first admission at or after `trigger`
//!   ▼
//! Watching { victim, needed }  detection threshold drawn once, 3..=5
//!   │  `needed` attentions of patients other than the victim
//!   ▼
//! Done                         correction applied (or skipped for a C1
//!                              victim); inert for the rest of the run
//! ```
//!
//! The protocol itself only decides *when* and *whom*; the actual category
//! mutation goes through `Hospital::reassign_category` so the admission
//! queue is re-keyed and the change is logged like any other reassignment.

use triage_core::{Category, PatientId, SimRng, Tick};

/// The injection minute is drawn from the first 1200 minutes of the day,
/// leaving room for detection and correction before close-out.
const INJECTION_WINDOW_MINUTES: u32 = 1200;

#[derive(Copy, Clone, Debug)]
enum State {
    /// Waiting for the first admission at or after the trigger minute.
    Armed { trigger: Tick },
    /// Victim marked; counting attentions of other patients.
    Watching { victim: PatientId, needed: u32, seen: u32 },
    /// Correction fired (or was skipped).  Inert.
    Done,
}

/// Error-injection/detection/correction state machine.  At most one victim
/// and at most one correction per run.
pub struct CorrectionProtocol {
    state: State,
}

impl CorrectionProtocol {
    /// Arm the protocol with a randomly drawn trigger minute.
    pub fn new(rng: &mut SimRng) -> Self {
        Self::with_trigger(Tick(rng.gen_range(0..INJECTION_WINDOW_MINUTES)))
    }

    /// Arm the protocol at an exact trigger minute.  Deterministic entry
    /// point used by tests.
    pub fn with_trigger(trigger: Tick) -> Self {
        Self { state: State::Armed { trigger } }
    }

    /// The marked victim, if one exists yet.
    pub fn victim(&self) -> Option<PatientId> {
        match self.state {
            State::Watching { victim, .. } => Some(victim),
            _ => None,
        }
    }

    /// `true` once the protocol has fired (or skipped) its correction.
    pub fn is_done(&self) -> bool {
        matches!(self.state, State::Done)
    }

    /// Observe an admission.  The first patient admitted at or after the
    /// trigger minute becomes the victim; the detection threshold is drawn
    /// at that moment.  Returns `true` exactly when `id` was just marked.
    pub fn on_admission(&mut self, now: Tick, id: PatientId, rng: &mut SimRng) -> bool {
        match self.state {
            State::Armed { trigger } if now >= trigger => {
                self.state = State::Watching {
                    victim: id,
                    needed: rng.gen_range(3..=5),
                    seen: 0,
                };
                true
            }
            _ => false,
        }
    }

    /// Observe an attention event.  Attentions of the victim itself do not
    /// count toward detection.  Returns the victim's id exactly once, at the
    /// attention that reaches the threshold — the caller then applies the
    /// correction.
    pub fn on_attention(&mut self, attended: PatientId) -> Option<PatientId> {
        match &mut self.state {
            State::Watching { victim, needed, seen } if attended != *victim => {
                *seen += 1;
                if *seen >= *needed {
                    let v = *victim;
                    self.state = State::Done;
                    return Some(v);
                }
                None
            }
            _ => None,
        }
    }

    /// Draw the corrected category: uniform below `current`, i.e. strictly
    /// more urgent.  Every value in `1..current` already satisfies the
    /// strictly-smaller requirement, so a single draw suffices.
    ///
    /// Returns `None` for a C1 victim — there is no more urgent category to
    /// correct to, and the correction is skipped rather than looped on.
    pub fn corrected_category(current: Category, rng: &mut SimRng) -> Option<Category> {
        if current.is_most_urgent() {
            return None;
        }
        Category::new(rng.gen_range(1..current.value())).ok()
    }
}
