//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing minute counter, [`Tick`], over a fixed
//! 24-hour horizon.  Two resolutions coexist, both inherited from the
//! observable contract:
//!
//! - arrival times are recorded in **seconds** since simulation start;
//! - attention times are recorded in **minutes** (the tick at which the
//!   patient was attended).
//!
//! Using integers for both keeps all wait-time arithmetic exact; the helpers
//! here convert to human-readable `HH:MM:SS` only at display time.

use std::fmt;

/// Minutes in the simulated day.  The tick loop runs `0..HORIZON_MINUTES`.
pub const HORIZON_MINUTES: u32 = 1440;

/// Cadence of attention events: one extraction attempt every 15 minutes.
pub const ATTENTION_INTERVAL_MINUTES: u32 = 15;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation minute in `[0, HORIZON_MINUTES)`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u32);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Seconds since simulation start at this tick.
    #[inline]
    pub fn as_secs(self) -> u64 {
        self.0 as u64 * 60
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Format a duration of seconds since simulation start (midnight) as
/// `HH:MM:SS`.  Hours are not wrapped at 24: a wait can legitimately exceed
/// a day only in degenerate configurations, and truncating it would hide
/// that.
pub fn fmt_hms(secs: u64) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Constructed by the application crate and handed to `SimBuilder`, which
/// validates it before running.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Scheduled arrivals over the day.  The arrival cadence is derived as
    /// `horizon_minutes / patients_per_day` (integer division); a count that
    /// does not evenly divide the horizon simply leaves the trailing minutes
    /// without arrivals.
    pub patients_per_day: u32,

    /// Shared capacity of every attention area's queue.
    pub area_capacity: usize,

    /// Total minutes to simulate.  Default: [`HORIZON_MINUTES`].
    pub horizon_minutes: u32,

    /// Minutes between attention events.  Default: [`ATTENTION_INTERVAL_MINUTES`].
    pub attention_interval_minutes: u32,

    /// Master RNG seed.  The same seed and inputs always produce identical
    /// results.
    pub seed: u64,
}

impl SimConfig {
    /// A standard 24-hour configuration with the given arrival load.
    pub fn new(patients_per_day: u32, area_capacity: usize, seed: u64) -> Self {
        Self {
            patients_per_day,
            area_capacity,
            horizon_minutes: HORIZON_MINUTES,
            attention_interval_minutes: ATTENTION_INTERVAL_MINUTES,
            seed,
        }
    }

    /// Minutes between scheduled arrivals (integer division — see
    /// [`SimConfig::patients_per_day`]).
    #[inline]
    pub fn arrival_interval_minutes(&self) -> u32 {
        self.horizon_minutes / self.patients_per_day
    }

    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.horizon_minutes)
    }
}
