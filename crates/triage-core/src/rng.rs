//! Deterministic run-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! Every source of randomness in the simulator — roster generation, the
//! correction protocol's injection minute, detection threshold, and corrected
//! category — draws from a single `SimRng` seeded from the run configuration.
//! Components never reach for thread-local randomness; they take
//! `&mut SimRng` so tests can supply a fixed seed and assert exact behavior.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Run-level deterministic RNG.
///
/// Used only in single-threaded contexts; independent simulation runs must
/// each own their own `SimRng`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.  Returns `None` if empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
