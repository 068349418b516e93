//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! The whole engine draws from one `SimRng` seeded from `WarrenConfig::seed`:
//! movement direction coins, grass-scatter cells, seeding/birth placement,
//! and the per-tick turn-order shuffle.  Because ticks are single-threaded
//! and the draw order is fixed by the tick loop, an identical seed replays
//! an identical run — the property every scenario test leans on.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level deterministic RNG.
///
/// A thin wrapper over `SmallRng` so call sites never name the underlying
/// generator and swapping it stays a one-line change.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed deterministically from the run's master seed.
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

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.  Returns `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
