//! Simulation configuration.

use crate::{WarrenError, WarrenResult};

/// Parameters supplied once at seeding time.
///
/// Typically loaded from a TOML/JSON file by the application shell (enable
/// the `serde` feature) and handed to `Sim::new`.  The defaults reproduce
/// the classic rabbits-and-grass parameterisation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WarrenConfig {
    /// Side length of the square toroidal grid.  Must be > 0.
    pub grid_size: u32,

    /// Rabbit placements attempted at seeding.  Collisions are skipped
    /// silently, so the actual starting population may be slightly lower.
    pub initial_rabbits: u32,

    /// Grass units scattered across the grid at seeding.
    pub initial_grass: u32,

    /// Grass units scattered per tick.
    pub grass_growth_rate: u32,

    /// Energy above which a rabbit triggers one birth attempt per tick.
    pub birth_threshold: i32,

    /// Energy a rabbit is born with (both seeded and birthed).
    pub birth_energy: i32,

    /// Energy gained by consuming the grass at a cell, regardless of how
    /// many units were stacked there.
    pub forage_reward: i32,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl Default for WarrenConfig {
    fn default() -> Self {
        Self {
            grid_size:         100,
            initial_rabbits:   10,
            initial_grass:     1_000,
            grass_growth_rate: 15,
            birth_threshold:   300,
            birth_energy:      50,
            forage_reward:     10,
            seed:              0,
        }
    }
}

impl WarrenConfig {
    /// Number of cells in the grid.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.grid_size as usize * self.grid_size as usize
    }

    /// Reject configurations the engine cannot represent.
    ///
    /// Out-of-range values are a shell-side precondition; this is the one
    /// place they are turned into an error instead of undefined behavior.
    pub fn validate(&self) -> WarrenResult<()> {
        if self.grid_size == 0 {
            return Err(WarrenError::Config("grid_size must be > 0".into()));
        }
        Ok(())
    }
}
