//! The birth/death rule, applied once per tick.

use warren_agent::Colony;
use warren_core::SimRng;
use warren_grid::GridSpace;

/// What one population update did, for conservation accounting:
/// `population_after = population_before + births - deaths`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct PopulationDelta {
    pub births: usize,
    pub deaths: usize,
}

/// Applies the population-dynamics rule over the colony after all rabbits
/// have stepped: a birth pass, then a death pass, never interleaved.
///
/// Births are evaluated against the pre-death population, so a rabbit that
/// dies this tick can still trigger a birth in the same tick.
#[derive(Clone, Debug)]
pub struct PopulationController {
    /// Energy strictly above which a rabbit triggers one birth attempt.
    pub birth_threshold: i32,
    /// Energy a newborn starts with.  The parent's energy is untouched —
    /// reproduction is free in this model.
    pub birth_energy: i32,
}

impl PopulationController {
    pub fn new(birth_threshold: i32, birth_energy: i32) -> Self {
        Self { birth_threshold, birth_energy }
    }

    /// Run both passes and report the delta.
    ///
    /// **Birth pass**: for every rabbit in the pre-pass snapshot with
    /// `energy > birth_threshold`, attempt one spawn at a uniformly random
    /// free cell.  With no free cell left the attempt is a silent no-op;
    /// there is no retry.  Newborns are appended past the snapshot and not
    /// re-scanned.
    ///
    /// **Death pass**: every rabbit with `energy < 0` has its cell vacated
    /// and is removed from the colony.
    pub fn apply(
        &self,
        colony: &mut Colony,
        grid:   &mut GridSpace,
        rng:    &mut SimRng,
    ) -> PopulationDelta {
        let mut delta = PopulationDelta::default();

        // ── Birth pass ────────────────────────────────────────────────────
        let snapshot = colony.len();
        for i in 0..snapshot {
            if !colony.rabbits()[i].is_fertile(self.birth_threshold) {
                continue;
            }
            let Some(cell) = grid.random_free_cell(rng) else {
                continue; // grid full: silent no-op
            };
            if colony.spawn(grid, cell, self.birth_energy, rng).is_some() {
                delta.births += 1;
            }
        }

        // ── Death pass ────────────────────────────────────────────────────
        for rabbit in colony.iter() {
            if rabbit.is_exhausted() {
                grid.vacate(rabbit.position);
                delta.deaths += 1;
            }
        }
        colony.retain(|r| !r.is_exhausted());

        delta
    }
}
