//! One rabbit and its per-tick step protocol.

use warren_core::{RabbitId, SimRng};
use warren_grid::{Cell, Direction, GridSpace};

/// A single rabbit: stable id, current cell, life energy, and the heading
/// drawn for the current tick.
///
/// Energy is a plain `i32` and is never clamped — it may go negative, and
/// death is detected at `energy < 0` (strictly below zero, a boundary the
/// model deliberately keeps).
#[derive(Clone, Debug)]
pub struct Rabbit {
    pub id:       RabbitId,
    pub position: Cell,
    pub energy:   i32,
    pub heading:  Direction,
}

impl Rabbit {
    /// A rabbit standing at `position` with `energy` and a freshly drawn
    /// heading.  The caller ([`Colony::spawn`][crate::Colony::spawn]) has
    /// already claimed `position` on the grid.
    pub fn new(id: RabbitId, position: Cell, energy: i32, rng: &mut SimRng) -> Self {
        Self {
            id,
            position,
            energy,
            heading: Direction::sample(rng),
        }
    }

    /// Execute one tick of behaviour: redraw the heading, then walk.
    pub fn step(&mut self, grid: &mut GridSpace, rng: &mut SimRng, forage_reward: i32) {
        self.heading = Direction::sample(rng);
        self.walk(grid, forage_reward);
    }

    /// The deterministic half of the step protocol, with `heading` already
    /// chosen (scenario tests set it directly):
    ///
    /// 1. candidate cell = position + heading, toroidally wrapped;
    /// 2. move there if unoccupied, else stay put (the draw is wasted);
    /// 3. forage only if the move succeeded: a grassy arrival cell is
    ///    stripped bare for `forage_reward` energy;
    /// 4. age: energy −1, unconditionally.
    ///
    /// Occupancy and `self.position` change inside the same call, so the
    /// grid invariant holds at every observable point.
    pub fn walk(&mut self, grid: &mut GridSpace, forage_reward: i32) {
        let candidate = self.position.step(self.heading, grid.size());

        if grid.relocate(self.id, self.position, candidate) {
            self.position = candidate;
            if grid.has_grass(candidate) {
                grid.consume_grass(candidate);
                self.energy += forage_reward;
            }
        }

        self.energy -= 1;
    }

    /// `true` once energy has dropped below zero — the death criterion.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.energy < 0
    }

    /// `true` while energy exceeds `threshold` — triggers one birth attempt
    /// per tick.
    #[inline]
    pub fn is_fertile(&self, threshold: i32) -> bool {
        self.energy > threshold
    }
}
