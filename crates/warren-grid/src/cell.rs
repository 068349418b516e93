//! Toroidal cell coordinates and movement directions.

use std::fmt;

use warren_core::SimRng;

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A grid coordinate, always in `[0, size)` on both axes.
///
/// `Cell` itself carries no grid size; wrap arithmetic happens in
/// [`Cell::step`], which takes the size explicitly.  Constructing a cell
/// out of range and handing it to a `GridSpace` of a smaller size is a
/// caller bug — the engine only ever produces wrapped coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Cell { x, y }
    }

    /// The neighbouring cell one step in `dir`, with each axis wrapped
    /// independently modulo `size` (toroidal topology: stepping past the
    /// maximum wraps to 0; stepping below 0 wraps to `size - 1`).
    #[inline]
    pub fn step(self, dir: Direction, size: u32) -> Cell {
        let (dx, dy) = dir.delta();
        Cell {
            x: wrap(self.x, dx, size),
            y: wrap(self.y, dy, size),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Wrap `coord + delta` into `[0, size)`.  `delta` is always ±1 here, but
/// `rem_euclid` keeps the arithmetic correct for any offset.
#[inline]
fn wrap(coord: u32, delta: i32, size: u32) -> u32 {
    (coord as i64 + delta as i64).rem_euclid(size as i64) as u32
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four orthogonal unit vectors a rabbit can move along.
///
/// Rabbits have no persistent heading — a fresh direction is drawn every
/// tick via [`Direction::sample`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    East,
    West,
    North,
    South,
}

impl Direction {
    /// All four directions, for exhaustive iteration in tests and renderers.
    pub const ALL: [Direction; 4] =
        [Direction::East, Direction::West, Direction::North, Direction::South];

    /// The unit vector for this direction.  North is −y, matching the
    /// row-major grid layout (y grows downward).
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::East  => (1, 0),
            Direction::West  => (-1, 0),
            Direction::North => (0, -1),
            Direction::South => (0, 1),
        }
    }

    /// Draw a direction uniformly at random: one coin picks the axis, a
    /// second picks the sign.
    pub fn sample(rng: &mut SimRng) -> Direction {
        if rng.gen_bool(0.5) {
            if rng.gen_bool(0.5) { Direction::East } else { Direction::West }
        } else if rng.gen_bool(0.5) {
            Direction::South
        } else {
            Direction::North
        }
    }
}
