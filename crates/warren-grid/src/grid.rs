//! The two-layer grid space.
//!
//! # Layers
//!
//! Two parallel dense arrays indexed by `y * size + x`:
//!
//! - `grass`: discretised grass units per cell (a density level for
//!   foraging and colour-class rendering, not a continuous resource);
//! - `occupancy`: the exclusive one-rabbit-per-cell mapping.
//!
//! # Occupancy invariant
//!
//! `occupancy[cell] == Some(id)` exactly when the live rabbit `id` has
//! `position == cell`.  `GridSpace` owns the occupancy half; the position
//! half lives on the rabbit and is updated by `Rabbit::walk` in the same
//! call that mutates occupancy, so the two are never observably split.

use warren_core::{RabbitId, SimRng};

use crate::Cell;

/// The simulation's spatial state: grass density plus rabbit occupancy.
///
/// Created once per run with a fixed size and never resized.  All methods
/// are total; collisions refuse silently (returning `false`) rather than
/// overwriting an existing occupant.
pub struct GridSpace {
    size:      u32,
    grass:     Vec<u32>,
    occupancy: Vec<Option<RabbitId>>,
}

impl GridSpace {
    /// Allocate an empty grid of `size × size` cells.
    pub fn new(size: u32) -> Self {
        let cells = size as usize * size as usize;
        Self {
            size,
            grass:     vec![0; cells],
            occupancy: vec![None; cells],
        }
    }

    /// Side length of the square grid.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    fn idx(&self, cell: Cell) -> usize {
        cell.y as usize * self.size as usize + cell.x as usize
    }

    /// Iterator over every cell in row-major order, for renderers and tests.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Cell::new(x, y)))
    }

    /// A cell drawn uniformly from the whole grid.
    pub fn random_cell(&self, rng: &mut SimRng) -> Cell {
        Cell::new(rng.gen_range(0..self.size), rng.gen_range(0..self.size))
    }

    // ── Grass layer ───────────────────────────────────────────────────────

    /// Scatter `units` single-unit increments across `units` independently
    /// chosen random cells.  A cell picked more than once in the same call
    /// stacks accordingly; there is no upper bound on a cell's grass.
    pub fn grow_grass(&mut self, units: u32, rng: &mut SimRng) {
        for _ in 0..units {
            let cell = self.random_cell(rng);
            self.deposit_grass(cell, 1);
        }
    }

    /// Add `units` of grass to one cell — the deterministic primitive that
    /// [`grow_grass`][Self::grow_grass] scatters with.
    pub fn deposit_grass(&mut self, cell: Cell, units: u32) {
        let i = self.idx(cell);
        self.grass[i] += units;
    }

    /// Grass units at `cell`.
    #[inline]
    pub fn grass_at(&self, cell: Cell) -> u32 {
        self.grass[self.idx(cell)]
    }

    #[inline]
    pub fn has_grass(&self, cell: Cell) -> bool {
        self.grass_at(cell) > 0
    }

    /// Strip `cell` bare.  Foraging is all-or-nothing per visit: however
    /// many units were stacked, one visit takes them all.  Idempotent.
    pub fn consume_grass(&mut self, cell: Cell) {
        let i = self.idx(cell);
        self.grass[i] = 0;
    }

    /// Total grass units across the whole grid.
    pub fn total_grass(&self) -> u64 {
        self.grass.iter().map(|&g| g as u64).sum()
    }

    // ── Occupancy layer ───────────────────────────────────────────────────

    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupancy[self.idx(cell)].is_some()
    }

    /// The rabbit standing on `cell`, if any.
    #[inline]
    pub fn occupant(&self, cell: Cell) -> Option<RabbitId> {
        self.occupancy[self.idx(cell)]
    }

    /// Claim `cell` for `id`.  Refuses silently (returns `false`) if the
    /// cell is already occupied — the existing occupant is never displaced.
    pub fn place(&mut self, id: RabbitId, cell: Cell) -> bool {
        let i = self.idx(cell);
        if self.occupancy[i].is_some() {
            return false;
        }
        self.occupancy[i] = Some(id);
        true
    }

    /// Move `id` from `from` to `to` in one update.  Refuses (returns
    /// `false`, grid untouched) if `to` is occupied.
    pub fn relocate(&mut self, id: RabbitId, from: Cell, to: Cell) -> bool {
        let to_i = self.idx(to);
        if self.occupancy[to_i].is_some() {
            return false;
        }
        let from_i = self.idx(from);
        debug_assert_eq!(self.occupancy[from_i], Some(id), "relocate source not held by {id}");
        self.occupancy[from_i] = None;
        self.occupancy[to_i] = Some(id);
        true
    }

    /// Clear the occupancy of `cell` (used when a rabbit dies there).
    pub fn vacate(&mut self, cell: Cell) {
        let i = self.idx(cell);
        self.occupancy[i] = None;
    }

    /// Every currently unoccupied cell, in row-major order.
    pub fn free_cells(&self) -> Vec<Cell> {
        self.cells().filter(|&c| !self.is_occupied(c)).collect()
    }

    /// A cell drawn uniformly from the unoccupied ones, or `None` when the
    /// grid is full.  O(cells) per call — fine at this scale.
    pub fn random_free_cell(&self, rng: &mut SimRng) -> Option<Cell> {
        let free = self.free_cells();
        rng.choose(&free).copied()
    }

    /// Number of occupied cells; equals the live population by the
    /// occupancy invariant.
    pub fn occupied_count(&self) -> usize {
        self.occupancy.iter().filter(|o| o.is_some()).count()
    }
}
