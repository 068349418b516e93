//! The live rabbit population.

use warren_core::{RabbitId, SimRng};
use warren_grid::{Cell, GridSpace};

use crate::Rabbit;

/// The unordered collection of live rabbits plus id allocation.
///
/// Insertion order only matters as within-tick turn order, and the tick
/// loop shuffles before stepping, so no ordering guarantee is offered.
/// Every mutation that adds or drops a rabbit goes through [`spawn`] /
/// [`retain`] so the grid's occupancy layer and this collection cannot
/// drift apart.
///
/// [`spawn`]: Colony::spawn
/// [`retain`]: Colony::retain
pub struct Colony {
    rabbits: Vec<Rabbit>,
    next_id: RabbitId,
}

impl Default for Colony {
    fn default() -> Self {
        Self::new()
    }
}

impl Colony {
    pub fn new() -> Self {
        Self {
            rabbits: Vec::new(),
            next_id: RabbitId::FIRST,
        }
    }

    /// Live population count.
    #[inline]
    pub fn len(&self) -> usize {
        self.rabbits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rabbits.is_empty()
    }

    /// Read-only view of every live rabbit.
    #[inline]
    pub fn rabbits(&self) -> &[Rabbit] {
        &self.rabbits
    }

    /// Mutable view, used by the tick loop for shuffling and stepping.
    #[inline]
    pub fn rabbits_mut(&mut self) -> &mut [Rabbit] {
        &mut self.rabbits
    }

    /// Iterator over live rabbits in current (shuffled) order.
    pub fn iter(&self) -> impl Iterator<Item = &Rabbit> + '_ {
        self.rabbits.iter()
    }

    /// Attempt to bring a new rabbit to life at `cell`.
    ///
    /// Claims the cell on the grid first; if the cell is occupied the
    /// attempt silently fails (`None`) and no rabbit is created — the id
    /// counter is not advanced either.  On success the newborn is appended
    /// to the collection, so passes iterating a pre-spawn snapshot never
    /// revisit it.
    pub fn spawn(
        &mut self,
        grid:   &mut GridSpace,
        cell:   Cell,
        energy: i32,
        rng:    &mut SimRng,
    ) -> Option<RabbitId> {
        let id = self.next_id;
        if !grid.place(id, cell) {
            return None;
        }
        self.next_id = id.next();
        self.rabbits.push(Rabbit::new(id, cell, energy, rng));
        Some(id)
    }

    /// Drop every rabbit for which `keep` returns `false`.
    ///
    /// The caller vacates the corresponding grid cells before (or while)
    /// dropping — see `PopulationController` in `warren-sim`.
    pub fn retain<F: FnMut(&Rabbit) -> bool>(&mut self, keep: F) {
        self.rabbits.retain(keep);
    }
}
