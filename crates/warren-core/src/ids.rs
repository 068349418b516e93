//! Strongly typed rabbit identifier.
//!
//! Rabbits are removed from the population on death, so positional indices
//! into the colony `Vec` are not stable across ticks.  `RabbitId` is a
//! monotonically increasing handle assigned once at spawn and never reused;
//! the grid's occupancy layer stores it so that occupancy checks never point
//! at a stale slot.

use std::fmt;

/// Stable identity of one rabbit, assigned at spawn.
///
/// `Copy + Ord + Hash` so it can be used as a map key or sorted without
/// ceremony.  The inner integer is `pub` for direct comparison in tests.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RabbitId(pub u32);

impl RabbitId {
    /// The identity handed to the first rabbit ever spawned.
    pub const FIRST: RabbitId = RabbitId(0);

    /// The id that follows `self` in spawn order.
    #[inline]
    pub fn next(self) -> RabbitId {
        RabbitId(self.0 + 1)
    }
}

impl fmt::Display for RabbitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RabbitId({})", self.0)
    }
}
