//! `warren-grid` — the toroidal grid space for the `rust_warren` simulation.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`cell`]   | `Cell` (wrapped coordinate), `Direction` (unit vectors) |
//! | [`grid`]   | `GridSpace` (grass layer + occupancy layer)             |
//!
//! # Totality
//!
//! Every operation here is defined for every reachable grid state.  All
//! coordinate arithmetic wraps toroidally before indexing, so no invalid
//! coordinate can escape, and collisions (placing or moving onto an occupied
//! cell) are silent refusals signalled by a `bool`, never errors.

pub mod cell;
pub mod grid;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, Direction};
pub use grid::GridSpace;
