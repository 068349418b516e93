//! `warren-agent` — rabbit agents and the live-population collection.
//!
//! # Crate layout
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`rabbit`]  | `Rabbit` — position, energy, per-tick step protocol |
//! | [`colony`]  | `Colony` — spawn/remove bookkeeping, id allocation  |
//!
//! The birth/death *rule* (who reproduces, who dies) lives one layer up in
//! `warren-sim`; this crate only knows how one rabbit behaves for one tick
//! and how the collection stays consistent with grid occupancy.

pub mod colony;
pub mod rabbit;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use colony::Colony;
pub use rabbit::Rabbit;
