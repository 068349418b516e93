//! `warren-core` — foundational types for the `rust_warren` rabbits-and-grass
//! simulation.
//!
//! This crate is a dependency of every other `warren-*` crate.  It
//! intentionally has no `warren-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                       |
//! |-------------|------------------------------------------------|
//! | [`ids`]     | `RabbitId`                                     |
//! | [`tick`]    | `Tick` counter                                 |
//! | [`rng`]     | `SimRng` (seedable deterministic RNG wrapper)  |
//! | [`config`]  | `WarrenConfig`                                 |
//! | [`error`]   | `WarrenError`, `WarrenResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod tick;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::WarrenConfig;
pub use error::{WarrenError, WarrenResult};
pub use ids::RabbitId;
pub use rng::SimRng;
pub use tick::Tick;
