//! `warren-sim` — tick loop orchestrator for the `rust_warren` simulation.
//!
//! # Four-phase tick loop
//!
//! ```text
//! advance_tick():
//!   ① Growth   — scatter grass_growth_rate units at random cells.
//!   ② Shuffle  — randomise the colony's turn order (fairness, so no
//!                rabbit keeps a positional advantage across ticks).
//!   ③ Step     — every rabbit, sequentially in shuffled order: redraw
//!                heading, move if the target is free, forage on arrival,
//!                age by one.  Order-dependent by design: one rabbit's
//!                move changes the next one's legality.
//!   ④ Update   — birth pass then death pass (PopulationController).
//! ```
//!
//! # Run states
//!
//! `Idle → Seeding → Running → Stopped`, driven by `Sim::initialize`,
//! `Sim::start`, and `Sim::stop`.  `advance_tick` is only legal while
//! `Running`; everything else is an [`SimError::InvalidState`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use warren_core::WarrenConfig;
//! use warren_sim::{NoopObserver, Sim};
//!
//! let mut sim = Sim::new(WarrenConfig::default())?;
//! sim.initialize()?;
//! sim.start()?;
//! sim.run_ticks(1_000, &mut NoopObserver)?;
//! ```

pub mod error;
pub mod observer;
pub mod population;
pub mod sim;


pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use population::{PopulationController, PopulationDelta};
pub use sim::{RunState, Sim, TickSummary};
