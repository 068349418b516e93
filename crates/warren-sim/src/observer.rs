//! Simulation observer trait for progress reporting and data collection.

use warren_core::Tick;

use crate::TickSummary;

/// Callbacks invoked by [`Sim::run_ticks`][crate::Sim::run_ticks] at tick
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers get read access to the
/// aggregate [`TickSummary`]; for per-cell or per-rabbit data (rendering,
/// probing) query the [`Sim`][crate::Sim] directly between calls.
///
/// # Example — population printer
///
/// ```rust,ignore
/// struct CensusPrinter { interval: u64 }
///
/// impl SimObserver for CensusPrinter {
///     fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} rabbits", summary.population);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before any processing of the tick.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the population update, with the tick's aggregates.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called once after the last requested tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `run_ticks` but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
