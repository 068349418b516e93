//! meadow — smallest example shell for the rust_warren simulation.
//!
//! Runs the classic rabbits-and-grass parameterisation for a fixed number
//! of ticks and prints a periodic census.  This binary is the "outer
//! application" the core deliberately knows nothing about: it owns the
//! cadence, drives `advance_tick` via `run_ticks`, and samples the query
//! surface through an observer.  Swap the printer for a renderer to get a
//! live visualisation without touching the core.

use anyhow::Result;

use warren_core::{Tick, WarrenConfig};
use warren_sim::{Sim, SimObserver, TickSummary};

// ── Constants ─────────────────────────────────────────────────────────────────

const TOTAL_TICKS:     u64 = 500;
const CENSUS_INTERVAL: u64 = 10;
const SEED:            u64 = 42;

// ── Observer ──────────────────────────────────────────────────────────────────

struct CensusPrinter {
    interval: u64,
    peak_population: usize,
}

impl SimObserver for CensusPrinter {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.peak_population = self.peak_population.max(summary.population);
        if tick.0 % self.interval == 0 {
            println!(
                "{tick}: {} rabbits, {} grass units (+{} births, -{} deaths)",
                summary.population, summary.total_grass, summary.births, summary.deaths
            );
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        println!("done at {final_tick}; peak population {}", self.peak_population);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = WarrenConfig { seed: SEED, ..WarrenConfig::default() };
    println!(
        "meadow: {0}×{0} grid, {1} rabbits, birth threshold {2}",
        config.grid_size, config.initial_rabbits, config.birth_threshold
    );

    let mut sim = Sim::new(config)?;
    sim.initialize()?;
    sim.start()?;

    let mut census = CensusPrinter { interval: CENSUS_INTERVAL, peak_population: 0 };
    sim.run_ticks(TOTAL_TICKS, &mut census)?;
    sim.stop()?;

    Ok(())
}
