//! The `Sim` struct: run-state machine, tick loop, and query surface.

use tracing::{debug, info};

use warren_agent::{Colony, Rabbit};
use warren_core::{RabbitId, SimRng, Tick, WarrenConfig};
use warren_grid::{Cell, GridSpace};

use crate::{PopulationController, SimError, SimObserver, SimResult};

// ── Run state ─────────────────────────────────────────────────────────────────

/// Lifecycle of a simulation run.
///
/// ```text
/// Idle ──initialize()──▶ Seeding ──start()──▶ Running ──stop()──▶ Stopped
/// ```
///
/// There is no pause/resume beyond these states; a tick either completes
/// all four phases or the process itself is the unit of stop.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunState {
    /// Constructed; grid allocated, nothing placed on it yet.
    Idle,
    /// Initial grass scattered and starting population seeded.
    Seeding,
    /// Ticks may be advanced.
    Running,
    /// Externally stopped; terminal.
    Stopped,
}

// ── TickSummary ───────────────────────────────────────────────────────────────

/// Aggregates of one completed tick, handed to observers and returned by
/// [`Sim::advance_tick`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TickSummary {
    /// The tick that just executed.
    pub tick: Tick,
    /// Successful births this tick.
    pub births: usize,
    /// Removals (`energy < 0`) this tick.
    pub deaths: usize,
    /// Live population after the update.
    pub population: usize,
    /// Grass units across the whole grid after the update.
    pub total_grass: u64,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation core: grid, colony, RNG, and the tick driver.
///
/// Owns all mutable simulation state exclusively for the duration of a run.
/// External collaborators (renderers, plotters, parameter UIs) never mutate
/// it — they read the query surface between ticks, or receive a
/// [`TickSummary`] through a [`SimObserver`].
///
/// Execution is single-threaded and synchronous: exactly one tick is in
/// flight at a time, and rabbits step strictly sequentially because each
/// move mutates the shared occupancy that the next move's legality depends
/// on.
pub struct Sim {
    pub config: WarrenConfig,
    pub grid:   GridSpace,
    pub colony: Colony,
    pub rng:    SimRng,

    population: PopulationController,
    state:      RunState,
    tick:       Tick,
}

impl Sim {
    /// Validate `config` and allocate an empty grid.  The returned `Sim` is
    /// `Idle`; call [`initialize`][Self::initialize] then
    /// [`start`][Self::start] before advancing ticks.
    pub fn new(config: WarrenConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            grid:       GridSpace::new(config.grid_size),
            colony:     Colony::new(),
            rng:        SimRng::new(config.seed),
            population: PopulationController::new(config.birth_threshold, config.birth_energy),
            state:      RunState::Idle,
            tick:       Tick::ZERO,
            config,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Seed the run (`Idle → Seeding`): scatter the initial grass, then
    /// attempt the initial rabbit placements at uniformly random cells.
    ///
    /// A placement that hits an occupied cell is silently skipped — no
    /// retry — so the actual starting population may fall below
    /// `initial_rabbits`.  Attempts also stop counting once the grid is at
    /// capacity.
    pub fn initialize(&mut self) -> SimResult<()> {
        self.expect(RunState::Idle, "initialize")?;

        self.grid.grow_grass(self.config.initial_grass, &mut self.rng);

        for _ in 0..self.config.initial_rabbits {
            if self.colony.len() >= self.config.capacity() {
                break;
            }
            let cell = self.grid.random_cell(&mut self.rng);
            // occupied pick: silent skip
            let _ = self
                .colony
                .spawn(&mut self.grid, cell, self.config.birth_energy, &mut self.rng);
        }

        info!(
            requested = self.config.initial_rabbits,
            seeded = self.colony.len(),
            grass = self.grid.total_grass(),
            "seeding complete"
        );
        self.state = RunState::Seeding;
        Ok(())
    }

    /// `Seeding → Running`.
    pub fn start(&mut self) -> SimResult<()> {
        self.expect(RunState::Seeding, "start")?;
        self.state = RunState::Running;
        info!(population = self.colony.len(), "simulation started");
        Ok(())
    }

    /// `Running → Stopped`.  Terminal; a stopped sim cannot be restarted.
    pub fn stop(&mut self) -> SimResult<()> {
        self.expect(RunState::Running, "stop")?;
        self.state = RunState::Stopped;
        info!(tick = %self.tick, population = self.colony.len(), "simulation stopped");
        Ok(())
    }

    fn expect(&self, expected: RunState, op: &'static str) -> SimResult<()> {
        if self.state != expected {
            return Err(SimError::InvalidState { expected, actual: self.state, op });
        }
        Ok(())
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Execute one full tick and return its aggregates.
    ///
    /// Phases, strictly in order: grass growth, turn-order shuffle,
    /// sequential rabbit steps, population update.  Only legal while
    /// `Running`.
    pub fn advance_tick(&mut self) -> SimResult<TickSummary> {
        self.expect(RunState::Running, "advance_tick")?;
        let now = self.tick;

        // ── Phase 1: growth ───────────────────────────────────────────────
        self.grid.grow_grass(self.config.grass_growth_rate, &mut self.rng);

        // ── Phase 2: shuffle turn order ───────────────────────────────────
        self.rng.shuffle(self.colony.rabbits_mut());

        // ── Phase 3: step every rabbit, sequentially ──────────────────────
        let reward = self.config.forage_reward;
        for rabbit in self.colony.rabbits_mut() {
            rabbit.step(&mut self.grid, &mut self.rng, reward);
        }

        // ── Phase 4: births then deaths ───────────────────────────────────
        let delta = self
            .population
            .apply(&mut self.colony, &mut self.grid, &mut self.rng);

        self.tick = now + 1;
        let summary = TickSummary {
            tick:        now,
            births:      delta.births,
            deaths:      delta.deaths,
            population:  self.colony.len(),
            total_grass: self.grid.total_grass(),
        };
        debug!(
            tick = %now,
            births = summary.births,
            deaths = summary.deaths,
            population = summary.population,
            grass = summary.total_grass,
            "tick complete"
        );
        Ok(summary)
    }

    /// Advance exactly `n` ticks, invoking observer hooks at each boundary
    /// and `on_sim_end` once afterwards.  An outer shell that owns its own
    /// cadence calls [`advance_tick`][Self::advance_tick] directly instead.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.tick;
            observer.on_tick_start(now);
            let summary = self.advance_tick()?;
            observer.on_tick_end(now, &summary);
        }
        observer.on_sim_end(self.tick);
        Ok(())
    }

    // ── Query surface ─────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// The next tick to execute (equals the number of completed ticks).
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Live rabbit count.
    #[inline]
    pub fn population(&self) -> usize {
        self.colony.len()
    }

    /// Grass units across the whole grid.
    #[inline]
    pub fn total_grass(&self) -> u64 {
        self.grid.total_grass()
    }

    /// Grass level at one cell (for colour-class rendering).
    #[inline]
    pub fn grass_at(&self, cell: Cell) -> u32 {
        self.grid.grass_at(cell)
    }

    /// The rabbit standing on `cell`, if any (for drawing).
    #[inline]
    pub fn occupant_at(&self, cell: Cell) -> Option<RabbitId> {
        self.grid.occupant(cell)
    }

    /// Read-only view of every live rabbit (for probing position/energy).
    #[inline]
    pub fn rabbits(&self) -> &[Rabbit] {
        self.colony.rabbits()
    }
}
