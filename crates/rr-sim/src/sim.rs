//! The `Sim` struct and its tick loop.

use rr_core::{Road, SimConfig, Tick};
use rr_traffic::{TrafficLight, Vehicle};
use tracing::{debug, info};

use crate::{SimObserver, SimResult, StateView, WorkerPool, recommended_worker_count, run_tick};

/// The main simulation runner.
///
/// Owns both populations for the whole run.  Each tick:
///
/// 1. **Size**: in dynamic mode, resize the worker pool to
///    [`recommended_worker_count`].
/// 2. **Step**: [`run_tick`] on that pool, in `config.tick_mode`.
/// 3. **Observe**: hand a [`StateView`] to the observer.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (road length, mode, total ticks, …).
    pub config: SimConfig,

    pub road: Road,

    /// The next tick to be processed.
    pub current_tick: Tick,

    /// Vehicles indexed by `VehicleId`.
    pub vehicles: Vec<Vehicle>,

    /// Lights indexed by `LightId`.  This order is the snapshot order.
    pub lights: Vec<TrafficLight>,

    pub(crate) pool: WorkerPool,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            vehicles = self.vehicles.len(),
            lights   = self.lights.len(),
            ticks    = self.config.total_ticks,
            mode     = %self.config.tick_mode,
            dynamic  = self.config.dynamic_threads,
            "simulation starting on {}",
            self.road
        );
        while self.current_tick < self.config.end_tick() {
            self.observed_step(observer)?;
        }
        observer.on_sim_end(self.current_tick);
        info!(final_tick = %self.current_tick, "simulation finished");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_step(observer)?;
        }
        Ok(())
    }

    /// Process one tick without observers.  Returns the worker width used.
    pub fn step(&mut self) -> SimResult<usize> {
        let workers = self.process_tick()?;
        self.current_tick = self.current_tick.next();
        Ok(workers)
    }

    /// Read-only view of the current state.
    pub fn view(&self) -> StateView<'_> {
        StateView::new(self.current_tick, &self.vehicles, &self.lights)
    }

    /// Width of the worker pool the last tick ran on.
    pub fn worker_width(&self) -> usize {
        self.pool.width()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.current_tick;
        let workers = self.size_pool()?;
        observer.on_tick_start(now, workers);

        self.run_on_pool();

        let state = StateView::new(now, &self.vehicles, &self.lights);
        observer.on_tick_end(now, &state);
        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &state);
        }

        self.current_tick = now.next();
        Ok(())
    }

    fn process_tick(&mut self) -> SimResult<usize> {
        let workers = self.size_pool()?;
        self.run_on_pool();
        Ok(workers)
    }

    /// Apply the sizing policy (dynamic mode) and return this tick's width.
    fn size_pool(&mut self) -> SimResult<usize> {
        if self.config.dynamic_threads {
            let width = recommended_worker_count(self.vehicles.len(), self.lights.len());
            self.pool.resize(width)?;
        }
        Ok(self.pool.width())
    }

    fn run_on_pool(&mut self) {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let vehicles = self.vehicles.as_mut_slice();
        let lights   = self.lights.as_mut_slice();
        let road     = self.road;
        let mode     = self.config.tick_mode;

        self.pool.install(|| run_tick(vehicles, lights, road, mode));

        debug!(
            tick    = %self.current_tick,
            workers = self.pool.width(),
            mode    = %mode,
            "tick complete"
        );
    }
}
