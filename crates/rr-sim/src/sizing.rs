//! Worker-count sizing policy.

/// One worker per this many vehicles (rounded up).
pub const VEHICLES_PER_WORKER: usize = 8;

/// One worker per this many lights (rounded up).
pub const LIGHTS_PER_WORKER: usize = 4;

/// Lower bound on the recommended width.
pub const MIN_WORKERS: usize = 2;

/// Recommended parallel fan-out for one tick:
/// `ceil(vehicles / 8) + ceil(lights / 4)`, never below 2.
///
/// Pure function of the population sizes; the orchestrator re-evaluates it
/// before every tick in dynamic mode.
#[inline]
pub fn recommended_worker_count(n_vehicles: usize, n_lights: usize) -> usize {
    let workers = n_vehicles.div_ceil(VEHICLES_PER_WORKER) + n_lights.div_ceil(LIGHTS_PER_WORKER);
    workers.max(MIN_WORKERS)
}
