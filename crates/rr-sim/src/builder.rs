//! Fluent builder for constructing a [`Sim`].

use rr_core::{Road, SimConfig, Tick};
use rr_traffic::{TrafficLight, Vehicle, initialize_lights, initialize_vehicles};
use tracing::debug;

use crate::{Sim, SimError, SimResult, WorkerPool, recommended_worker_count};

/// Fluent builder for [`Sim`].
///
/// By default both populations are generated from the config with
/// [`initialize_vehicles`] and [`initialize_lights`].  Scenarios can supply
/// hand-placed populations instead:
///
/// | Method          | Default                                             |
/// |-----------------|-----------------------------------------------------|
/// | `.vehicles(v)`  | `initialize_vehicles(count, road, seed)`            |
/// | `.lights(l)`    | `initialize_lights(count, road, light_cycle_ticks)` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .lights(vec![TrafficLight::new(LightId(0), 50, Phase::Green, durations)])
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    vehicles: Option<Vec<Vehicle>>,
    lights:   Option<Vec<TrafficLight>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            vehicles: None,
            lights:   None,
        }
    }

    /// Supply an explicit vehicle population (length `config.vehicle_count`,
    /// ids equal to their index).
    pub fn vehicles(mut self, vehicles: Vec<Vehicle>) -> Self {
        self.vehicles = Some(vehicles);
        self
    }

    /// Supply an explicit light population (length `config.light_count`,
    /// ids equal to their index).
    pub fn lights(mut self, lights: Vec<TrafficLight>) -> Self {
        self.lights = Some(lights);
        self
    }

    /// Validate the config, build or check both populations, size the worker
    /// pool, and return a ready-to-run [`Sim`].
    ///
    /// Configuration errors are reported before any population is generated.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let road = self.config.road()?;

        let vehicles = match self.vehicles {
            Some(v) => {
                check_population(&v, self.config.vehicle_count, road, "vehicle", |x: &Vehicle| {
                    (x.id.0, x.position)
                })?;
                v
            }
            None => initialize_vehicles(self.config.vehicle_count, road, self.config.seed),
        };

        let lights = match self.lights {
            Some(l) => {
                check_population(&l, self.config.light_count, road, "light", |x: &TrafficLight| {
                    (x.id.0, x.position)
                })?;
                l
            }
            None => initialize_lights(
                self.config.light_count,
                road,
                self.config.light_cycle_ticks,
            ),
        };

        let pool = if self.config.dynamic_threads {
            WorkerPool::sized(recommended_worker_count(vehicles.len(), lights.len()))?
        } else {
            WorkerPool::fixed(self.config.num_threads)?
        };
        debug!(workers = pool.width(), "worker pool ready");

        Ok(Sim {
            config: self.config,
            road,
            current_tick: Tick::ZERO,
            vehicles,
            lights,
            pool,
        })
    }
}

/// Check length, id/index agreement, and on-road positions of a supplied
/// population.
fn check_population<T>(
    items:    &[T],
    expected: usize,
    road:     Road,
    what:     &'static str,
    key:      impl Fn(&T) -> (u32, u32),
) -> SimResult<()> {
    if items.len() != expected {
        return Err(SimError::PopulationMismatch {
            expected,
            got: items.len(),
            what,
        });
    }
    for (index, item) in items.iter().enumerate() {
        let (id, position) = key(item);
        if id as usize != index {
            return Err(SimError::IdMismatch { index, id, what });
        }
        if !road.contains(position) {
            return Err(SimError::PositionOutOfRange {
                index,
                position,
                length: road.length(),
                what,
            });
        }
    }
    Ok(())
}
