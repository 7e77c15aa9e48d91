//! Per-tick engines: the light-state engine and the movement engine.
//!
//! Each engine is a map over one population where iteration `i` touches only
//! record `i`.  With the `parallel` feature they run on the current Rayon
//! pool; callers pick the pool width with `ThreadPool::install`.

use rr_core::Road;

use crate::{LightSnapshot, TrafficLight, Vehicle};

/// Advance every light's phase machine by one tick.
pub fn advance_lights(lights: &mut [TrafficLight]) {
    #[cfg(not(feature = "parallel"))]
    {
        for light in lights.iter_mut() {
            light.advance();
        }
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        lights.par_iter_mut().for_each(|light| {
            light.advance();
        });
    }
}

/// Move every vehicle one tick against `snapshot`.
///
/// A vehicle whose destination holds a RED or YELLOW light (per the snapshot)
/// stays put; all others move to their destination.  Vehicles do not see each
/// other.
pub fn move_vehicles(vehicles: &mut [Vehicle], snapshot: &LightSnapshot, road: Road) {
    #[cfg(not(feature = "parallel"))]
    {
        for vehicle in vehicles.iter_mut() {
            vehicle.step(snapshot, road);
        }
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        vehicles.par_iter_mut().for_each(|vehicle| {
            vehicle.step(snapshot, road);
        });
    }
}
