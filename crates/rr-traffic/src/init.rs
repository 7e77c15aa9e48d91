//! Initial layout of vehicles and lights.
//!
//! Both populations are spread along the road at `spacing = length / count`
//! (or 1 when the road is not longer than the population).  Vehicles get a
//! random jitter inside their slot and a random top speed; lights sit exactly
//! on slot boundaries.
//!
//! Randomness comes from one [`EntityRng`] per vehicle index, so the layout is
//! identical whether the indices are processed serially or across workers.

use rr_core::{EntityRng, LightId, Road, VehicleId};

use crate::{Phase, PhaseDurations, TrafficLight, Vehicle};

/// Build `count` vehicles on `road`, deterministically from `seed`.
///
/// Coincident starting positions are possible (the jitter can push a vehicle
/// onto its neighbour's slot when spacing collapses) and are left as is.
pub fn initialize_vehicles(count: usize, road: Road, seed: u64) -> Vec<Vehicle> {
    if count == 0 {
        return Vec::new();
    }
    let spacing = road.spacing(count);

    let make = |i: usize| {
        let mut rng = EntityRng::new(seed, i as u64);
        let jitter = if spacing > 1 { rng.gen_range(0..spacing) } else { 0 };
        let max_speed = rng.gen_range(1..=2u32);
        let position = road.wrap(i as i64 * spacing as i64 + jitter as i64);
        Vehicle::new(VehicleId(i as u32), position, max_speed)
    };

    #[cfg(not(feature = "parallel"))]
    {
        (0..count).map(make).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..count).into_par_iter().map(make).collect()
    }
}

/// Build `count` evenly spaced lights on `road` with durations derived from
/// `total_cycle`.
///
/// Even-indexed lights start GREEN and odd-indexed lights start RED, so the
/// road never begins all-green or all-red.
pub fn initialize_lights(count: usize, road: Road, total_cycle: u32) -> Vec<TrafficLight> {
    if count == 0 {
        return Vec::new();
    }
    let spacing = road.spacing(count);
    let durations = PhaseDurations::from_cycle(total_cycle);

    let make = |i: usize| {
        let phase = if i % 2 == 0 { Phase::Green } else { Phase::Red };
        let position = road.wrap(i as i64 * spacing as i64);
        TrafficLight::new(LightId(i as u32), position, phase, durations)
    };

    #[cfg(not(feature = "parallel"))]
    {
        (0..count).map(make).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..count).into_par_iter().map(make).collect()
    }
}
