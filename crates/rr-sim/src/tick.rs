//! One simulation step.

use rr_core::{Road, TickMode};
use rr_traffic::{LightSnapshot, TrafficLight, Vehicle, advance_lights, move_vehicles};

/// Advance every light and move every vehicle once, in place.
///
/// - [`TickMode::Sequential`]: lights advance first; vehicles then move
///   against a snapshot of the *updated* lights.
/// - [`TickMode::Concurrent`]: the snapshot is taken *before* the lights
///   advance, then both engines run at the same time.  Vehicles see last
///   tick's phases.  The engines write disjoint populations, so the join is
///   the only synchronisation.
///
/// Runs on the current Rayon pool; wrap in `ThreadPool::install` to choose
/// the width.
pub fn run_tick(
    vehicles: &mut [Vehicle],
    lights:   &mut [TrafficLight],
    road:     Road,
    mode:     TickMode,
) {
    match mode {
        TickMode::Sequential => {
            advance_lights(lights);
            let snapshot = LightSnapshot::capture(lights);
            move_vehicles(vehicles, &snapshot, road);
        }
        TickMode::Concurrent => {
            let snapshot = LightSnapshot::capture(lights);
            join(
                || advance_lights(lights),
                || move_vehicles(vehicles, &snapshot, road),
            );
        }
    }
}

#[cfg(feature = "parallel")]
#[inline]
fn join<A, B>(a: A, b: B)
where
    A: FnOnce() + Send,
    B: FnOnce() + Send,
{
    rayon::join(a, b);
}

#[cfg(not(feature = "parallel"))]
#[inline]
fn join<A, B>(a: A, b: B)
where
    A: FnOnce(),
    B: FnOnce(),
{
    a();
    b();
}
