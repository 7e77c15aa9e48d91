//! Read-only per-tick views handed to observers and renderers.

use rr_core::{LightId, Position, Tick, VehicleId};
use rr_traffic::{TrafficLight, Vehicle};

/// `(id, position)` of one vehicle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VehicleView {
    pub id:       VehicleId,
    pub position: Position,
}

/// `(id, phase ordinal)` of one light: 0 = RED, 1 = GREEN, 2 = YELLOW.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LightView {
    pub id:    LightId,
    pub phase: u8,
}

/// Borrowed post-tick state of both populations.
#[derive(Copy, Clone, Debug)]
pub struct StateView<'a> {
    /// Tick label: the tick that just completed when handed to an observer,
    /// the next tick to run when taken from [`Sim::view`][crate::Sim::view].
    pub tick: Tick,
    vehicles: &'a [Vehicle],
    lights:   &'a [TrafficLight],
}

impl<'a> StateView<'a> {
    pub fn new(tick: Tick, vehicles: &'a [Vehicle], lights: &'a [TrafficLight]) -> Self {
        Self { tick, vehicles, lights }
    }

    /// Vehicle positions in id order.
    pub fn vehicles(&self) -> impl ExactSizeIterator<Item = VehicleView> + 'a {
        self.vehicles.iter().map(|v| VehicleView { id: v.id, position: v.position })
    }

    /// Light phases in id order.
    pub fn lights(&self) -> impl ExactSizeIterator<Item = LightView> + 'a {
        self.lights.iter().map(|l| LightView { id: l.id, phase: l.phase.ordinal() })
    }

    /// Full vehicle records, for observers that need more than the view.
    pub fn vehicle_records(&self) -> &'a [Vehicle] {
        self.vehicles
    }

    pub fn light_records(&self) -> &'a [TrafficLight] {
        self.lights
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}
