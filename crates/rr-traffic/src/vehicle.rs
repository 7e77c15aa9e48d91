//! The vehicle record and its single-step movement rule.

use rr_core::{Position, Road, VehicleId};

use crate::LightSnapshot;

/// One vehicle on the ring road.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id: VehicleId,

    /// Current cell, always in `[0, road.length())`.
    pub position: Position,

    /// Cells covered per tick when not held by a light.  1 or 2 for
    /// initialized vehicles.
    pub max_speed: u32,
}

impl Vehicle {
    #[inline]
    pub fn new(id: VehicleId, position: Position, max_speed: u32) -> Self {
        Self { id, position, max_speed }
    }

    /// The cell this vehicle would reach this tick if nothing stopped it.
    #[inline]
    pub fn destination(&self, road: Road) -> Position {
        road.advance(self.position, self.max_speed)
    }

    /// Apply one tick of movement against `snapshot`.
    ///
    /// Moves to the destination unless the first light found there is RED or
    /// YELLOW.  Returns `true` if the vehicle moved.
    #[inline]
    pub fn step(&mut self, snapshot: &LightSnapshot, road: Road) -> bool {
        let destination = self.destination(road);
        if snapshot.blocks(destination) {
            return false;
        }
        self.position = destination;
        true
    }
}
