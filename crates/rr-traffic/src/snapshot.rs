//! Frozen per-tick copy of every light.
//!
//! The movement engine never reads the live `TrafficLight` slice: it reads a
//! `LightSnapshot` captured by the orchestrator, so a light being advanced on
//! another worker is never observed half-updated.  The snapshot is a plain
//! value copy plus a position index, immutable once built and therefore
//! `Sync` for free.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as HashMap;

use rr_core::Position;

use crate::{Phase, TrafficLight};

/// Immutable copy of all light states at one point in a tick.
#[derive(Clone, Debug)]
pub struct LightSnapshot {
    lights: Box<[TrafficLight]>,

    /// `position → index` of the *first* light (in snapshot order) at that
    /// cell.  Later lights sharing a cell are shadowed.
    by_position: HashMap<Position, usize>,
}

impl LightSnapshot {
    /// Copy `lights` in their current order.  Order is significant: when two
    /// lights share a cell, the one appearing first wins every lookup.
    pub fn capture(lights: &[TrafficLight]) -> Self {
        let lights: Box<[TrafficLight]> = lights.into();
        let mut by_position = HashMap::default();
        for (i, light) in lights.iter().enumerate() {
            by_position.entry(light.position).or_insert(i);
        }
        Self { lights, by_position }
    }

    /// The first light at `pos`, if any.
    #[inline]
    pub fn light_at(&self, pos: Position) -> Option<&TrafficLight> {
        self.by_position.get(&pos).map(|&i| &self.lights[i])
    }

    /// Phase of the first light at `pos`, if any.
    #[inline]
    pub fn phase_at(&self, pos: Position) -> Option<Phase> {
        self.light_at(pos).map(|l| l.phase)
    }

    /// `true` if a vehicle heading for `pos` must hold this tick.
    #[inline]
    pub fn blocks(&self, pos: Position) -> bool {
        self.phase_at(pos).is_some_and(Phase::is_stop)
    }

    pub fn lights(&self) -> &[TrafficLight] {
        &self.lights
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }
}
