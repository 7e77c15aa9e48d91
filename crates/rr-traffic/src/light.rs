//! Traffic lights and their three-state phase machine.
//!
//! Each light cycles GREEN → YELLOW → RED → GREEN forever.  A transition fires
//! purely on elapsed ticks; lights never coordinate with each other.

use std::fmt;

use rr_core::{LightId, Position};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Signal colour.  The discriminants are the ordinals exposed to renderers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Phase {
    Red    = 0,
    Green  = 1,
    Yellow = 2,
}

impl Phase {
    /// The phase that follows `self` in the fixed cycle.
    #[inline]
    pub fn next(self) -> Phase {
        match self {
            Phase::Green  => Phase::Yellow,
            Phase::Yellow => Phase::Red,
            Phase::Red    => Phase::Green,
        }
    }

    /// Numeric code: 0 = RED, 1 = GREEN, 2 = YELLOW.
    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// `true` for phases that hold a vehicle in place.
    #[inline]
    pub fn is_stop(self) -> bool {
        !matches!(self, Phase::Green)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Red    => "red",
            Phase::Green  => "green",
            Phase::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PhaseDurations ────────────────────────────────────────────────────────────

/// How many ticks a light stays in each phase.  Every field is at least 1.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseDurations {
    pub green:  u32,
    pub yellow: u32,
    pub red:    u32,
}

impl PhaseDurations {
    /// Split `total_cycle` into 50 % green, 20 % yellow and the remainder red,
    /// each floored and then clamped to at least one tick.
    ///
    /// For very short cycles the clamp makes the sum exceed `total_cycle`
    /// (e.g. a cycle of 2 yields 1 / 1 / 1).
    pub fn from_cycle(total_cycle: u32) -> Self {
        let green  = total_cycle / 2;
        let yellow = total_cycle / 5;
        let red    = total_cycle.saturating_sub(green + yellow);
        Self {
            green:  green.max(1),
            yellow: yellow.max(1),
            red:    red.max(1),
        }
    }

    /// Ticks spent in `phase` before transitioning.
    #[inline]
    pub fn for_phase(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Green  => self.green,
            Phase::Yellow => self.yellow,
            Phase::Red    => self.red,
        }
    }

    /// Actual cycle length after clamping.
    #[inline]
    pub fn cycle_len(&self) -> u32 {
        self.green + self.yellow + self.red
    }
}

// ── TrafficLight ──────────────────────────────────────────────────────────────

/// One traffic light at a fixed cell on the road.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficLight {
    pub id: LightId,

    /// Fixed for the whole run.
    pub position: Position,

    pub phase: Phase,

    /// Ticks elapsed in the current phase.  Reset to 0 on every transition,
    /// so after a tick completes it is always below the phase's duration.
    pub ticks_in_phase: u32,

    pub durations: PhaseDurations,
}

impl TrafficLight {
    /// A light that has just entered `phase`.
    pub fn new(id: LightId, position: Position, phase: Phase, durations: PhaseDurations) -> Self {
        Self {
            id,
            position,
            phase,
            ticks_in_phase: 0,
            durations,
        }
    }

    /// Advance the phase timer by one tick, transitioning when the current
    /// phase's duration has elapsed.  Returns `true` on a transition.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.ticks_in_phase += 1;
        if self.ticks_in_phase >= self.durations.for_phase(self.phase) {
            self.phase = self.phase.next();
            self.ticks_in_phase = 0;
            true
        } else {
            false
        }
    }
}
