//! Run configuration and boundary validation.

use std::fmt;

use crate::{CoreError, CoreResult, Road, Tick};

/// Shortest road accepted by [`SimConfig::validate`].  Anything shorter
/// cannot host a meaningful light/vehicle layout.
pub const MIN_ROAD_LENGTH: u32 = 6;

// ── TickMode ──────────────────────────────────────────────────────────────────

/// How the light update and vehicle movement are composed within one tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickMode {
    /// Advance lights, snapshot them, then move vehicles against the fresh
    /// snapshot.
    Sequential,
    /// Snapshot lights first, then advance lights and move vehicles at the
    /// same time.  Vehicles react to the previous tick's light states.
    #[default]
    Concurrent,
}

impl TickMode {
    /// Map the classic `0`/`1` "use concurrent sections" flag to a mode.
    #[inline]
    pub fn from_concurrent_flag(concurrent: bool) -> Self {
        if concurrent { TickMode::Concurrent } else { TickMode::Sequential }
    }

    #[inline]
    pub fn is_concurrent(self) -> bool {
        matches!(self, TickMode::Concurrent)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TickMode::Sequential => "sequential",
            TickMode::Concurrent => "concurrent",
        }
    }
}

impl fmt::Display for TickMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Built by the application (usually from command-line arguments) and checked
/// with [`validate`](Self::validate) before any entity is allocated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of cells on the ring road.  Must be at least [`MIN_ROAD_LENGTH`].
    pub road_length: u32,

    pub vehicle_count: usize,

    pub light_count: usize,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Full GREEN→YELLOW→RED cycle length in ticks, split 50 / 20 / 30 %.
    pub light_cycle_ticks: u32,

    /// Master RNG seed.  The same seed always produces the same layout.
    pub seed: u64,

    pub tick_mode: TickMode,

    /// Re-size the worker pool every tick from the population sizes.  When
    /// `false`, `num_threads` (or Rayon's default) is used for the whole run.
    pub dynamic_threads: bool,

    /// Fixed worker count when `dynamic_threads` is off.  `None` uses all
    /// logical cores.
    pub num_threads: Option<usize>,

    /// Pause between ticks, in milliseconds.  Applied by the presentation
    /// layer; the tick loop itself never sleeps.
    pub tick_delay_ms: u64,

    /// Emit an output snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            road_length:           100,
            vehicle_count:         20,
            light_count:           4,
            total_ticks:           5,
            light_cycle_ticks:     9,
            seed:                  42,
            tick_mode:             TickMode::Concurrent,
            dynamic_threads:       true,
            num_threads:           None,
            tick_delay_ms:         0,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// Check every boundary rule.  Returns the first violation found.
    pub fn validate(&self) -> CoreResult<()> {
        if self.vehicle_count == 0 {
            return Err(CoreError::NotPositive { what: "vehicle count" });
        }
        if self.light_count == 0 {
            return Err(CoreError::NotPositive { what: "light count" });
        }
        if self.total_ticks == 0 {
            return Err(CoreError::NotPositive { what: "iteration count" });
        }
        if self.light_cycle_ticks == 0 {
            return Err(CoreError::NotPositive { what: "light cycle length" });
        }
        if self.road_length < MIN_ROAD_LENGTH {
            return Err(CoreError::RoadTooShort {
                length: self.road_length,
                min:    MIN_ROAD_LENGTH,
            });
        }
        if self.num_threads == Some(0) {
            return Err(CoreError::Config("num_threads must be positive when set".into()));
        }
        Ok(())
    }

    /// The road described by `road_length`.
    pub fn road(&self) -> CoreResult<Road> {
        Road::new(self.road_length)
    }

    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }
}
