//! Simulation observer trait for rendering, pacing, and data collection.

use rr_core::Tick;

use crate::StateView;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers only ever see borrowed state; the
/// simulation keeps ownership of both populations.
///
/// # Example: console printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_tick_end(&mut self, tick: Tick, state: &StateView<'_>) {
///         for v in state.vehicles() {
///             println!("{tick}: vehicle {} at {}", v.id.0, v.position);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each tick, after the worker width for the tick
    /// has been decided.
    fn on_tick_start(&mut self, _tick: Tick, _workers: usize) {}

    /// Called at the end of each tick with the post-tick state.
    fn on_tick_end(&mut self, _tick: Tick, _state: &StateView<'_>) {}

    /// Called at output intervals (every `config.output_interval_ticks` ticks).
    fn on_snapshot(&mut self, _tick: Tick, _state: &StateView<'_>) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
