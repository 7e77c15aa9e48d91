//! `OutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use rr_core::Tick;
use rr_sim::{SimObserver, StateView};

use crate::row::{LightStateRow, VehiclePositionRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes vehicle positions and light states to any
/// [`OutputWriter`] backend on every snapshot tick.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value; a failing writer never affects the simulation.  After
/// `sim.run()` returns, check with [`take_error`][Self::take_error].
pub struct OutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for OutputObserver<W> {
    fn on_snapshot(&mut self, tick: Tick, state: &StateView<'_>) {
        let vehicles: Vec<VehiclePositionRow> = state
            .vehicles()
            .map(|v| VehiclePositionRow {
                tick:       tick.0,
                vehicle_id: v.id.0,
                position:   v.position,
            })
            .collect();
        let lights: Vec<LightStateRow> = state
            .lights()
            .map(|l| LightStateRow {
                tick:     tick.0,
                light_id: l.id.0,
                phase:    l.phase,
            })
            .collect();

        if !vehicles.is_empty() {
            let result = self.writer.write_vehicles(&vehicles);
            self.store_err(result);
        }
        if !lights.is_empty() {
            let result = self.writer.write_lights(&lights);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
