//! The `OutputWriter` trait implemented by backend writers.

use crate::{LightStateRow, OutputResult, VehiclePositionRow};

/// Trait implemented by output backends.
///
/// Errors are returned to [`OutputObserver`][crate::OutputObserver], which
/// stores the first one for retrieval after the run.
pub trait OutputWriter {
    /// Write a batch of vehicle positions.
    fn write_vehicles(&mut self, rows: &[VehiclePositionRow]) -> OutputResult<()>;

    /// Write a batch of light states.
    fn write_lights(&mut self, rows: &[LightStateRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
