//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `vehicle_positions.csv`
//! - `light_states.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{LightStateRow, OutputResult, VehiclePositionRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    vehicles: Writer<File>,
    lights:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut vehicles = Writer::from_path(dir.join("vehicle_positions.csv"))?;
        vehicles.write_record(["tick", "vehicle_id", "position"])?;

        let mut lights = Writer::from_path(dir.join("light_states.csv"))?;
        lights.write_record(["tick", "light_id", "phase"])?;

        Ok(Self {
            vehicles,
            lights,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_vehicles(&mut self, rows: &[VehiclePositionRow]) -> OutputResult<()> {
        for row in rows {
            self.vehicles.write_record(&[
                row.tick.to_string(),
                row.vehicle_id.to_string(),
                row.position.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_lights(&mut self, rows: &[LightStateRow]) -> OutputResult<()> {
        for row in rows {
            self.lights.write_record(&[
                row.tick.to_string(),
                row.light_id.to_string(),
                row.phase.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.vehicles.flush()?;
        self.lights.flush()?;
        Ok(())
    }
}
