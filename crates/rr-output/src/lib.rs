//! `rr-output` — simulation output writers for the ringroad simulation.
//!
//! | Backend | Files created                                   |
//! |---------|-------------------------------------------------|
//! | CSV     | `vehicle_positions.csv`, `light_states.csv`     |
//!
//! Writers implement [`OutputWriter`] and are driven by [`OutputObserver`],
//! which implements `rr_sim::SimObserver` and writes one batch of rows per
//! snapshot tick.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rr_output::{CsvWriter, OutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = OutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputObserver;
pub use row::{LightStateRow, VehiclePositionRow};
pub use writer::OutputWriter;
