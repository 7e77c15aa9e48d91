//! `rr-traffic` — entity model and per-tick engines for the ring road.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`vehicle`]   | `Vehicle` record                                              |
//! | [`light`]     | `TrafficLight`, `Phase`, `PhaseDurations` — the phase machine |
//! | [`snapshot`]  | `LightSnapshot` — frozen per-tick copy of all lights          |
//! | [`init`]      | `initialize_vehicles`, `initialize_lights`                    |
//! | [`engine`]    | `advance_lights`, `move_vehicles`                             |
//!
//! # Parallelism
//!
//! Every operation here is a map over independent records: a light's phase
//! machine never reads another light, and a vehicle only reads its own record
//! plus the immutable snapshot.  With the `parallel` feature these maps run on
//! whatever Rayon pool is current (the sim crate installs a sized pool);
//! without it they run serially and produce identical results.

pub mod engine;
pub mod init;
pub mod light;
pub mod snapshot;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use engine::{advance_lights, move_vehicles};
pub use init::{initialize_lights, initialize_vehicles};
pub use light::{Phase, PhaseDurations, TrafficLight};
pub use snapshot::LightSnapshot;
pub use vehicle::Vehicle;
