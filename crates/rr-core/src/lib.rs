//! `rr-core` — foundational types for the `ringroad` traffic simulation.
//!
//! This crate is a dependency of every other `rr-*` crate.  It has no `rr-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`ids`]      | `VehicleId`, `LightId`                                  |
//! | [`road`]     | `Road` — circular coordinate space `[0, L)`             |
//! | [`time`]     | `Tick`                                                  |
//! | [`rng`]      | `EntityRng` (per-entity sub-stream)                     |
//! | [`config`]   | `SimConfig`, `TickMode`                                 |
//! | [`error`]    | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod road;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, TickMode, MIN_ROAD_LENGTH};
pub use error::{CoreError, CoreResult};
pub use ids::{LightId, VehicleId};
pub use rng::EntityRng;
pub use road::{Position, Road};
pub use time::Tick;
