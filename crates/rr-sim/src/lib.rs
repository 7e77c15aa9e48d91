//! `rr-sim` — tick orchestrator for the ringroad traffic simulation.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Size    — recommended_worker_count(vehicles, lights) → pool width
//!               (only when config.dynamic_threads is on)
//!   ② Step    — run_tick on the sized pool:
//!       Sequential:  advance_lights → snapshot → move_vehicles
//!       Concurrent:  snapshot → { advance_lights ‖ move_vehicles }
//!   ③ Observe — on_tick_end / on_snapshot with a read-only StateView
//! ```
//!
//! In concurrent mode vehicles react to the light states from *before* this
//! tick's advance, one tick behind what sequential mode sees.  The two modes
//! therefore diverge whenever a light changes phase under a waiting vehicle.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | *(default)* Rayon pool + `rayon::join` for the two engines. |
//! | `fx-hash`  | FxHash for the snapshot position index.                  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rr_core::SimConfig;
//! use rr_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod pool;
pub mod sim;
pub mod sizing;
pub mod tick;
pub mod view;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use pool::WorkerPool;
pub use sim::Sim;
pub use sizing::recommended_worker_count;
pub use tick::run_tick;
pub use view::{LightView, StateView, VehicleView};
