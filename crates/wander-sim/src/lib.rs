//! `wander-sim` — frame loop for a population of wandering agents.
//!
//! # Frame loop
//!
//! ```text
//! for frame in 0..config.total_frames:
//!   ① Tick   — WanderController::on_tick for every agent: speed to the
//!              animation block, arrival pick, recovery pick
//!              (parallel with the `parallel` feature).
//!   ② Move   — GridAgent::advance resolves pending paths and walks agents
//!              one frame toward their goals.
//!   ③ Report — FrameSummary to the observer; AgentView snapshots every
//!              `snapshot_interval_frames` frames.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Ticks agents on Rayon's thread pool.                   |
//! | `serde`    | Propagates serde derives to the config types.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wander_core::{SimConfig, Vec3};
//! use wander_nav::GridSurfaceBuilder;
//! use wander_sim::{NoopObserver, SimBuilder};
//!
//! let surface = GridSurfaceBuilder::new(40, 40, 1.0).centered().build()?;
//! let mut sim = SimBuilder::new(SimConfig::default(), surface)
//!     .random_spawns(20, Vec3::ZERO, 15.0)
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{AgentView, FrameSummary, NoopObserver, SimObserver};
pub use sim::{AgentController, Sim};
