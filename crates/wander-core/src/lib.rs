//! `wander-core` — foundational types for the `rust_wander` framework.
//!
//! This crate is a dependency of every other `wander-*` crate.  It has no
//! `wander-*` dependencies and few external ones (`glam`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `AgentId`                                                 |
//! | [`geo`]     | `flatten`, `planar_distance`, re-exported `Vec3`          |
//! | [`time`]    | `Frame`, `SimTime`, `SimClock`, `SimConfig`               |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (global)                 |
//! | [`error`]   | `WanderError`, `WanderResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{WanderError, WanderResult};
pub use geo::{flatten, planar_distance, Vec3};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::{Frame, SimClock, SimConfig, SimTime};
