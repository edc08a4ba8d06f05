//! `wander-nav` — navigation collaborators consumed by wandering behavior.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                         |
//! |----------------|------------------------------------------------------------------|
//! | [`surface`]    | `NavSurface` trait, `NavHit`, `AreaId`, `AreaMask`               |
//! | [`agent`]      | `PathAgent` trait, `PathStatus`, `ObstacleAvoidance`             |
//! | [`animation`]  | `AnimationSink` trait, `ParamBlock`                              |
//! | [`grid`]       | `GridSurface` (walkability grid + R-tree), `GridSurfaceBuilder`  |
//! | [`grid_agent`] | `GridAgent` straight-line follower, `GridAgentConfig`            |
//! | [`error`]      | `NavError`, `NavResult<T>`                                       |
//!
//! Behavior crates depend only on the three traits.  The grid types are the
//! default implementations used by `wander-sim` and the demo; an engine
//! binding replaces them with its own navmesh and agent.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on config and enum types.  |

pub mod agent;
pub mod animation;
pub mod error;
pub mod grid;
pub mod grid_agent;
pub mod surface;

#[cfg(test)]
mod tests;

pub use agent::{ObstacleAvoidance, PathAgent, PathStatus};
pub use animation::{AnimationSink, ParamBlock};
pub use error::{NavError, NavResult};
pub use grid::{GridSurface, GridSurfaceBuilder};
pub use grid_agent::{GridAgent, GridAgentConfig};
pub use surface::{AreaId, AreaMask, NavHit, NavSurface};
