//! `wander-behavior` — the wander controller.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                       |
//! |----------------|----------------------------------------------------------------|
//! | [`config`]     | `WanderConfig` — radius, idle window, retry budget, leash      |
//! | [`controller`] | `WanderController`, `WanderControllerBuilder`                  |
//! | [`outcome`]    | `PickOutcome`, `Rejections`, `TickReport`, `WanderStats`       |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                           |
//!
//! # Behavior
//!
//! A controller owns one [`PathAgent`][wander_nav::PathAgent] and one
//! [`AnimationSink`][wander_nav::AnimationSink].  Every tick it polls the
//! agent: once the agent has arrived and its idle window has run out, or
//! whenever its path turns invalid or partial, it samples random points
//! around the agent, keeps the first one that is navigable, far enough
//! away, close enough to the spawn point and in straight-line sight, and
//! sends the agent there.
//!
//! Failure never escapes a tick.  A pick that finds nothing leaves the agent
//! where it is and tries again after a short cooldown.

pub mod config;
pub mod controller;
pub mod error;
pub mod outcome;


pub use config::WanderConfig;
pub use controller::{WanderController, WanderControllerBuilder};
pub use error::{BehaviorError, BehaviorResult};
pub use outcome::{PickOutcome, Rejections, TickReport, WanderStats};
