//! The `PathAgent` trait — the movement half of an agent.

use std::fmt;

use wander_core::Vec3;

use crate::AreaMask;

/// Outcome of the most recent path computation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathStatus {
    /// The path reaches the requested destination.
    #[default]
    Complete,
    /// The path ends short of the destination (it is cut off).
    Partial,
    /// No path could be computed.
    Invalid,
}

impl PathStatus {
    /// `true` for the statuses that require a new destination.
    #[inline]
    pub fn is_broken(self) -> bool {
        matches!(self, PathStatus::Partial | PathStatus::Invalid)
    }
}

impl fmt::Display for PathStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PathStatus::Complete => "complete",
            PathStatus::Partial  => "partial",
            PathStatus::Invalid  => "invalid",
        };
        f.write_str(s)
    }
}

/// Local obstacle-avoidance quality requested from the path agent.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObstacleAvoidance {
    None,
    Low,
    #[default]
    Medium,
    Good,
    High,
}

/// An entity that follows a computed path toward a destination and reports
/// its locomotion status.
///
/// Status getters are polled every tick by behavior code, so they should be
/// cheap reads of cached state.
pub trait PathAgent {
    /// Current world position.
    fn position(&self) -> Vec3;

    /// Current velocity in world units per second.
    fn velocity(&self) -> Vec3;

    /// `true` while a requested path is still being computed.
    fn path_pending(&self) -> bool;

    /// Distance left along the current path.
    fn remaining_distance(&self) -> f32;

    /// The agent stops this far short of its goal.
    fn stopping_distance(&self) -> f32;

    fn path_status(&self) -> PathStatus;

    /// Areas this agent may traverse.
    fn area_mask(&self) -> AreaMask;

    fn radius(&self) -> f32;

    fn set_radius(&mut self, radius: f32);

    fn set_obstacle_avoidance(&mut self, quality: ObstacleAvoidance);

    /// Request a path to `target`.  Returns `false` if the request was
    /// refused outright.
    fn set_destination(&mut self, target: Vec3) -> bool;
}
