//! Default straight-line [`PathAgent`].
//!
//! # Movement model
//!
//! `GridAgent` is a kinematic follower with no route planning:
//!
//! 1. `set_destination` records the request and marks the path pending.
//! 2. The next `advance` resolves it against the surface (the agent does not
//!    move on that frame):
//!    - agent or target not on the surface → `Invalid`, no goal;
//!    - straight line obstructed → `Partial`, goal = last clear point;
//!    - otherwise → `Complete`, goal = the snapped target.
//! 3. Later `advance` calls move the agent toward the goal at `speed` until
//!    it is within `stopping_distance`.

use wander_core::{flatten, planar_distance, Vec3};

use crate::{AreaMask, NavSurface, ObstacleAvoidance, PathAgent, PathStatus};

/// How far a destination (or the agent itself) may be from the surface and
/// still snap onto it.
const SNAP_DISTANCE: f32 = 1.0;

/// Static movement parameters for a [`GridAgent`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridAgentConfig {
    /// Travel speed in world units per second.
    pub speed: f32,
    pub stopping_distance: f32,
    pub radius: f32,
    pub area_mask: AreaMask,
}

impl Default for GridAgentConfig {
    fn default() -> Self {
        Self {
            speed:             3.5,
            stopping_distance: 0.0,
            radius:            0.5,
            area_mask:         AreaMask::ALL,
        }
    }
}

/// A straight-line path follower over any [`NavSurface`].
#[derive(Clone, Debug)]
pub struct GridAgent {
    config:    GridAgentConfig,
    position:  Vec3,
    velocity:  Vec3,
    requested: Option<Vec3>,
    goal:      Option<Vec3>,
    pending:   bool,
    status:    PathStatus,
    avoidance: ObstacleAvoidance,
}

impl GridAgent {
    /// Create an idle agent standing at `position`.
    pub fn new(config: GridAgentConfig, position: Vec3) -> Self {
        Self {
            config,
            position,
            velocity:  Vec3::ZERO,
            requested: None,
            goal:      None,
            pending:   false,
            status:    PathStatus::Complete,
            avoidance: ObstacleAvoidance::default(),
        }
    }

    /// The point the agent is currently walking to, if any.
    pub fn goal(&self) -> Option<Vec3> {
        self.goal
    }

    pub fn obstacle_avoidance(&self) -> ObstacleAvoidance {
        self.avoidance
    }

    pub fn config(&self) -> &GridAgentConfig {
        &self.config
    }

    /// Step the agent forward by `dt` seconds.
    pub fn advance<N: NavSurface + ?Sized>(&mut self, surface: &N, dt: f32) {
        if self.pending {
            self.resolve(surface);
            self.velocity = Vec3::ZERO;
            return;
        }

        let Some(goal) = self.goal else {
            self.velocity = Vec3::ZERO;
            return;
        };

        let to_goal = flatten(goal - self.position);
        let dist = to_goal.length();
        let travel = (dist - self.config.stopping_distance).min(self.config.speed * dt);
        if travel <= 0.0 || dt <= 0.0 {
            self.velocity = Vec3::ZERO;
            return;
        }

        let dir = to_goal / dist;
        self.position += dir * travel;
        self.velocity = dir * (travel / dt);
    }

    fn resolve<N: NavSurface + ?Sized>(&mut self, surface: &N) {
        self.pending = false;
        let mask = self.config.area_mask;
        let Some(target) = self.requested.take() else {
            return;
        };

        let here = surface.sample_nearest(self.position, SNAP_DISTANCE, mask);
        let there = surface.sample_nearest(target, SNAP_DISTANCE, mask);
        let (Some(_), Some(there)) = (here, there) else {
            log::trace!("path to {target} invalid");
            self.status = PathStatus::Invalid;
            self.goal = None;
            return;
        };

        match surface.raycast(self.position, there.position, mask) {
            None => {
                self.status = PathStatus::Complete;
                self.goal = Some(there.position);
            }
            Some(hit) => {
                log::trace!("path to {target} cut short at {}", hit.position);
                self.status = PathStatus::Partial;
                self.goal = Some(hit.position);
            }
        }
    }
}

impl PathAgent for GridAgent {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn path_pending(&self) -> bool {
        self.pending
    }

    fn remaining_distance(&self) -> f32 {
        self.goal
            .map(|g| planar_distance(g, self.position))
            .unwrap_or(0.0)
    }

    fn stopping_distance(&self) -> f32 {
        self.config.stopping_distance
    }

    fn path_status(&self) -> PathStatus {
        self.status
    }

    fn area_mask(&self) -> AreaMask {
        self.config.area_mask
    }

    fn radius(&self) -> f32 {
        self.config.radius
    }

    fn set_radius(&mut self, radius: f32) {
        self.config.radius = radius;
    }

    fn set_obstacle_avoidance(&mut self, quality: ObstacleAvoidance) {
        self.avoidance = quality;
    }

    fn set_destination(&mut self, target: Vec3) -> bool {
        if !target.is_finite() {
            return false;
        }
        self.requested = Some(target);
        self.pending = true;
        true
    }
}
