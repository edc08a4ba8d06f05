//! Wander controller configuration.

use wander_nav::{AreaMask, ObstacleAvoidance};

use crate::{BehaviorError, BehaviorResult};

/// Tuning knobs for one [`WanderController`][crate::WanderController].
///
/// Set once before the controller is built; the controller never mutates it.
/// Every field has a default, so partial config files deserialize cleanly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WanderConfig {
    /// Sampling radius around the agent's current position.  Also the search
    /// radius for snapping a sample onto the surface.
    pub wander_radius: f32,

    /// Shortest idle window after a pick, in seconds.
    pub min_idle_time: f32,

    /// Longest idle window after a pick, in seconds.
    pub max_idle_time: f32,

    /// Candidate samples tried per pick before giving up.
    pub max_pick_tries: u32,

    /// Candidates closer than this to the agent are rejected.
    pub min_next_distance: f32,

    /// Animation parameter that receives the agent's speed.  `None` (or an
    /// empty name) disables animation output.
    pub speed_param: Option<String>,

    /// Areas candidates may land on.  `None` uses the path agent's own mask.
    pub area_mask: Option<AreaMask>,

    /// Obstacle-avoidance quality applied to the path agent at setup.
    pub avoidance: ObstacleAvoidance,

    /// The path agent's radius is raised to at least this at setup.
    pub min_agent_radius: f32,

    /// Slack added to the agent's stopping distance when testing arrival.
    pub arrival_tolerance: f32,

    /// Candidates farther than `wander_radius * origin_leash` from the spawn
    /// point are rejected.
    pub origin_leash: f32,

    /// Idle time after a pick exhausts every try, in seconds.
    pub failure_cooldown: f32,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            wander_radius:     10.0,
            min_idle_time:     0.8,
            max_idle_time:     2.0,
            max_pick_tries:    10,
            min_next_distance: 2.0,
            speed_param:       Some("Speed".to_owned()),
            area_mask:         None,
            avoidance:         ObstacleAvoidance::High,
            min_agent_radius:  0.2,
            arrival_tolerance: 0.05,
            origin_leash:      1.2,
            failure_cooldown:  1.0,
        }
    }
}

impl WanderConfig {
    /// The animation parameter name, if animation output is enabled.
    #[inline]
    pub fn speed_param(&self) -> Option<&str> {
        self.speed_param.as_deref().filter(|name| !name.is_empty())
    }

    /// Farthest a destination may lie from the spawn point.
    #[inline]
    pub fn max_origin_distance(&self) -> f32 {
        self.wander_radius * self.origin_leash
    }

    /// Reject settings that would make picking ill-defined.
    pub fn validate(&self) -> BehaviorResult<()> {
        fn bad(msg: String) -> BehaviorResult<()> {
            Err(BehaviorError::Config(msg))
        }

        if !self.wander_radius.is_finite() || self.wander_radius <= 0.0 {
            return bad(format!("wander_radius must be positive, got {}", self.wander_radius));
        }
        if !self.min_idle_time.is_finite() || self.min_idle_time < 0.0 {
            return bad(format!("min_idle_time must be non-negative, got {}", self.min_idle_time));
        }
        if !self.max_idle_time.is_finite() || self.max_idle_time < self.min_idle_time {
            return bad(format!(
                "max_idle_time ({}) must be at least min_idle_time ({})",
                self.max_idle_time, self.min_idle_time
            ));
        }
        if self.max_pick_tries == 0 {
            return bad("max_pick_tries must be at least 1".into());
        }
        if !self.min_next_distance.is_finite() || self.min_next_distance < 0.0 {
            return bad(format!(
                "min_next_distance must be non-negative, got {}",
                self.min_next_distance
            ));
        }
        if !self.min_agent_radius.is_finite() || self.min_agent_radius < 0.0 {
            return bad(format!("min_agent_radius must be non-negative, got {}", self.min_agent_radius));
        }
        if !self.arrival_tolerance.is_finite() || self.arrival_tolerance < 0.0 {
            return bad(format!(
                "arrival_tolerance must be non-negative, got {}",
                self.arrival_tolerance
            ));
        }
        if !self.origin_leash.is_finite() || self.origin_leash <= 0.0 {
            return bad(format!("origin_leash must be positive, got {}", self.origin_leash));
        }
        if !self.failure_cooldown.is_finite() || self.failure_cooldown <= 0.0 {
            return bad(format!("failure_cooldown must be positive, got {}", self.failure_cooldown));
        }
        Ok(())
    }
}
