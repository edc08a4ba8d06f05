//! What a tick or a pick did, reported back to the caller.

use wander_core::Vec3;

/// Why candidates were thrown away during one pick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rejections {
    /// The surface had no navigable point near the sample.
    pub missed: u32,
    /// Closer to the agent than `min_next_distance`.
    pub too_close: u32,
    /// Beyond the leash around the spawn point.
    pub too_far: u32,
    /// The straight line from the agent was blocked.
    pub obstructed: u32,
}

impl Rejections {
    #[inline]
    pub fn total(&self) -> u32 {
        self.missed + self.too_close + self.too_far + self.obstructed
    }
}

/// Result of one [`pick_destination`][crate::WanderController::pick_destination].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PickOutcome {
    /// The point handed to the path agent, or `None` if every try failed.
    pub destination: Option<Vec3>,
    /// Candidates sampled (1-based index of the accepted one on success).
    pub attempts: u32,
    pub rejections: Rejections,
}

impl PickOutcome {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.destination.is_some()
    }
}

/// Result of one [`on_tick`][crate::WanderController::on_tick].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickReport {
    /// Agent speed this tick (what the animation sink received).
    pub speed: f32,
    /// Pick triggered by arriving after the idle window ran out.
    pub arrival_pick: Option<PickOutcome>,
    /// Pick forced by an invalid or partial path.
    pub recovery_pick: Option<PickOutcome>,
}

impl TickReport {
    /// Number of picks run this tick (0, 1 or 2).
    pub fn picks(&self) -> u32 {
        self.arrival_pick.is_some() as u32 + self.recovery_pick.is_some() as u32
    }

    /// `true` if any pick this tick issued a new destination.
    pub fn issued_destination(&self) -> bool {
        self.arrival_pick.is_some_and(|p| p.is_accepted())
            || self.recovery_pick.is_some_and(|p| p.is_accepted())
    }
}

/// Running counters for one controller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WanderStats {
    /// Picks started, for any reason.
    pub picks: u64,
    /// Picks that issued a destination.
    pub accepted: u64,
    /// Picks that exhausted every try.
    pub exhausted: u64,
    /// Picks forced by an invalid or partial path.
    pub recoveries: u64,
}
