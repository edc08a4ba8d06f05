//! Plain data row types written by output backends.

use wander_nav::PathStatus;

/// One agent's state at a snapshot frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id:    u32,
    pub frame:       u64,
    /// Simulation time of `frame`, in seconds.
    pub time:        f32,
    pub x:           f32,
    pub y:           f32,
    pub z:           f32,
    pub speed:       f32,
    pub path_status: PathStatus,
    /// End of the agent's idle window, in seconds.
    pub idle_until:  f32,
}

/// Pick counts for one simulation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummaryRow {
    pub frame:      u64,
    pub time:       f32,
    pub picks:      u32,
    pub accepted:   u32,
    pub exhausted:  u32,
    pub recoveries: u32,
}
