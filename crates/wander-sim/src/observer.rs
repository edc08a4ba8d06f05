//! Simulation observer trait and the read-only views it receives.

use wander_behavior::TickReport;
use wander_core::{AgentId, Frame, SimTime, Vec3};
use wander_nav::PathStatus;

/// Pick counts for one frame, summed over every agent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameSummary {
    /// Picks started (arrival and recovery).
    pub picks: u32,
    /// Picks that issued a destination.
    pub accepted: u32,
    /// Picks that ran out of tries.
    pub exhausted: u32,
    /// Picks forced by an invalid or partial path.
    pub recoveries: u32,
}

impl FrameSummary {
    /// Fold one agent's tick report into the summary.
    pub fn record(&mut self, report: &TickReport) {
        if report.recovery_pick.is_some() {
            self.recoveries += 1;
        }
        for pick in [report.arrival_pick, report.recovery_pick].into_iter().flatten() {
            self.picks += 1;
            if pick.is_accepted() {
                self.accepted += 1;
            } else {
                self.exhausted += 1;
            }
        }
    }
}

/// What an observer sees of one agent at a snapshot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentView {
    pub id:          AgentId,
    pub position:    Vec3,
    pub speed:       f32,
    pub path_status: PathStatus,
    pub idle_until:  SimTime,
    /// The point the agent is walking to, if any.
    pub goal:        Option<Vec3>,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// frame loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_frame_end(&mut self, frame: Frame, summary: &FrameSummary) {
///         if frame.0 % self.interval == 0 {
///             println!("{frame}: {} picks", summary.picks);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each frame, before any agent is ticked.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called after every agent has been ticked and moved.
    fn on_frame_end(&mut self, _frame: Frame, _summary: &FrameSummary) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_frames`
    /// frames), after `on_frame_start` and before any agent is ticked, so
    /// every position is the one held at `now`.  `agents` is indexed by
    /// `AgentId`.
    fn on_snapshot(&mut self, _frame: Frame, _now: SimTime, _agents: &[AgentView]) {}

    /// Called once after the final frame completes.
    fn on_sim_end(&mut self, _final_frame: Frame) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
