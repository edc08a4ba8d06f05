//! Simulation time model.
//!
//! # Design
//!
//! The engine advances in fixed frames.  Two clocks run side by side:
//!
//!   now = frame * frame_dt
//!
//! `Frame` is the canonical integer counter (exact, used for snapshot
//! intervals and output rows).  `SimTime` is the derived float time in
//! seconds that behavior code compares against deadlines such as an idle
//! window.  `now` is recomputed from the frame count on every advance so it
//! never accumulates floating-point drift.

use std::fmt;

use crate::{WanderError, WanderResult};

// ── Frame ─────────────────────────────────────────────────────────────────────

/// An absolute simulation frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// Return the frame `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Frame {
        Frame(self.0 + n)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── SimTime ───────────────────────────────────────────────────────────────────

/// Simulation time in seconds since frame 0.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f32);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    #[inline]
    pub fn secs(self) -> f32 {
        self.0
    }
}

impl std::ops::Add<f32> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f32) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f32;
    #[inline]
    fn sub(self, rhs: SimTime) -> f32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current frame and the matching simulation time.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Seconds per frame.
    pub frame_dt: f32,
    /// The current frame.
    pub frame: Frame,
    /// Simulation time of `frame`.
    pub now: SimTime,
}

impl SimClock {
    pub fn new(frame_dt: f32) -> Self {
        Self {
            frame_dt,
            frame: Frame::ZERO,
            now: SimTime::ZERO,
        }
    }

    /// Advance the clock by one frame.
    #[inline]
    pub fn advance(&mut self) {
        self.frame = self.frame.offset(1);
        self.now = SimTime(self.frame.0 as f32 * self.frame_dt);
    }

    /// How many frames span `secs` seconds? (rounds up)
    #[inline]
    pub fn frames_for_secs(&self, secs: f32) -> u64 {
        (secs / self.frame_dt).ceil().max(0.0) as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.frame, self.now)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the simulation runner.  Every field has a default so partial files work.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Seconds per frame.  Default: 1/30 s.
    pub frame_dt: f32,

    /// Total frames to simulate.
    pub total_frames: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Emit an agent snapshot every N frames.  0 disables snapshots.
    pub snapshot_interval_frames: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_dt:                 1.0 / 30.0,
            total_frames:             1_800,
            seed:                     0,
            snapshot_interval_frames: 30,
            num_threads:              None,
        }
    }
}

impl SimConfig {
    /// The frame at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_frame(&self) -> Frame {
        Frame(self.total_frames)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.frame_dt)
    }

    /// Reject configurations the tick loop cannot run.
    pub fn validate(&self) -> WanderResult<()> {
        if !self.frame_dt.is_finite() || self.frame_dt <= 0.0 {
            return Err(WanderError::Config(format!(
                "frame_dt must be a positive number of seconds, got {}",
                self.frame_dt
            )));
        }
        if self.num_threads == Some(0) {
            return Err(WanderError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}
