//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use wander_core::{Frame, SimConfig, SimTime};
use wander_sim::{AgentView, FrameSummary, SimObserver};

use crate::row::{AgentSnapshotRow, FrameSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots and frame summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    frame_dt:   f32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` to convert
    /// frames to simulation time.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            frame_dt:   config.frame_dt,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn time(&self, frame: Frame) -> f32 {
        frame.0 as f32 * self.frame_dt
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                log::warn!("output write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_frame_end(&mut self, frame: Frame, summary: &FrameSummary) {
        let row = FrameSummaryRow {
            frame:      frame.0,
            time:       self.time(frame),
            picks:      summary.picks,
            accepted:   summary.accepted,
            exhausted:  summary.exhausted,
            recoveries: summary.recoveries,
        };
        let result = self.writer.write_frame_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, frame: Frame, now: SimTime, agents: &[AgentView]) {
        let rows: Vec<AgentSnapshotRow> = agents
            .iter()
            .map(|view| AgentSnapshotRow {
                agent_id:    view.id.0,
                frame:       frame.0,
                time:        now.secs(),
                x:           view.position.x,
                y:           view.position.y,
                z:           view.position.z,
                speed:       view.speed,
                path_status: view.path_status,
                idle_until:  view.idle_until.secs(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_frame: Frame) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
