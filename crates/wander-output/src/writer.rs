//! The `OutputWriter` trait implemented by output backends.

use crate::{AgentSnapshotRow, FrameSummaryRow, OutputResult};

/// Sink for snapshot and frame-summary rows.
///
/// Observer callbacks cannot fail, so write errors are stored by the
/// observer and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one frame summary row.
    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
