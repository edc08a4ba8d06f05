//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `frame_summaries.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, FrameSummaryRow, OutputResult};

pub const SNAPSHOT_FILE: &str = "agent_snapshots.csv";
pub const SUMMARY_FILE: &str = "frame_summaries.csv";

const SNAPSHOT_HEADER: [&str; 9] =
    ["agent_id", "frame", "time", "x", "y", "z", "speed", "path_status", "idle_until"];
const SUMMARY_HEADER: [&str; 6] =
    ["frame", "time", "picks", "accepted", "exhausted", "recoveries"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files in it, and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summaries.write_record(SUMMARY_HEADER)?;

        log::debug!("writing CSV output to {}", dir.display());
        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.frame.to_string(),
                row.time.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.z.to_string(),
                row.speed.to_string(),
                row.path_status.to_string(),
                row.idle_until.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.frame.to_string(),
            row.time.to_string(),
            row.picks.to_string(),
            row.accepted.to_string(),
            row.exhausted.to_string(),
            row.recoveries.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
