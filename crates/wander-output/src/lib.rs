//! `wander-output` — simulation output writers for the rust_wander framework.
//!
//! | Backend | Files created                                      |
//! |---------|----------------------------------------------------|
//! | CSV     | `agent_snapshots.csv`, `frame_summaries.csv`       |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `wander_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wander_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, FrameSummaryRow};
pub use writer::OutputWriter;
