//! `al-output` — trace writers for the airlock interlock framework.
//!
//! The CSV backend creates three files in its output directory:
//!
//! | File                  | One row per                                     |
//! |-----------------------|-------------------------------------------------|
//! | `door_snapshots.csv`  | door per snapshot tick                          |
//! | `actuations.csv`      | command issued by the interlock                 |
//! | `tick_summaries.csv`  | tick                                            |
//!
//! Backends implement [`OutputWriter`] and are driven by [`TraceObserver`],
//! which implements `al_control::AirlockObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use al_output::{CsvWriter, TraceObserver};
//!
//! let writer = CsvWriter::new(Path::new("./trace")).unwrap();
//! let mut obs = TraceObserver::new(writer);
//! program.run_ticks(1_000, &mut obs);
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("trace error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{ActuationRow, DoorSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
