//! The `OutputWriter` trait implemented by backend writers.

use crate::{ActuationRow, DoorSnapshotRow, OutputResult, TickSummaryRow};

/// Trait implemented by trace backends.
///
/// Errors never reach the airlock program: `TraceObserver` stores them
/// and hands them out through
/// [`TraceObserver::take_error`][crate::TraceObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of door snapshots.
    fn write_snapshots(&mut self, rows: &[DoorSnapshotRow]) -> OutputResult<()>;

    /// Write one actuation row.
    fn write_actuation(&mut self, row: &ActuationRow) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
