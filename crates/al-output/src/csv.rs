//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `door_snapshots.csv`
//! - `actuations.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ActuationRow, DoorSnapshotRow, OutputResult, TickSummaryRow};

/// Writes trace output to three CSV files.
pub struct CsvWriter {
    snapshots:  Writer<File>,
    actuations: Writer<File>,
    summaries:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("door_snapshots.csv"))?;
        snapshots.write_record([
            "tick", "door", "open", "opening", "closing", "request_to_open", "cooldown_ticks",
        ])?;

        let mut actuations = Writer::from_path(dir.join("actuations.csv"))?;
        actuations.write_record(["tick", "door", "action"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick", "tag", "doors", "pairs", "unpaired", "opens", "closes", "reset",
        ])?;

        Ok(Self {
            snapshots,
            actuations,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[DoorSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.door.to_string(),
                (row.is_open as u8).to_string(),
                (row.is_opening as u8).to_string(),
                (row.is_closing as u8).to_string(),
                (row.request_to_open as u8).to_string(),
                row.cooldown_ticks.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_actuation(&mut self, row: &ActuationRow) -> OutputResult<()> {
        self.actuations.write_record(&[
            row.tick.to_string(),
            row.door.to_string(),
            row.action.to_string(),
        ])?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.tag.clone(),
            row.doors.to_string(),
            row.pairs.to_string(),
            row.unpaired.map(|d| d.to_string()).unwrap_or_default(),
            row.opens.to_string(),
            row.closes.to_string(),
            (row.reset as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.actuations.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
