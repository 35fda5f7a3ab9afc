//! `TraceObserver<W>` — bridges `AirlockObserver` to an `OutputWriter`.

use al_control::{AirlockObserver, TickReport};
use al_core::Tick;
use al_door::{Actuation, DoorSnapshot};

use crate::row::{ActuationRow, DoorSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// An [`AirlockObserver`] that writes snapshots, actuations, and tick
/// summaries to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  Check for them with
/// [`take_error`][Self::take_error] once the host stops invoking.
pub struct TraceObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Flush the writer.  Call once the host is done invoking.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> AirlockObserver for TraceObserver<W> {
    fn on_actuation(&mut self, tick: Tick, actuation: &Actuation) {
        let row = ActuationRow {
            tick:   tick.0,
            door:   actuation.door,
            action: actuation.action,
        };
        let result = self.writer.write_actuation(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, doors: &[DoorSnapshot]) {
        let rows: Vec<DoorSnapshotRow> = doors
            .iter()
            .map(|s| DoorSnapshotRow {
                tick:            tick.0,
                door:            s.id,
                is_open:         s.is_open,
                is_opening:      s.is_opening,
                is_closing:      s.is_closing,
                request_to_open: s.request_to_open,
                cooldown_ticks:  s.cooldown_ticks,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        let row = TickSummaryRow {
            tick:     report.tick.0,
            tag:      report.tag.clone(),
            doors:    report.doors as u64,
            pairs:    report.pairs.len() as u64,
            unpaired: report.unpaired,
            opens:    report.opens() as u64,
            closes:   report.closes() as u64,
            reset:    report.reset,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }
}
