//! `TraceObserver<W>` bridges `NavObserver` to a `TraceWriter`.

use cw_core::Tick;
use cw_sim::{NavObserver, NavUpdate};

use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult, SessionOutcome, SessionRow, TraceRow};

/// A [`NavObserver`] that records every update and a summary of each
/// finished session to any [`TraceWriter`] backend.
///
/// Errors from the writer are stored internally because `NavObserver`
/// methods have no return value.  After a run, check with
/// [`take_error`][Self::take_error].
///
/// `every` thins the per-update trace: only updates whose tick is a multiple
/// of it are written.  Start and arrival updates are always written.
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    every:      u64,
    last:       Option<NavUpdate>,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    /// Record every update.
    pub fn new(writer: W) -> Self {
        Self::sampled(writer, 1)
    }

    /// Record one update in `every` (0 is treated as 1).
    pub fn sampled(writer: W, every: u64) -> Self {
        Self {
            writer,
            every: every.max(1),
            last: None,
            last_error: None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush and unwrap the inner writer.
    pub fn into_writer(mut self) -> OutputResult<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn finish_session(&mut self, outcome: SessionOutcome, ticks: u64) {
        let (final_progress, headline) = match self.last.take() {
            Some(u) => (u.progress, u.headline),
            None    => (0.0, String::new()),
        };
        let row = SessionRow { outcome, ticks, final_progress, headline };
        let result = self.writer.write_session(&row).and_then(|()| self.writer.flush());
        self.store_err(result);
    }
}

impl<W: TraceWriter> NavObserver for TraceObserver<W> {
    fn on_update(&mut self, update: &NavUpdate) {
        let sampled = update.tick.0 % self.every == 0 || update.instruction.is_arrival();
        if sampled {
            let result = self.writer.write_update(&TraceRow::from(update));
            self.store_err(result);
        }
        self.last = Some(update.clone());
    }

    fn on_arrived(&mut self, update: &NavUpdate) {
        self.finish_session(SessionOutcome::Arrived, update.tick.0);
    }

    fn on_cancelled(&mut self, at: Tick) {
        self.finish_session(SessionOutcome::Cancelled, at.0);
    }
}
