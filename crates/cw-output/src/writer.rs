//! The `TraceWriter` trait implemented by output backends.

use crate::{OutputResult, SessionRow, TraceRow};

/// Sink for navigation traces.
///
/// Errors are stored by [`TraceObserver`][crate::TraceObserver] and
/// retrieved with `take_error`, since observer hooks return nothing.
pub trait TraceWriter {
    /// Write one update row.
    fn write_update(&mut self, row: &TraceRow) -> OutputResult<()>;

    /// Write one session summary row.
    fn write_session(&mut self, row: &SessionRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent.  Writers stay usable afterwards; later rows are flushed
    /// by the next call.
    fn flush(&mut self) -> OutputResult<()>;
}
