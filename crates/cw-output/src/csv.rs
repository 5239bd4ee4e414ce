//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trace.csv`, one row per published update
//! - `sessions.csv`, one row per finished session

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{OutputResult, SessionRow, TraceRow};

pub const TRACE_FILE: &str = "trace.csv";
pub const SESSIONS_FILE: &str = "sessions.csv";

/// Writes navigation traces to two CSV files.
pub struct CsvTraceWriter {
    trace:    Writer<File>,
    sessions: Writer<File>,
}

impl CsvTraceWriter {
    /// Create (truncating) the two CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trace = Writer::from_path(dir.join(TRACE_FILE))?;
        trace.write_record([
            "tick", "progress", "x", "y", "heading_deg", "compass_deg", "eta_minutes", "headline",
        ])?;

        let mut sessions = Writer::from_path(dir.join(SESSIONS_FILE))?;
        sessions.write_record(["outcome", "ticks", "final_progress", "headline"])?;

        Ok(Self { trace, sessions })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_update(&mut self, row: &TraceRow) -> OutputResult<()> {
        self.trace.write_record(&[
            row.tick.to_string(),
            format!("{:.2}", row.progress),
            format!("{:.3}", row.x),
            format!("{:.3}", row.y),
            format!("{:.1}", row.heading_deg),
            format!("{:.1}", row.compass_deg),
            row.eta_minutes.to_string(),
            row.headline.clone(),
        ])?;
        Ok(())
    }

    fn write_session(&mut self, row: &SessionRow) -> OutputResult<()> {
        self.sessions.write_record(&[
            row.outcome.as_str().to_owned(),
            row.ticks.to_string(),
            format!("{:.2}", row.final_progress),
            row.headline.clone(),
        ])?;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.trace.flush()?;
        self.sessions.flush()?;
        Ok(())
    }
}
