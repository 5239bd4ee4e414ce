//! `cw-output`: navigation trace writers for the campus_walk simulator.
//!
//! | Backend | Files created                   |
//! |---------|---------------------------------|
//! | CSV     | `trace.csv`, `sessions.csv`     |
//!
//! Backends implement [`TraceWriter`] and are driven by [`TraceObserver`],
//! which implements `cw_sim::NavObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cw_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./trace"))?;
//! let mut obs = TraceObserver::sampled(writer, 10);
//! driver.start_for("60TA - 601", &mut obs)?;
//! scheduler.run(&mut driver, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{SessionOutcome, SessionRow, TraceRow};
pub use writer::TraceWriter;
