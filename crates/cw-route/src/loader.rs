//! CSV zone-table loader.
//!
//! # CSV format
//!
//! One row per zone, matched against room codes in file order.
//!
//! ```csv
//! code,name,column
//! TA,Tower A,70
//! TB,Tower B,82
//! TC,Tower C,94
//! ```
//!
//! Whitespace around fields is trimmed.  The loader only checks each row on
//! its own; run [`CampusLayout::validate`][crate::CampusLayout::validate]
//! after installing the table to check the zones against each other and
//! against the corridor.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{RouteError, Zone};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ZoneRecord {
    code:   String,
    name:   String,
    column: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a zone table from a CSV file.
pub fn load_zones_csv(path: &Path) -> Result<Vec<Zone>, RouteError> {
    let file = std::fs::File::open(path).map_err(RouteError::Io)?;
    load_zones_reader(file)
}

/// Like [`load_zones_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for tables embedded in
/// the binary.
pub fn load_zones_reader<R: Read>(reader: R) -> Result<Vec<Zone>, RouteError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut zones = Vec::new();
    for (line, result) in csv_reader.deserialize::<ZoneRecord>().enumerate() {
        let row = result.map_err(|e| RouteError::Parse(e.to_string()))?;
        zones.push(parse_zone(row, line + 2)?);
    }
    Ok(zones)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_zone(row: ZoneRecord, line: usize) -> Result<Zone, RouteError> {
    if row.code.is_empty() {
        return Err(RouteError::Parse(format!(
            "line {line}: empty zone code (only the fallback zone may omit one)"
        )));
    }
    if !row.column.is_finite() {
        return Err(RouteError::Parse(format!(
            "line {line}: column {} for zone {:?} is not a finite number",
            row.column, row.code
        )));
    }
    Ok(Zone::new(row.code, row.name, row.column))
}
