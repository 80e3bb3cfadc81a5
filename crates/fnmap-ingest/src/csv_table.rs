//! CSV table loading.
//!
//! Reads the input file into an ordered sequence of [`Record`]s. Blank
//! cells become `None`; a missing required column is a fatal error, not
//! something to recover from.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use fnmap_model::Record;

use crate::error::{IngestError, Result};

/// Columns the input schema must provide, in schema order.
pub const REQUIRED_COLUMNS: [&str; 3] = ["title", "functions", "function_group"];

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Read the audited table from a CSV file.
///
/// Row order is preserved exactly as read. Rows that are entirely blank
/// are skipped.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.is_empty() {
        return Err(IngestError::MissingHeader);
    }
    let indices = column_indices(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let cell = |index: usize| normalize_cell(row.get(index).unwrap_or(""));
        records.push(Record::new(
            cell(indices[0]),
            cell(indices[1]),
            cell(indices[2]),
        ));
    }
    debug!(
        path = %path.display(),
        row_count = records.len(),
        "csv table loaded"
    );
    Ok(records)
}

/// Locate the required columns, failing on the first one missing.
fn column_indices(headers: &[String]) -> Result<[usize; 3]> {
    let mut indices = [0usize; 3];
    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        let position = headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| IngestError::MissingColumn(name.to_string()))?;
        *slot = position;
    }
    Ok(indices)
}
