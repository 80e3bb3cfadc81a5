//! Null checker: rows where a given column is absent.

use fnmap_model::{Column, NormalizedRecord};

/// Return the rows where `column` is null/absent.
///
/// Pure filter used for counting and reporting; callers never drop the
/// returned rows from later checks.
pub fn null_rows(rows: &[NormalizedRecord], column: Column) -> Vec<&NormalizedRecord> {
    rows.iter().filter(|row| row.is_null(column)).collect()
}
