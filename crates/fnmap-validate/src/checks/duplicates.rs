//! Duplicate finder and value tallies.

use std::collections::BTreeMap;

use fnmap_model::{CellValue, Column, NormalizedRecord};

/// Group rows by the values of `columns` and keep the key-tuples that
/// occur at least twice.
///
/// Key equality is exact on the chosen columns; callers pass the
/// normalized columns when they want case/order-insensitive matching.
/// Results come back in key natural order, which only matters for report
/// readability.
pub fn find_duplicates(
    rows: &[NormalizedRecord],
    columns: &[Column],
) -> BTreeMap<Vec<CellValue>, usize> {
    let mut counts: BTreeMap<Vec<CellValue>, usize> = BTreeMap::new();
    for row in rows {
        let key: Vec<CellValue> = columns.iter().map(|&column| row.cell(column)).collect();
        *counts.entry(key).or_insert(0) += 1;
    }
    counts.retain(|_, count| *count >= 2);
    counts
}

/// Tally rows by the value of one column.
///
/// Missing values are excluded from the tally; the null checker reports
/// those separately.
pub fn count_by(rows: &[NormalizedRecord], column: Column) -> BTreeMap<CellValue, usize> {
    let mut counts: BTreeMap<CellValue, usize> = BTreeMap::new();
    for row in rows {
        let value = row.cell(column);
        if value.is_missing() {
            continue;
        }
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}
