//! Mismatch finder: one-to-many associations between two columns.

use std::collections::{BTreeMap, BTreeSet};

use fnmap_model::{CellValue, Column, NormalizedRecord};

/// Find values of `column_a` that map to more than one distinct value of
/// `column_b` across the table.
///
/// The table is first collapsed to distinct (a, b) pairs, so rows that
/// merely repeat an existing association cannot re-report the same
/// mismatch. Only the surviving pairs whose `a` value appears in more
/// than one pair are returned, in key natural order. The check is
/// asymmetric: b-to-a integrity is a separate call with the arguments
/// swapped.
pub fn find_mismatches(
    rows: &[NormalizedRecord],
    column_a: Column,
    column_b: Column,
) -> Vec<(CellValue, CellValue)> {
    let mut pairs: BTreeSet<(CellValue, CellValue)> = BTreeSet::new();
    for row in rows {
        pairs.insert((row.cell(column_a), row.cell(column_b)));
    }

    let mut key_counts: BTreeMap<CellValue, usize> = BTreeMap::new();
    for (key, _) in &pairs {
        *key_counts.entry(key.clone()).or_insert(0) += 1;
    }

    pairs
        .into_iter()
        .filter(|(key, _)| key_counts.get(key).copied().unwrap_or(0) >= 2)
        .collect()
}

/// Number of distinct `column_a` values present in a mismatch result.
///
/// This is the "appears in multiple textual forms" count: each key is
/// counted once no matter how many variant forms it has.
pub fn mismatched_key_count(pairs: &[(CellValue, CellValue)]) -> usize {
    let keys: BTreeSet<&CellValue> = pairs.iter().map(|(key, _)| key).collect();
    keys.len()
}
