//! Function tallies restricted to the catch-all "OTHER" group.

use std::collections::BTreeMap;

use fnmap_model::{NormalizedRecord, OTHER_GROUP};

/// Count rows mapped to the group `OTHER`, keyed by the full sorted
/// function tuple.
///
/// Two rows with the same multiset of functions in different original
/// order count as one key, since the tuple is taken from the normalized
/// column. Rows whose group or function list is missing never appear.
pub fn functions_in_other_group(rows: &[NormalizedRecord]) -> BTreeMap<Vec<String>, usize> {
    let mut counts: BTreeMap<Vec<String>, usize> = BTreeMap::new();
    for row in rows {
        if row.uppercase_group.as_deref() != Some(OTHER_GROUP) {
            continue;
        }
        let Some(functions) = &row.uppercase_functions else {
            continue;
        };
        *counts.entry(functions.clone()).or_insert(0) += 1;
    }
    counts
}
