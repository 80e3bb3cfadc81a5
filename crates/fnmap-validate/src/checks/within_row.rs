//! Within-row duplicate detection over the function lists.

use std::collections::{BTreeMap, BTreeSet};

use fnmap_model::NormalizedRecord;

/// How the duplicate-token "seen" set is scoped while walking flagged
/// rows.
///
/// `Global` shares one set across every flagged row, so a token first
/// seen in one row and seen again in a later row is classified as a
/// duplicate. That conflates cross-row and within-row duplication, but it
/// is the established behavior this audit's consumers rely on, so it is
/// the default. `PerRow` resets the set for each row and classifies only
/// genuine within-row repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateScope {
    #[default]
    Global,
    PerRow,
}

/// Result of the within-row duplicate check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WithinRowDuplicates {
    /// Duplicate-containing rows, grouped by their function tuple.
    pub row_counts: BTreeMap<Vec<String>, usize>,
    /// Individual function tokens observed as a repeated element.
    pub duplicated_functions: BTreeSet<String>,
}

/// Find rows whose function list contains the same function more than
/// once.
///
/// A row is duplicate-containing when its token list has fewer distinct
/// elements than its length. Only flagged rows feed the token walk; rows
/// with a missing function list are skipped.
pub fn within_row_duplicates(
    rows: &[NormalizedRecord],
    scope: DuplicateScope,
) -> WithinRowDuplicates {
    let mut row_counts: BTreeMap<Vec<String>, usize> = BTreeMap::new();
    let mut duplicated_functions: BTreeSet<String> = BTreeSet::new();
    let mut seen: BTreeSet<String> = BTreeSet::new();

    for row in rows {
        let Some(functions) = &row.uppercase_functions else {
            continue;
        };
        let distinct: BTreeSet<&String> = functions.iter().collect();
        if distinct.len() == functions.len() {
            continue;
        }
        if scope == DuplicateScope::PerRow {
            seen.clear();
        }
        for function in functions {
            if !seen.insert(function.clone()) {
                duplicated_functions.insert(function.clone());
            }
        }
        *row_counts.entry(functions.clone()).or_insert(0) += 1;
    }

    WithinRowDuplicates {
        row_counts,
        duplicated_functions,
    }
}
