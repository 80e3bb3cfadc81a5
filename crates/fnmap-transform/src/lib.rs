//! Normalizer: derives the uppercase/sorted comparison columns.
//!
//! Normalization is append-only: the loaded fields are carried through
//! unchanged and three derived fields are added per row. A missing input
//! field propagates as a missing derived field, never an error.

use tracing::debug;

use fnmap_model::{NormalizedRecord, Record};

/// Normalize a whole table, preserving row order.
pub fn normalize(records: Vec<Record>) -> Vec<NormalizedRecord> {
    let row_count = records.len();
    let normalized: Vec<NormalizedRecord> = records.into_iter().map(normalize_record).collect();
    debug!(row_count, "table normalized");
    normalized
}

/// Normalize one record.
///
/// The function list is uppercased before splitting on `,`, then sorted
/// ascending. Duplicate tokens are preserved intentionally: detecting
/// them is one of the audit goals. Tokens are not trimmed, and commas
/// inside a function name are indistinguishable from separators; both
/// match the documented input limitations.
pub fn normalize_record(record: Record) -> NormalizedRecord {
    let uppercase_title = record.title.as_deref().map(str::to_uppercase);
    let uppercase_functions = record.functions.as_deref().map(split_functions);
    let uppercase_group = record.function_group.as_deref().map(str::to_uppercase);
    NormalizedRecord {
        record,
        uppercase_title,
        uppercase_functions,
        uppercase_group,
    }
}

fn split_functions(raw: &str) -> Vec<String> {
    let upper = raw.to_uppercase();
    let mut tokens: Vec<String> = if upper.contains(',') {
        upper.split(',').map(String::from).collect()
    } else {
        vec![upper]
    };
    tokens.sort();
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: Option<&str>, functions: Option<&str>, group: Option<&str>) -> Record {
        Record::new(
            title.map(String::from),
            functions.map(String::from),
            group.map(String::from),
        )
    }

    #[test]
    fn test_normalize_uppercases_title_and_group() {
        let row = normalize_record(record(Some("Sales Engineer"), Some("eng"), Some("other")));
        assert_eq!(row.uppercase_title, Some("SALES ENGINEER".to_string()));
        assert_eq!(row.uppercase_group, Some("OTHER".to_string()));
    }

    #[test]
    fn test_normalize_splits_and_sorts_functions() {
        let row = normalize_record(record(Some("T"), Some("qa,eng,analytics"), Some("G")));
        assert_eq!(
            row.uppercase_functions,
            Some(vec![
                "ANALYTICS".to_string(),
                "ENG".to_string(),
                "QA".to_string(),
            ])
        );
    }

    #[test]
    fn test_normalize_single_function_is_single_token_list() {
        let row = normalize_record(record(Some("T"), Some("eng"), Some("G")));
        assert_eq!(row.uppercase_functions, Some(vec!["ENG".to_string()]));
    }

    #[test]
    fn test_normalize_preserves_duplicate_tokens() {
        let row = normalize_record(record(Some("T"), Some("eng,qa,eng"), Some("G")));
        assert_eq!(
            row.uppercase_functions,
            Some(vec![
                "ENG".to_string(),
                "ENG".to_string(),
                "QA".to_string(),
            ])
        );
    }

    #[test]
    fn test_normalize_null_propagates_as_null() {
        let row = normalize_record(record(None, None, None));
        assert_eq!(row.uppercase_title, None);
        assert_eq!(row.uppercase_functions, None);
        assert_eq!(row.uppercase_group, None);
    }

    #[test]
    fn test_normalize_keeps_originals_unchanged() {
        let input = record(Some("engineer"), Some("qa,eng"), Some("other"));
        let row = normalize_record(input.clone());
        assert_eq!(row.record, input);
    }

    #[test]
    fn test_normalize_preserves_row_order() {
        let rows = normalize(vec![
            record(Some("B"), Some("b"), Some("G")),
            record(Some("A"), Some("a"), Some("G")),
        ]);
        assert_eq!(rows[0].record.title, Some("B".to_string()));
        assert_eq!(rows[1].record.title, Some("A".to_string()));
    }

    #[test]
    fn test_normalize_does_not_trim_tokens() {
        // Documented limitation: "eng, qa" yields a token with a leading space.
        let row = normalize_record(record(Some("T"), Some("eng, qa"), Some("G")));
        assert_eq!(
            row.uppercase_functions,
            Some(vec![" QA".to_string(), "ENG".to_string()])
        );
    }
}
