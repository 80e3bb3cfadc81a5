//! End-to-end tests for the audit pipeline.

use std::fs;
use std::path::PathBuf;

use fnmap_cli::pipeline::{AuditOptions, run_audit};
use fnmap_validate::DuplicateScope;

const FIXTURE_CSV: &str = "title,functions,function_group\n\
                           Engineer,\"eng,qa\",Tech\n\
                           Engineer,\"eng,qa\",Tech\n\
                           engineer,\"qa,eng\",tech\n\
                           Analyst,analytics,Data\n\
                           Clerk,,Other\n\
                           Greeter,\"sales,sales\",OTHER\n\
                           Temp,misc,\n\
                           Worker,\"qa,eng\",Other\n";

const EXPECTED_REPORT: &str = r#"# Title to function mapping audit

Number of rows that have duplicates: 1

Number of rows that have a null functions column: 1

Number of rows that have a null function group column: 1

The number of appearances of each function group:

```
DATA: 1
OTHER: 3
TECH: 3
```

The functions mapped to more than one function group are:

```
ENG, QA -> OTHER
ENG, QA -> TECH
```

There are 1 functions which appear throughout in different forms (different cases or different order).

There are 2 function groups which appear throughout in different forms (different cases).

The following are the counts of each of the functions that are mapped to the function group OTHER:

```
ENG, QA: 1
SALES, SALES: 1
```

The following functions appear at times as duplicates within the same row:

```
SALES
```

"#;

fn write_input(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("titles.csv");
    fs::write(&path, content).expect("write input csv");
    path
}

fn options(input: PathBuf) -> AuditOptions {
    AuditOptions {
        input,
        output: None,
        duplicate_scope: DuplicateScope::default(),
        dry_run: false,
    }
}

#[test]
fn test_full_audit_report_content() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, FIXTURE_CSV);

    let result = run_audit(&options(input)).unwrap();

    assert_eq!(result.row_count, 8);
    let report_path = result.report_path.expect("report written");
    assert_eq!(report_path, dir.path().join("report.md"));
    let content = fs::read_to_string(&report_path).unwrap();
    assert_eq!(content, EXPECTED_REPORT);
}

#[test]
fn test_audit_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, FIXTURE_CSV);
    let options = options(input);

    let first = run_audit(&options).unwrap();
    let first_bytes = fs::read(first.report_path.as_ref().unwrap()).unwrap();
    let second = run_audit(&options).unwrap();
    let second_bytes = fs::read(second.report_path.as_ref().unwrap()).unwrap();

    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_diagnostics_counts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, FIXTURE_CSV);

    let result = run_audit(&options(input)).unwrap();

    // Three Engineer rows collapse under the case/order-insensitive key.
    assert_eq!(result.diagnostics.content_duplicate_groups, 1);
    assert_eq!(result.diagnostics.title_function_mismatches, 0);
    // "Engineer" and "engineer".
    assert_eq!(result.diagnostics.title_form_count, 1);
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, FIXTURE_CSV);
    let mut options = options(input);
    options.dry_run = true;

    let result = run_audit(&options).unwrap();

    assert!(result.report_path.is_none());
    assert!(!dir.path().join("report.md").exists());
}

#[test]
fn test_explicit_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, FIXTURE_CSV);
    let output = dir.path().join("out").join("audit.md");
    let mut options = options(input);
    options.output = Some(output.clone());

    let result = run_audit(&options).unwrap();

    assert_eq!(result.report_path, Some(output.clone()));
    assert!(output.exists());
}

#[test]
fn test_empty_table_reports_zeros_everywhere() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "title,functions,function_group\n");

    let result = run_audit(&options(input)).unwrap();

    assert_eq!(result.row_count, 0);
    let content = fs::read_to_string(result.report_path.unwrap()).unwrap();
    assert!(content.contains("Number of rows that have duplicates: 0"));
    assert!(content.contains("Number of rows that have a null functions column: 0"));
    assert!(content.contains("There are 0 functions which appear"));
    assert!(content.contains("There are 0 function groups which appear"));
    assert!(content.contains("(none)"));
}

#[test]
fn test_missing_column_is_fatal_and_writes_no_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "title,functions\nEngineer,eng\n");

    let error = run_audit(&options(input)).unwrap_err();

    assert!(error.to_string().contains("titles.csv"));
    assert!(!dir.path().join("report.md").exists());
}

#[test]
fn test_missing_input_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.csv");

    assert!(run_audit(&options(input)).is_err());
}

#[test]
fn test_per_row_scope_changes_duplicate_classification() {
    // ENG appears once in each flagged row. The historical global scope
    // classifies it as a duplicate because the seen set is shared across
    // rows; per-row scope does not.
    let csv = "title,functions,function_group\n\
               A,\"qa,qa,eng\",G\n\
               B,\"eng,sales,sales\",G\n";
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, csv);

    let mut global = options(input.clone());
    global.dry_run = true;
    let global_result = run_audit(&global).unwrap();

    let mut per_row = options(input);
    per_row.dry_run = true;
    per_row.duplicate_scope = DuplicateScope::PerRow;
    let per_row_result = run_audit(&per_row).unwrap();

    let global_duplicates = &global_result.report.within_row.duplicated_functions;
    assert!(global_duplicates.contains("QA"));
    assert!(global_duplicates.contains("SALES"));
    assert!(global_duplicates.contains("ENG"));

    let per_row_duplicates = &per_row_result.report.within_row.duplicated_functions;
    assert!(per_row_duplicates.contains("QA"));
    assert!(per_row_duplicates.contains("SALES"));
    assert!(!per_row_duplicates.contains("ENG"));
}
