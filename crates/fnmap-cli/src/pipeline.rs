//! The audit pipeline with explicit stages.
//!
//! One linear pass, single-threaded:
//! 1. **Ingest**: read the input CSV into records
//! 2. **Normalize**: derive the uppercase/sorted comparison columns
//! 3. **Checks**: run every detector over the normalized table
//! 4. **Report**: assemble the Markdown report and write it
//!
//! Each stage takes the output of the previous stage; the checks are
//! independent of one another and only share the normalized table.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use fnmap_ingest::read_records;
use fnmap_model::{Column, NormalizedRecord, RAW_KEY_COLUMNS, UPPERCASE_KEY_COLUMNS};
use fnmap_report::{AuditReport, write_report};
use fnmap_transform::normalize;
use fnmap_validate::{
    DuplicateScope, count_by, find_duplicates, find_mismatches, functions_in_other_group,
    mismatched_key_count, null_rows, within_row_duplicates,
};

use crate::types::{AuditResult, Diagnostics};

/// Options for one audit run.
#[derive(Debug, Clone)]
pub struct AuditOptions {
    pub input: PathBuf,
    /// Report destination; defaults to `report.md` beside the input.
    pub output: Option<PathBuf>,
    pub duplicate_scope: DuplicateScope,
    /// Run checks and print the summary without writing the report file.
    pub dry_run: bool,
}

/// Run the full audit: ingest, normalize, checks, report.
pub fn run_audit(options: &AuditOptions) -> Result<AuditResult> {
    let audit_span = info_span!("audit", input = %options.input.display());
    let _audit_guard = audit_span.enter();
    let audit_start = Instant::now();

    let records = info_span!("ingest").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let records = read_records(&options.input)
            .with_context(|| format!("read {}", options.input.display()))?;
        debug!(
            row_count = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "ingest complete"
        );
        Ok(records)
    })?;
    let row_count = records.len();

    let rows = info_span!("normalize").in_scope(|| {
        let start = Instant::now();
        let rows = normalize(records);
        debug!(
            row_count = rows.len(),
            duration_ms = start.elapsed().as_millis(),
            "normalize complete"
        );
        rows
    });

    let (report, diagnostics) = info_span!("checks").in_scope(|| {
        let start = Instant::now();
        let report = build_report(&rows, options.duplicate_scope);
        let diagnostics = collect_diagnostics(&rows);
        debug!(
            duplicate_groups = report.duplicate_rows.len(),
            null_functions = report.null_functions,
            null_groups = report.null_groups,
            group_mismatch_pairs = report.group_mismatches.len(),
            duration_ms = start.elapsed().as_millis(),
            "checks complete"
        );
        (report, diagnostics)
    });

    let report_path = if options.dry_run {
        None
    } else {
        let path = info_span!("report").in_scope(|| -> Result<_> {
            let start = Instant::now();
            let path = resolve_output_path(options);
            let written = write_report(&path, &report)
                .with_context(|| format!("write report {}", path.display()))?;
            debug!(
                path = %written.display(),
                duration_ms = start.elapsed().as_millis(),
                "report written"
            );
            Ok(written)
        })?;
        Some(path)
    };

    info!(
        row_count,
        dry_run = options.dry_run,
        duration_ms = audit_start.elapsed().as_millis(),
        "audit complete"
    );

    Ok(AuditResult {
        input: options.input.clone(),
        report_path,
        row_count,
        report,
        diagnostics,
    })
}

/// Run every report-facing check over the normalized table.
fn build_report(rows: &[NormalizedRecord], scope: DuplicateScope) -> AuditReport {
    AuditReport {
        duplicate_rows: find_duplicates(rows, &RAW_KEY_COLUMNS),
        null_functions: null_rows(rows, Column::Functions).len(),
        null_groups: null_rows(rows, Column::FunctionGroup).len(),
        group_counts: count_by(rows, Column::UppercaseGroup),
        group_mismatches: find_mismatches(
            rows,
            Column::UppercaseFunctions,
            Column::UppercaseGroup,
        ),
        function_form_count: mismatched_key_count(&find_mismatches(
            rows,
            Column::UppercaseFunctions,
            Column::Functions,
        )),
        group_form_count: mismatched_key_count(&find_mismatches(
            rows,
            Column::UppercaseGroup,
            Column::FunctionGroup,
        )),
        other_group_counts: functions_in_other_group(rows),
        within_row: within_row_duplicates(rows, scope),
    }
}

/// Checks shown in the console summary only.
fn collect_diagnostics(rows: &[NormalizedRecord]) -> Diagnostics {
    Diagnostics {
        content_duplicate_groups: find_duplicates(rows, &UPPERCASE_KEY_COLUMNS).len(),
        title_function_mismatches: mismatched_key_count(&find_mismatches(
            rows,
            Column::UppercaseTitle,
            Column::UppercaseFunctions,
        )),
        title_form_count: mismatched_key_count(&find_mismatches(
            rows,
            Column::UppercaseTitle,
            Column::Title,
        )),
    }
}

fn resolve_output_path(options: &AuditOptions) -> PathBuf {
    match &options.output {
        Some(path) => path.clone(),
        None => default_output_path(&options.input),
    }
}

/// `report.md` in the input file's directory.
fn default_output_path(input: &Path) -> PathBuf {
    input.with_file_name("report.md")
}
