//! Markdown report assembly.
//!
//! Rendering is fully deterministic: section order is fixed, every
//! aggregate is iterated in key order, and nothing time- or
//! environment-dependent goes into the text, so re-running the audit on
//! an unchanged input produces a byte-identical file.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use fnmap_model::CellValue;
use fnmap_validate::WithinRowDuplicates;

/// Everything the Markdown report is built from, in check-output form.
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    /// Duplicate raw rows, keyed by the (title, functions, group) tuple.
    pub duplicate_rows: BTreeMap<Vec<CellValue>, usize>,
    /// Rows with a null `functions` column.
    pub null_functions: usize,
    /// Rows with a null `function_group` column.
    pub null_groups: usize,
    /// Row tally per normalized function group.
    pub group_counts: BTreeMap<CellValue, usize>,
    /// Function tuples mapped to more than one group.
    pub group_mismatches: Vec<(CellValue, CellValue)>,
    /// Functions appearing in multiple textual forms.
    pub function_form_count: usize,
    /// Function groups appearing in multiple textual forms.
    pub group_form_count: usize,
    /// Per-function-tuple row counts within group OTHER.
    pub other_group_counts: BTreeMap<Vec<String>, usize>,
    /// Within-row duplicate findings.
    pub within_row: WithinRowDuplicates,
}

/// Render the report as Markdown text.
pub fn render_markdown(report: &AuditReport) -> String {
    let mut out = String::new();
    out.push_str("# Title to function mapping audit\n\n");

    let _ = writeln!(
        out,
        "Number of rows that have duplicates: {}\n",
        report.duplicate_rows.len()
    );
    let _ = writeln!(
        out,
        "Number of rows that have a null functions column: {}\n",
        report.null_functions
    );
    let _ = writeln!(
        out,
        "Number of rows that have a null function group column: {}\n",
        report.null_groups
    );

    out.push_str("The number of appearances of each function group:\n\n");
    push_count_block(
        &mut out,
        report
            .group_counts
            .iter()
            .map(|(value, count)| (value.to_string(), *count)),
    );

    out.push_str("The functions mapped to more than one function group are:\n\n");
    push_lines_block(
        &mut out,
        report
            .group_mismatches
            .iter()
            .map(|(functions, group)| format!("{functions} -> {group}")),
    );

    let _ = writeln!(
        out,
        "There are {} functions which appear throughout in different forms \
         (different cases or different order).\n",
        report.function_form_count
    );
    let _ = writeln!(
        out,
        "There are {} function groups which appear throughout in different forms \
         (different cases).\n",
        report.group_form_count
    );

    out.push_str(
        "The following are the counts of each of the functions that are mapped \
         to the function group OTHER:\n\n",
    );
    push_count_block(
        &mut out,
        report
            .other_group_counts
            .iter()
            .map(|(functions, count)| (functions.join(", "), *count)),
    );

    out.push_str("The following functions appear at times as duplicates within the same row:\n\n");
    push_lines_block(
        &mut out,
        report.within_row.duplicated_functions.iter().cloned(),
    );

    out
}

/// Render and write the report file, creating parent directories as
/// needed.
pub fn write_report(path: &Path, report: &AuditReport) -> Result<PathBuf> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create report directory: {}", parent.display()))?;
    }
    let markdown = render_markdown(report);
    std::fs::write(path, markdown)
        .with_context(|| format!("write report: {}", path.display()))?;
    Ok(path.to_path_buf())
}

fn push_count_block(out: &mut String, entries: impl Iterator<Item = (String, usize)>) {
    push_lines_block(out, entries.map(|(label, count)| format!("{label}: {count}")));
}

fn push_lines_block(out: &mut String, lines: impl Iterator<Item = String>) {
    out.push_str("```\n");
    let mut empty = true;
    for line in lines {
        out.push_str(&line);
        out.push('\n');
        empty = false;
    }
    if empty {
        out.push_str("(none)\n");
    }
    out.push_str("```\n\n");
}
