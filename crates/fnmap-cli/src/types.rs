use std::path::PathBuf;

use fnmap_report::AuditReport;

/// Everything a finished audit run produced.
#[derive(Debug)]
pub struct AuditResult {
    pub input: PathBuf,
    /// Written report path; `None` on a dry run.
    pub report_path: Option<PathBuf>,
    pub row_count: usize,
    pub report: AuditReport,
    pub diagnostics: Diagnostics,
}

/// Checks surfaced in the console summary but not in the report file.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    /// Duplicate groups under the case/order-insensitive key.
    pub content_duplicate_groups: usize,
    /// Titles mapped to more than one function tuple.
    pub title_function_mismatches: usize,
    /// Titles appearing in multiple textual forms.
    pub title_form_count: usize,
}
