//! Console summary table for a finished audit run.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fnmap_validate::mismatched_key_count;

use crate::types::AuditResult;

pub fn print_summary(result: &AuditResult) {
    println!("Input: {}", result.input.display());
    match &result.report_path {
        Some(path) => println!("Report: {}", path.display()),
        None => println!("Report: (dry run, not written)"),
    }
    println!("Rows audited: {}", result.row_count);

    let report = &result.report;
    let diagnostics = &result.diagnostics;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Check"), header_cell("Findings")]);
    apply_summary_table_style(&mut table);

    let rows: Vec<(&str, usize)> = vec![
        ("Duplicate rows (exact)", report.duplicate_rows.len()),
        ("Null functions", report.null_functions),
        ("Null function groups", report.null_groups),
        (
            "Duplicate rows (case/order-insensitive)",
            diagnostics.content_duplicate_groups,
        ),
        (
            "Function sets in multiple groups",
            mismatched_key_count(&report.group_mismatches),
        ),
        (
            "Functions in multiple textual forms",
            report.function_form_count,
        ),
        (
            "Function groups in multiple textual forms",
            report.group_form_count,
        ),
        (
            "Titles with multiple function sets",
            diagnostics.title_function_mismatches,
        ),
        (
            "Titles in multiple textual forms",
            diagnostics.title_form_count,
        ),
        (
            "Function sets mapped to OTHER",
            report.other_group_counts.len(),
        ),
        (
            "Within-row duplicate functions",
            report.within_row.duplicated_functions.len(),
        ),
    ];
    for (check, count) in rows {
        table.add_row(vec![Cell::new(check), count_cell(count)]);
    }
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
