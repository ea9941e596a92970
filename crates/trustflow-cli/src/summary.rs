//! Human-readable run summaries and table previews.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use trustflow_ingest::any_to_string;
use trustflow_model::{LINK_METRIC_COLUMNS, SUBJECT_COLUMN, TARGET_COLUMN, topic_pair_columns};

use crate::types::{FilterResult, ReconcileResult};

const PREVIEW_ROWS: usize = 10;

pub fn print_filter_summary(result: &FilterResult) {
    println!("Query: {:?} (case-sensitive: {})", result.query, result.case_sensitive);
    println!("Input rows: {}", result.input_rows);
    if result.match_rows() == 0 {
        println!("No matches found for that topic string.");
        return;
    }
    println!(
        "Found {} matching topical trust flow entries.",
        result.match_rows()
    );
    print_preview(&result.matches);
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }
}

pub fn print_reconcile_summary(result: &ReconcileResult) {
    let summary = &result.summary;
    println!(
        "Query: {:?} (case-sensitive: {})",
        summary.query, summary.case_sensitive
    );

    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Metrics export"), Cell::new(summary.metrics_rows)]);
    table.add_row(vec![Cell::new("Topic matches"), Cell::new(summary.match_rows)]);
    table.add_row(vec![Cell::new("Link export"), Cell::new(summary.link_rows)]);
    table.add_row(vec![
        Cell::new("Links after dedupe"),
        Cell::new(summary.deduped_link_rows),
    ]);
    table.add_row(vec![
        Cell::new("Matched"),
        count_cell(summary.matched_rows, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Unmatched"),
        count_cell(summary.unmatched_rows, Color::Yellow),
    ]);
    println!("{table}");

    if summary.match_rows == 0 {
        println!("No matches found for that topic string.");
        return;
    }
    print_preview(&result.merged);
    if let Some(path) = &summary.output {
        println!("Output: {}", path.display());
    }
    if let Some(path) = &result.summary_path {
        println!("Summary: {}", path.display());
    }
}

/// Print the expected schema of both exports.
pub fn print_expected_columns() {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Export"),
        header_cell("Column"),
        header_cell("Role"),
    ]);
    table.add_row(vec![
        Cell::new("metrics"),
        Cell::new(SUBJECT_COLUMN),
        Cell::new("subject identifier"),
    ]);
    for pair in topic_pair_columns() {
        table.add_row(vec![
            Cell::new("metrics"),
            Cell::new(&pair.topic),
            Cell::new(format!("topic, pair {}", pair.index)),
        ]);
        table.add_row(vec![
            Cell::new("metrics"),
            Cell::new(&pair.value),
            Cell::new(format!("value, pair {}", pair.index)),
        ]);
    }
    table.add_row(vec![
        Cell::new("links"),
        Cell::new(TARGET_COLUMN),
        Cell::new("target identifier"),
    ]);
    for name in LINK_METRIC_COLUMNS {
        table.add_row(vec![
            Cell::new("links"),
            Cell::new(*name),
            Cell::new("metric"),
        ]);
    }
    println!("{table}");
}

/// Print the first rows of a result frame.
fn print_preview(frame: &DataFrame) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(
        frame
            .get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    let columns = frame.get_columns();
    let shown = frame.height().min(PREVIEW_ROWS);
    for row in 0..shown {
        let cells: Vec<Cell> = columns
            .iter()
            .map(|column| {
                let value = column.get(row).unwrap_or(AnyValue::Null);
                if matches!(value, AnyValue::Null) {
                    dim_cell("-")
                } else {
                    Cell::new(any_to_string(value))
                }
            })
            .collect();
        table.add_row(cells);
    }
    println!("{table}");
    if frame.height() > shown {
        println!("... {} more rows", frame.height() - shown);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
