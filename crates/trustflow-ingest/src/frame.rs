//! DataFrame construction from raw CSV tables.

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use crate::csv_table::CsvTable;

/// Build an all-string frame from a raw table.
///
/// Empty cells become nulls so downstream coercion can distinguish an
/// absent value from an empty one. Column order follows the header order.
pub fn build_frame(table: &CsvTable) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(table.headers.len());
    for (col_idx, header) in table.headers.iter().enumerate() {
        let mut values: Vec<Option<String>> = Vec::with_capacity(table.rows.len());
        for row in &table.rows {
            let cell = row.get(col_idx).map(String::as_str).unwrap_or("");
            if cell.is_empty() {
                values.push(None);
            } else {
                values.push(Some(cell.to_string()));
            }
        }
        columns.push(Series::new(header.as_str().into(), values).into());
    }
    DataFrame::new(columns).context("build frame from csv table")
}
