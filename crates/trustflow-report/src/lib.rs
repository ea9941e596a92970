//! Output serialization for result frames and run summaries.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame};

use trustflow_ingest::any_to_string;
use trustflow_model::RunSummary;

/// Write a frame to CSV, headers first, null cells as empty fields.
pub fn write_table_csv(path: &Path, frame: &DataFrame) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create csv: {}", path.display()))?;
    let headers: Vec<String> = frame
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    writer
        .write_record(&headers)
        .with_context(|| format!("write header: {}", path.display()))?;

    let columns = frame.get_columns();
    for row in 0..frame.height() {
        let mut record = Vec::with_capacity(columns.len());
        for column in columns {
            record.push(any_to_string(column.get(row).unwrap_or(AnyValue::Null)));
        }
        writer
            .write_record(&record)
            .with_context(|| format!("write row {row}: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    Ok(())
}

/// Write the run summary as pretty-printed JSON.
pub fn write_run_summary_json(path: &Path, summary: &RunSummary) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create summary: {}", path.display()))?;
    serde_json::to_writer_pretty(file, summary)
        .with_context(|| format!("write summary: {}", path.display()))?;
    Ok(())
}
