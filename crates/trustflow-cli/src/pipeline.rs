//! Reconciliation pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read an export CSV into an all-string frame
//! 2. **Extract**: flatten topic/value pairs into the filtered long form
//! 3. **Reconcile**: dedupe the link export and left-join on canonical domain
//! 4. **Output**: write the result CSV (and optional JSON summary)
//!
//! Each stage takes the output of the previous stage and returns a fresh
//! frame; nothing here mutates its inputs.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame};
use tracing::{debug, info, info_span};

use trustflow_core::{ExtractOptions, ReconcileOptions, extract_topic_matches, reconcile_links};
use trustflow_ingest::{build_frame, read_csv_table};
use trustflow_model::LINK_METRIC_COLUMNS;
use trustflow_report::write_table_csv;

/// Read one export CSV into a frame. `export` labels the log span
/// ("metrics" or "links").
pub fn ingest_export(path: &Path, export: &str) -> Result<DataFrame> {
    let span = info_span!("ingest", export = %export, path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_csv_table(path).with_context(|| format!("read {}", path.display()))?;
    let frame = build_frame(&table).with_context(|| format!("build frame for {export} export"))?;
    debug!(
        export = %export,
        row_count = frame.height(),
        column_count = frame.get_column_names().len(),
        duration_ms = start.elapsed().as_millis(),
        "export ingested"
    );
    Ok(frame)
}

/// Run topic extraction over an ingested metrics frame.
pub fn extract_stage(metrics: &DataFrame, query: &str, case_sensitive: bool) -> Result<DataFrame> {
    let span = info_span!("extract", query = %query, case_sensitive);
    let _guard = span.enter();
    let start = Instant::now();

    let options = ExtractOptions { case_sensitive };
    let matches = extract_topic_matches(metrics, query, &options)
        .context("extract topical trust flow matches")?;
    debug!(
        match_rows = matches.height(),
        duration_ms = start.elapsed().as_millis(),
        "extraction stage complete"
    );
    Ok(matches)
}

/// Reconcile long-form matches against an ingested link frame.
pub fn reconcile_stage(
    matches: &DataFrame,
    links: &DataFrame,
    ratio_column: Option<&str>,
) -> Result<DataFrame> {
    let span = info_span!("reconcile");
    let _guard = span.enter();
    let start = Instant::now();

    let mut options = ReconcileOptions::default();
    if let Some(name) = ratio_column {
        options.ratio_column = name.to_string();
    }
    let merged = reconcile_links(matches, links, &options).context("reconcile link metrics")?;
    debug!(
        output_rows = merged.height(),
        duration_ms = start.elapsed().as_millis(),
        "reconcile stage complete"
    );
    Ok(merged)
}

/// Write a result frame to CSV.
pub fn output_stage(path: &Path, frame: &DataFrame) -> Result<()> {
    let span = info_span!("output", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    write_table_csv(path, frame).with_context(|| format!("write {}", path.display()))?;
    info!(
        path = %path.display(),
        row_count = frame.height(),
        duration_ms = start.elapsed().as_millis(),
        "output written"
    );
    Ok(())
}

/// Rows of a merged frame that found a link-side partner: any link metric
/// column non-null counts.
pub fn matched_row_count(merged: &DataFrame) -> usize {
    let mut matched = 0usize;
    for row in 0..merged.height() {
        let hit = LINK_METRIC_COLUMNS.iter().any(|name| {
            merged
                .column(name)
                .ok()
                .map(|column| !matches!(column.get(row).unwrap_or(AnyValue::Null), AnyValue::Null))
                .unwrap_or(false)
        });
        if hit {
            matched += 1;
        }
    }
    matched
}
