//! Per-subcommand runners.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use trustflow_cli::pipeline::{
    extract_stage, ingest_export, matched_row_count, output_stage, reconcile_stage,
};
use trustflow_model::RunSummary;
use trustflow_report::write_run_summary_json;

use crate::cli::{FilterArgs, ReconcileArgs};
use crate::summary::print_expected_columns;
use crate::types::{FilterResult, ReconcileResult};

pub fn run_filter(args: &FilterArgs) -> Result<FilterResult> {
    let metrics = ingest_export(&args.metrics, "metrics")?;
    let input_rows = metrics.height();
    let matches = extract_stage(&metrics, &args.topic, args.case_sensitive)?;

    let output = if args.dry_run || matches.height() == 0 {
        if matches.height() == 0 {
            warn!(query = %args.topic, "no matches found for that topic string");
        }
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| derived_output_path(&args.metrics, "filtered"));
        output_stage(&path, &matches)?;
        Some(path)
    };

    Ok(FilterResult {
        query: args.topic.clone(),
        case_sensitive: args.case_sensitive,
        input_rows,
        matches,
        output,
    })
}

pub fn run_reconcile(args: &ReconcileArgs) -> Result<ReconcileResult> {
    let metrics = ingest_export(&args.metrics, "metrics")?;
    let links = ingest_export(&args.links, "links")?;

    let matches = extract_stage(&metrics, &args.topic, args.case_sensitive)?;
    if matches.height() == 0 {
        warn!(query = %args.topic, "no matches found for that topic string");
    }
    let merged = reconcile_stage(&matches, &links, args.ratio_column.as_deref())?;
    let matched_rows = matched_row_count(&merged);

    let mut summary = RunSummary {
        query: args.topic.clone(),
        case_sensitive: args.case_sensitive,
        metrics_rows: metrics.height(),
        match_rows: matches.height(),
        link_rows: links.height(),
        // Recomputed cheaply; the join itself already deduped.
        deduped_link_rows: trustflow_core::dedupe_links_by_domain(&links)?.height(),
        matched_rows,
        unmatched_rows: merged.height() - matched_rows,
        output: None,
    };

    if !args.dry_run && merged.height() > 0 {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| derived_output_path(&args.metrics, "reconciled"));
        output_stage(&path, &merged)?;
        summary.output = Some(path);
    }

    let summary_path = match (&args.summary_json, args.dry_run) {
        (Some(path), false) => {
            write_run_summary_json(path, &summary)
                .with_context(|| format!("write summary {}", path.display()))?;
            Some(path.clone())
        }
        _ => None,
    };

    Ok(ReconcileResult {
        summary,
        merged,
        summary_path,
    })
}

pub fn run_columns() {
    print_expected_columns();
}

/// Sibling output path: `<stem>_<suffix>.csv` next to the input.
fn derived_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|value| value.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}_{suffix}.csv"))
}
