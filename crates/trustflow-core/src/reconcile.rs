//! Reconciliation of long-form topic matches against a link export.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use polars::prelude::{
    AnyValue, BooleanChunked, Column, DataFrame, NamedFrom, NewChunkedArray, Series,
};
use tracing::{debug, info};

use trustflow_model::{
    LINK_METRIC_COLUMNS, OUTGOING_FOLLOWED_COLUMN, REFERRING_FOLLOWED_COLUMN, SUBJECT_COLUMN,
    SchemaError, TARGET_COLUMN,
};

use crate::normalize::normalize_cell_domain;
use crate::ratio::compute_ratio;

/// Options for reconciliation output.
#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    /// Name of the derived ratio column in the merged frame.
    pub ratio_column: String,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            ratio_column: "Followed Link Ratio".to_string(),
        }
    }
}

/// Drop link rows whose `Target` canonicalizes to an already-seen domain.
///
/// The first row per canonical domain wins, in table order. Rows whose
/// target canonicalizes to null are always retained; they are never merged
/// and never deduplicated against each other.
pub fn dedupe_links_by_domain(links: &DataFrame) -> Result<DataFrame> {
    let target_series = links.column(TARGET_COLUMN)?;
    let row_count = links.height();
    let mut seen = BTreeSet::new();
    let mut keep = Vec::with_capacity(row_count);
    for idx in 0..row_count {
        let key = normalize_cell_domain(target_series.get(idx).unwrap_or(AnyValue::Null));
        match key {
            Some(domain) => keep.push(seen.insert(domain)),
            None => keep.push(true),
        }
    }
    let dropped = keep.iter().filter(|kept| !**kept).count();
    if dropped > 0 {
        debug!(
            input_rows = row_count,
            dropped_rows = dropped,
            "duplicate link domains dropped"
        );
    }
    let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
    Ok(links.filter(&mask)?)
}

/// Left-join topic matches to a link export on canonical domain.
///
/// Every match row appears exactly once in the output, in its input order,
/// extended with all link metric columns (null-filled when no link row
/// shares its canonical domain, or when its own domain is null) and the
/// derived followed-link ratio. The link side is deduplicated first, so a
/// duplicate-domain link export never multiplies rows.
///
/// # Errors
///
/// Fails with a [`SchemaError`] naming every missing column when the link
/// frame does not carry `Target` and all required metric columns.
pub fn reconcile_links(
    matches: &DataFrame,
    links: &DataFrame,
    options: &ReconcileOptions,
) -> Result<DataFrame> {
    let mut missing = Vec::new();
    if links.column(TARGET_COLUMN).is_err() {
        missing.push(TARGET_COLUMN.to_string());
    }
    for name in LINK_METRIC_COLUMNS {
        if links.column(name).is_err() {
            missing.push((*name).to_string());
        }
    }
    if !missing.is_empty() {
        return Err(SchemaError::new("links", missing).into());
    }

    let deduped = dedupe_links_by_domain(links)?;

    // Canonical keys are unique after dedupe; null keys never enter the index.
    let target_series = deduped.column(TARGET_COLUMN)?;
    let mut link_index: BTreeMap<String, usize> = BTreeMap::new();
    for idx in 0..deduped.height() {
        if let Some(domain) = normalize_cell_domain(target_series.get(idx).unwrap_or(AnyValue::Null))
        {
            link_index.entry(domain).or_insert(idx);
        }
    }

    let subject_series = matches.column(SUBJECT_COLUMN)?;
    let match_count = matches.height();
    let mut joined_rows: Vec<Option<usize>> = Vec::with_capacity(match_count);
    for row in 0..match_count {
        let key = normalize_cell_domain(subject_series.get(row).unwrap_or(AnyValue::Null));
        joined_rows.push(key.and_then(|domain| link_index.get(&domain).copied()));
    }
    let matched = joined_rows.iter().filter(|idx| idx.is_some()).count();

    let mut columns: Vec<Column> = matches.get_columns().to_vec();
    for name in LINK_METRIC_COLUMNS {
        let metric_series = deduped.column(name)?;
        let mut values: Vec<Option<String>> = Vec::with_capacity(match_count);
        for link_row in &joined_rows {
            let value = link_row.and_then(|idx| {
                cell_text(metric_series.get(idx).unwrap_or(AnyValue::Null))
            });
            values.push(value);
        }
        columns.push(Series::new((*name).into(), values).into());
    }

    let outgoing_series = deduped.column(OUTGOING_FOLLOWED_COLUMN)?;
    let referring_series = deduped.column(REFERRING_FOLLOWED_COLUMN)?;
    let mut ratios: Vec<Option<i64>> = Vec::with_capacity(match_count);
    for link_row in &joined_rows {
        let ratio = link_row.and_then(|idx| {
            compute_ratio(
                outgoing_series.get(idx).unwrap_or(AnyValue::Null),
                referring_series.get(idx).unwrap_or(AnyValue::Null),
            )
        });
        ratios.push(ratio);
    }
    columns.push(Series::new(options.ratio_column.as_str().into(), ratios).into());

    info!(
        match_rows = match_count,
        link_rows = links.height(),
        deduped_link_rows = deduped.height(),
        matched_rows = matched,
        unmatched_rows = match_count - matched,
        "reconciliation complete"
    );

    Ok(DataFrame::new(columns)?)
}

fn cell_text(value: AnyValue<'_>) -> Option<String> {
    if matches!(value, AnyValue::Null) {
        None
    } else {
        Some(trustflow_ingest::any_to_string(value))
    }
}
