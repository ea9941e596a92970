//! Long-form extraction of topical trust flow pairs.

use anyhow::Result;
use polars::prelude::{AnyValue, Column, DataFrame, NamedFrom, Series};
use tracing::{debug, info};

use trustflow_ingest::any_to_string;
use trustflow_model::{
    SUBJECT_COLUMN, SchemaError, TOPIC_INDEX_COLUMN, TOPIC_OUTPUT_COLUMN, VALUE_OUTPUT_COLUMN,
    topic_pair_columns,
};

/// Options for topic extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Compare the query literally instead of case-insensitively.
    pub case_sensitive: bool,
}

/// Flatten the wide topic/value pairs into a filtered long-form frame.
///
/// Scans the ten expected pairs in ascending index order and emits one row
/// per (subject, matching pair): subject, matched topic, paired value, and
/// the originating pair index. Within a pair index the source row order is
/// preserved. Null topics never match. Zero matches yields an empty frame,
/// not an error.
///
/// # Errors
///
/// Fails with a [`SchemaError`] naming every missing column when the frame
/// does not carry the subject column and all ten pairs.
pub fn extract_topic_matches(
    metrics: &DataFrame,
    query: &str,
    options: &ExtractOptions,
) -> Result<DataFrame> {
    let pairs = topic_pair_columns();
    let mut missing = Vec::new();
    if metrics.column(SUBJECT_COLUMN).is_err() {
        missing.push(SUBJECT_COLUMN.to_string());
    }
    for pair in &pairs {
        if metrics.column(&pair.topic).is_err() {
            missing.push(pair.topic.clone());
        }
        if metrics.column(&pair.value).is_err() {
            missing.push(pair.value.clone());
        }
    }
    if !missing.is_empty() {
        return Err(SchemaError::new("metrics", missing).into());
    }

    let subject_series = metrics.column(SUBJECT_COLUMN)?;
    let row_count = metrics.height();
    let query_folded = query.to_lowercase();

    let mut subjects: Vec<Option<String>> = Vec::new();
    let mut topics: Vec<String> = Vec::new();
    let mut values: Vec<Option<String>> = Vec::new();
    let mut indexes: Vec<i64> = Vec::new();

    for pair in &pairs {
        let topic_series = metrics.column(&pair.topic)?;
        let value_series = metrics.column(&pair.value)?;
        let mut pair_matches = 0usize;
        for row in 0..row_count {
            let topic_cell = topic_series.get(row).unwrap_or(AnyValue::Null);
            if matches!(topic_cell, AnyValue::Null) {
                continue;
            }
            let topic = any_to_string(topic_cell);
            let matched = if options.case_sensitive {
                topic.contains(query)
            } else {
                topic.to_lowercase().contains(&query_folded)
            };
            if !matched {
                continue;
            }
            let subject = topic_row_text(subject_series.get(row).unwrap_or(AnyValue::Null));
            let value = topic_row_text(value_series.get(row).unwrap_or(AnyValue::Null));
            subjects.push(subject);
            topics.push(topic);
            values.push(value);
            indexes.push(pair.index as i64);
            pair_matches += 1;
        }
        if pair_matches > 0 {
            debug!(
                pair_index = pair.index,
                match_count = pair_matches,
                "topic pair matched"
            );
        }
    }

    info!(
        query = %query,
        case_sensitive = options.case_sensitive,
        input_rows = row_count,
        match_rows = topics.len(),
        "topic extraction complete"
    );

    let columns: Vec<Column> = vec![
        Series::new(SUBJECT_COLUMN.into(), subjects).into(),
        Series::new(TOPIC_OUTPUT_COLUMN.into(), topics).into(),
        Series::new(VALUE_OUTPUT_COLUMN.into(), values).into(),
        Series::new(TOPIC_INDEX_COLUMN.into(), indexes).into(),
    ];
    Ok(DataFrame::new(columns)?)
}

/// Cell text preserved as nullable: nulls stay null instead of becoming "".
fn topic_row_text(value: AnyValue<'_>) -> Option<String> {
    if matches!(value, AnyValue::Null) {
        None
    } else {
        Some(any_to_string(value))
    }
}
