//! Column layout of the two supported exports.
//!
//! Both exports use a rigid, position-free contract: columns are required
//! by exact name, and the topic/value pairs of the metrics export form a
//! fixed-size ordered list. The descriptors here are built once and checked
//! at the entry of extraction/reconciliation rather than probed ad hoc.

/// Identifier column of the metrics export (a URL or domain per row).
pub const SUBJECT_COLUMN: &str = "Item";

/// Number of repeated topic/value column pairs in the metrics export.
pub const TOPIC_PAIR_COUNT: usize = 10;

/// Topic column of the long-form output.
pub const TOPIC_OUTPUT_COLUMN: &str = "TopicalTrustFlow_Topic";

/// Value column of the long-form output.
pub const VALUE_OUTPUT_COLUMN: &str = "TopicalTrustFlow_Value";

/// Originating pair index column of the long-form output.
pub const TOPIC_INDEX_COLUMN: &str = "Topic_Index";

/// Identifier column of the link export.
pub const TARGET_COLUMN: &str = "Target";

/// Metric columns required of the link export, by exact name.
pub const LINK_METRIC_COLUMNS: &[&str] = &[
    "External Backlinks",
    "Referring Domains",
    "Ref. domains Followed",
    "Outgoing domains Followed",
    "Trust Flow",
    "Citation Flow",
];

/// Denominator of the derived followed-link ratio.
pub const REFERRING_FOLLOWED_COLUMN: &str = "Ref. domains Followed";

/// Numerator of the derived followed-link ratio.
pub const OUTGOING_FOLLOWED_COLUMN: &str = "Outgoing domains Followed";

/// One topic/value column pair of the metrics export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicPairColumns {
    /// Pair index, 0-based.
    pub index: usize,
    /// Topic column name, e.g. `TopicalTrustFlow_Topic_3`.
    pub topic: String,
    /// Paired value column name, e.g. `TopicalTrustFlow_Value_3`.
    pub value: String,
}

/// The ordered list of expected topic/value pair descriptors.
///
/// Enumeration order is the extraction order: pair 0 first, pair 9 last.
pub fn topic_pair_columns() -> Vec<TopicPairColumns> {
    (0..TOPIC_PAIR_COUNT)
        .map(|index| TopicPairColumns {
            index,
            topic: format!("TopicalTrustFlow_Topic_{index}"),
            value: format!("TopicalTrustFlow_Value_{index}"),
        })
        .collect()
}

/// Column names of the merged output, in order: the long-form match columns,
/// every link metric column, then the derived ratio column.
pub fn merged_output_columns(ratio_column: &str) -> Vec<String> {
    let mut columns = vec![
        SUBJECT_COLUMN.to_string(),
        TOPIC_OUTPUT_COLUMN.to_string(),
        VALUE_OUTPUT_COLUMN.to_string(),
        TOPIC_INDEX_COLUMN.to_string(),
    ];
    columns.extend(LINK_METRIC_COLUMNS.iter().map(|name| (*name).to_string()));
    columns.push(ratio_column.to_string());
    columns
}
