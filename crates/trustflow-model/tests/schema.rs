//! Tests for schema descriptors and the schema violation error.

use trustflow_model::{
    LINK_METRIC_COLUMNS, SUBJECT_COLUMN, SchemaError, TOPIC_PAIR_COUNT, merged_output_columns,
    topic_pair_columns,
};

#[test]
fn topic_pairs_are_ordered_and_complete() {
    let pairs = topic_pair_columns();
    assert_eq!(pairs.len(), TOPIC_PAIR_COUNT);
    for (i, pair) in pairs.iter().enumerate() {
        assert_eq!(pair.index, i);
        assert_eq!(pair.topic, format!("TopicalTrustFlow_Topic_{i}"));
        assert_eq!(pair.value, format!("TopicalTrustFlow_Value_{i}"));
    }
}

#[test]
fn merged_columns_are_deterministic() {
    let columns = merged_output_columns("Followed Link Ratio");
    assert_eq!(columns[0], SUBJECT_COLUMN);
    assert_eq!(columns[1], "TopicalTrustFlow_Topic");
    assert_eq!(columns[2], "TopicalTrustFlow_Value");
    assert_eq!(columns[3], "Topic_Index");
    assert_eq!(&columns[4..4 + LINK_METRIC_COLUMNS.len()], LINK_METRIC_COLUMNS);
    assert_eq!(columns.last().map(String::as_str), Some("Followed Link Ratio"));
}

#[test]
fn schema_error_lists_every_missing_column() {
    let error = SchemaError::new(
        "metrics",
        vec![
            "TopicalTrustFlow_Topic_7".to_string(),
            "TopicalTrustFlow_Value_7".to_string(),
        ],
    );
    let message = error.to_string();
    assert_eq!(
        message,
        "metrics export is missing expected columns: TopicalTrustFlow_Topic_7, TopicalTrustFlow_Value_7"
    );
}

#[test]
fn run_summary_serializes_without_output_when_absent() {
    let summary = trustflow_model::RunSummary {
        query: "Sports".to_string(),
        ..Default::default()
    };
    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"query\":\"Sports\""));
    assert!(!json.contains("\"output\""));
}
