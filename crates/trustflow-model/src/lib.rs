//! Data model for the trustflow reconciliation pipeline.
//!
//! Defines the expected column layout of the two supported exports
//! (topical trust flow metrics and per-target link metrics), the
//! schema violation error, and the serializable run summary.

pub mod error;
pub mod schema;
pub mod summary;

pub use error::SchemaError;
pub use schema::{
    LINK_METRIC_COLUMNS, OUTGOING_FOLLOWED_COLUMN, REFERRING_FOLLOWED_COLUMN, SUBJECT_COLUMN,
    TARGET_COLUMN, TOPIC_INDEX_COLUMN, TOPIC_OUTPUT_COLUMN, TOPIC_PAIR_COUNT, TopicPairColumns,
    VALUE_OUTPUT_COLUMN, merged_output_columns, topic_pair_columns,
};
pub use summary::RunSummary;
