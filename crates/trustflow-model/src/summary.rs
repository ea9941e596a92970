use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Machine-readable summary of one pipeline run.
///
/// Written next to the merged output when the caller asks for it, so batch
/// jobs can inspect match rates without re-parsing the CSV.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Topic substring the extraction matched against.
    pub query: String,
    /// Whether the substring match was case sensitive.
    pub case_sensitive: bool,
    /// Rows in the metrics export.
    pub metrics_rows: usize,
    /// Long-form rows produced by extraction.
    pub match_rows: usize,
    /// Rows in the link export before deduplication.
    pub link_rows: usize,
    /// Link rows surviving domain deduplication.
    pub deduped_link_rows: usize,
    /// Output rows that found a link-side partner.
    pub matched_rows: usize,
    /// Output rows left with null link metrics.
    pub unmatched_rows: usize,
    /// Where the merged CSV was written, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}
