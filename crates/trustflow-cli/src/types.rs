use std::path::PathBuf;

use polars::prelude::DataFrame;

use trustflow_model::RunSummary;

/// Result of the `filter` command.
pub struct FilterResult {
    pub query: String,
    pub case_sensitive: bool,
    pub input_rows: usize,
    pub matches: DataFrame,
    /// Where the long-form CSV was written, if it was.
    pub output: Option<PathBuf>,
}

impl FilterResult {
    pub fn match_rows(&self) -> usize {
        self.matches.height()
    }
}

/// Result of the `reconcile` command.
pub struct ReconcileResult {
    pub summary: RunSummary,
    pub merged: DataFrame,
    /// Where the JSON summary was written, if it was.
    pub summary_path: Option<PathBuf>,
}
