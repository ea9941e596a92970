use thiserror::Error;

/// An export is missing required columns.
///
/// Carries the complete list of absent column names so the caller can fix
/// the input in a single pass. Raised before any row is processed; there is
/// no partial result once this fires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{export} export is missing expected columns: {}", .missing.join(", "))]
pub struct SchemaError {
    /// Which export failed validation ("metrics" or "links").
    pub export: String,
    /// Every required column absent from the table, in schema order.
    pub missing: Vec<String>,
}

impl SchemaError {
    pub fn new(export: impl Into<String>, missing: Vec<String>) -> Self {
        Self {
            export: export.into(),
            missing,
        }
    }
}
