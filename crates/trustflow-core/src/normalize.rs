//! Canonical domain keys for join reconciliation.

use polars::prelude::AnyValue;

use trustflow_ingest::any_to_string;

/// Canonicalize a raw URL/domain string into a comparable domain key.
///
/// Trims surrounding whitespace, lowercases, strips a leading `http://` or
/// `https://` scheme and a leading `www.` label, truncates at the first
/// `/`, and strips trailing dots and whitespace. Returns `None` when
/// nothing is left. Idempotent: re-normalizing an already-normalized value
/// is a no-op.
pub fn normalize_domain(raw: &str) -> Option<String> {
    let mut value = raw.trim().to_lowercase();
    if let Some(rest) = value.strip_prefix("http://") {
        value = rest.to_string();
    } else if let Some(rest) = value.strip_prefix("https://") {
        value = rest.to_string();
    }
    if let Some(rest) = value.strip_prefix("www.") {
        value = rest.to_string();
    }
    if let Some(pos) = value.find('/') {
        value.truncate(pos);
    }
    let trimmed = value.trim_end_matches(|c: char| c == '.' || c.is_whitespace());
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Canonicalize a frame cell: nulls become `None`, non-string values are
/// rendered to text first. There is no failure mode.
pub fn normalize_cell_domain(value: AnyValue<'_>) -> Option<String> {
    normalize_domain(&any_to_string(value))
}
