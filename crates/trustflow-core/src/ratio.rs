//! Null-safe derived ratio.

use polars::prelude::AnyValue;

use trustflow_ingest::any_to_f64;

/// Ceiling of `numerator / denominator`, or `None` when either operand
/// fails numeric coercion, the denominator is zero, or the quotient is not
/// finite. Division by zero and non-numeric cells are expected upstream
/// conditions, not errors.
pub fn compute_ratio(numerator: AnyValue<'_>, denominator: AnyValue<'_>) -> Option<i64> {
    let numerator = any_to_f64(numerator)?;
    let denominator = any_to_f64(denominator)?;
    if denominator == 0.0 {
        return None;
    }
    let ratio = numerator / denominator;
    if !ratio.is_finite() {
        return None;
    }
    Some(ratio.ceil() as i64)
}
