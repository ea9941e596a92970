//! Tests for canonical domain derivation.

use polars::prelude::AnyValue;
use trustflow_core::{normalize_cell_domain, normalize_domain};

#[test]
fn strips_scheme_www_and_path() {
    assert_eq!(
        normalize_domain("HTTPS://WWW.Example.com/path"),
        Some("example.com".to_string())
    );
    assert_eq!(
        normalize_domain("http://example.com/a/b?q=1#frag"),
        Some("example.com".to_string())
    );
    assert_eq!(
        normalize_domain("www.example.com"),
        Some("example.com".to_string())
    );
}

#[test]
fn agrees_with_bare_domain_form() {
    assert_eq!(
        normalize_domain("HTTPS://WWW.Example.com/path"),
        normalize_domain("example.com")
    );
}

#[test]
fn is_idempotent() {
    let samples = [
        "HTTPS://WWW.Example.com/path",
        "  example.com.  ",
        "www.sub.domain.co.uk/page",
        "skiresort.com",
    ];
    for raw in samples {
        let once = normalize_domain(raw);
        let twice = normalize_domain(once.as_deref().unwrap_or(""));
        assert_eq!(once, twice, "normalize must be a no-op on {raw:?}");
    }
}

#[test]
fn empty_inputs_yield_none() {
    assert_eq!(normalize_domain(""), None);
    assert_eq!(normalize_domain("   "), None);
    assert_eq!(normalize_domain("https://"), None);
    assert_eq!(normalize_domain("http://www."), None);
    assert_eq!(normalize_domain("..."), None);
}

#[test]
fn strips_trailing_dots_and_whitespace() {
    assert_eq!(
        normalize_domain("example.com."),
        Some("example.com".to_string())
    );
    assert_eq!(
        normalize_domain("  Example.COM.  "),
        Some("example.com".to_string())
    );
}

#[test]
fn only_leading_www_label_is_stripped() {
    assert_eq!(
        normalize_domain("wwwexample.com"),
        Some("wwwexample.com".to_string())
    );
    assert_eq!(
        normalize_domain("sub.www.example.com"),
        Some("sub.www.example.com".to_string())
    );
}

#[test]
fn cell_entry_point_handles_null_and_non_strings() {
    assert_eq!(normalize_cell_domain(AnyValue::Null), None);
    assert_eq!(normalize_cell_domain(AnyValue::String("  ")), None);
    assert_eq!(normalize_cell_domain(AnyValue::Int64(42)), Some("42".to_string()));
    assert_eq!(
        normalize_cell_domain(AnyValue::String("https://www.Example.com/x")),
        Some("example.com".to_string())
    );
}
