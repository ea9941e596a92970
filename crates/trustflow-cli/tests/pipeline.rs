//! End-to-end pipeline tests over real CSV fixtures.

use std::fs;
use std::path::Path;

use polars::prelude::AnyValue;
use trustflow_cli::pipeline::{
    extract_stage, ingest_export, matched_row_count, output_stage, reconcile_stage,
};

/// Metrics export fixture: full header plus one row per (subject, pair
/// index, topic, value) entry, with every other pair left empty.
fn write_metrics_csv(path: &Path, rows: &[(&str, usize, &str, &str)]) {
    let mut header = vec!["Item".to_string()];
    for index in 0..10 {
        header.push(format!("TopicalTrustFlow_Topic_{index}"));
        header.push(format!("TopicalTrustFlow_Value_{index}"));
    }
    let mut contents = header.join(",");
    contents.push('\n');
    for (subject, pair_index, topic, value) in rows {
        let mut cells = vec![(*subject).to_string()];
        for index in 0..10 {
            if index == *pair_index {
                cells.push((*topic).to_string());
                cells.push((*value).to_string());
            } else {
                cells.push(String::new());
                cells.push(String::new());
            }
        }
        contents.push_str(&cells.join(","));
        contents.push('\n');
    }
    fs::write(path, contents).expect("write metrics fixture");
}

fn write_links_csv(path: &Path, rows: &[(&str, &str, &str)]) {
    let mut contents = String::from(
        "Target,External Backlinks,Referring Domains,Ref. domains Followed,\
         Outgoing domains Followed,Trust Flow,Citation Flow\n",
    );
    for (target, referring, outgoing) in rows {
        contents.push_str(&format!("{target},100,50,{referring},{outgoing},30,40\n"));
    }
    fs::write(path, contents).expect("write links fixture");
}

#[test]
fn filter_and_reconcile_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let metrics_path = dir.path().join("metrics.csv");
    let links_path = dir.path().join("links.csv");
    write_metrics_csv(
        &metrics_path,
        &[
            ("https://www.skiresort.com/page", 3, "Sports/Winter Sports/Skiing", "12"),
            ("unrelated.example", 5, "Arts/Music", "9"),
        ],
    );
    write_links_csv(&links_path, &[("skiresort.com", "20", "45")]);

    let metrics = ingest_export(&metrics_path, "metrics").unwrap();
    assert_eq!(metrics.height(), 2);

    let matches = extract_stage(&metrics, "Sports/Winter Sports", false).unwrap();
    assert_eq!(matches.height(), 1);
    assert_eq!(
        matches.column("Topic_Index").unwrap().get(0).unwrap(),
        AnyValue::Int64(3)
    );

    let links = ingest_export(&links_path, "links").unwrap();
    let merged = reconcile_stage(&matches, &links, None).unwrap();
    assert_eq!(merged.height(), 1);
    assert_eq!(matched_row_count(&merged), 1);
    assert_eq!(
        merged.column("Followed Link Ratio").unwrap().get(0).unwrap(),
        AnyValue::Int64(3)
    );

    let output_path = dir.path().join("merged.csv");
    output_stage(&output_path, &merged).unwrap();
    let written = fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Item,TopicalTrustFlow_Topic,TopicalTrustFlow_Value,Topic_Index"));
    assert!(lines[0].ends_with("Followed Link Ratio"));
    assert!(lines[1].contains("skiresort.com"));
    assert!(lines[1].ends_with(",3"));
}

#[test]
fn no_match_query_yields_empty_frames_not_errors() {
    let dir = tempfile::tempdir().unwrap();
    let metrics_path = dir.path().join("metrics.csv");
    write_metrics_csv(&metrics_path, &[("a.com", 0, "Arts/Music", "4")]);

    let metrics = ingest_export(&metrics_path, "metrics").unwrap();
    let matches = extract_stage(&metrics, "Nonexistent/Topic", false).unwrap();
    assert_eq!(matches.height(), 0);
}

#[test]
fn custom_ratio_column_flows_through() {
    let dir = tempfile::tempdir().unwrap();
    let metrics_path = dir.path().join("metrics.csv");
    let links_path = dir.path().join("links.csv");
    write_metrics_csv(&metrics_path, &[("a.com", 0, "Arts/Music", "4")]);
    write_links_csv(&links_path, &[("a.com", "4", "9")]);

    let metrics = ingest_export(&metrics_path, "metrics").unwrap();
    let matches = extract_stage(&metrics, "Arts", false).unwrap();
    let links = ingest_export(&links_path, "links").unwrap();
    let merged = reconcile_stage(&matches, &links, Some("Link Ratio")).unwrap();
    assert_eq!(
        merged.column("Link Ratio").unwrap().get(0).unwrap(),
        AnyValue::Int64(3)
    );
}
