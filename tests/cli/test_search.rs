//! Tests for the search CLI command

use crate::cli::test_helpers::search_args;
use crate::common::sample_engine;
use verselink::cli::commands::search::{build_output, execute};
use verselink::cli::OutputFormat;
use verselink::core::types::Testament;
use verselink::VerseEngine;

#[test]
fn test_search_output_counts() {
    let engine = sample_engine();
    let output = build_output(&search_args(&["light"]), &engine).unwrap();

    assert_eq!(output.total_results, 5);
    assert_eq!(output.results.len(), 5);
    assert_eq!(output.terms, vec!["light".to_string()]);
}

#[test]
fn test_search_limit_keeps_total() {
    let engine = sample_engine();
    let mut args = search_args(&["light"]);
    args.limit = Some(2);
    let output = build_output(&args, &engine).unwrap();

    assert_eq!(output.total_results, 5);
    assert_eq!(output.results.len(), 2);
    assert_eq!(output.results[0].verse.reference, "Genesis 1:3");
}

#[test]
fn test_search_testament_filter() {
    let engine = sample_engine();
    let mut args = search_args(&["beginning"]);
    args.filters.testament = Some(Testament::New);
    let output = build_output(&args, &engine).unwrap();

    assert_eq!(output.total_results, 1);
    assert_eq!(output.results[0].verse.reference, "John 1:1");
}

#[test]
fn test_search_json_serializes_verses() {
    let engine = sample_engine();
    let output = build_output(&search_args(&["charity"]), &engine).unwrap();
    let json = serde_json::to_value(&output).unwrap();

    assert_eq!(json["total_results"], 1);
    assert_eq!(json["results"][0]["verse"]["reference"], "1 Corinthians 13:13");
    assert_eq!(json["results"][0]["verse"]["testament"], "new");
    assert_eq!(json["results"][0]["matches"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_search_execute_formats() {
    let engine = sample_engine();
    assert!(execute(search_args(&["light"]), &engine, OutputFormat::Human).is_ok());
    assert!(execute(search_args(&["light"]), &engine, OutputFormat::Json).is_ok());
    assert!(execute(search_args(&["leviathan"]), &engine, OutputFormat::Human).is_ok());
}

#[test]
fn test_search_without_corpus_fails() {
    let engine = VerseEngine::default();
    let result = execute(search_args(&["light"]), &engine, OutputFormat::Human);
    assert!(result.is_err());
}

#[test]
fn test_search_reports_prepared_terms() {
    let engine = sample_engine();
    let output = build_output(&search_args(&["A", "Light", "light"]), &engine).unwrap();
    assert_eq!(output.terms, vec!["light".to_string()]);
    assert_eq!(output.total_results, 5);
}

#[test]
fn test_search_rejects_only_short_terms() {
    let engine = sample_engine();
    let err = build_output(&search_args(&["a", "I"]), &engine).unwrap_err();
    assert!(err.is_bad_request());
}
