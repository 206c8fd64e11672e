//! Tests for the info CLI command

use crate::common::sample_engine;
use verselink::cli::commands::info::{build_info, execute, InfoArgs};
use verselink::cli::OutputFormat;
use verselink::VerseEngine;

#[test]
fn test_info_reports_stats() {
    let engine = sample_engine();
    let info = build_info(&InfoArgs::default(), &engine).unwrap();

    assert_eq!(info.name, "verselink");
    assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(info.stats.verses, 12);
    assert_eq!(info.stats.books, 5);
    assert!(info.limits.is_none());
}

#[test]
fn test_info_detailed_limits() {
    let engine = sample_engine();
    let info = build_info(&InfoArgs { detailed: true }, &engine).unwrap();

    let limits = info.limits.expect("detailed info has limits");
    assert_eq!(limits.max_search_terms, 8);
    assert_eq!(limits.max_total_pairings, 10_000);
    assert_eq!(limits.max_proximity, 100);
}

#[test]
fn test_info_execute() {
    let engine = sample_engine();
    assert!(execute(InfoArgs::default(), &engine, OutputFormat::Human).is_ok());
    assert!(execute(InfoArgs { detailed: true }, &engine, OutputFormat::Json).is_ok());
}

#[test]
fn test_info_requires_corpus() {
    let engine = VerseEngine::default();
    let err = build_info(&InfoArgs::default(), &engine).unwrap_err();
    assert!(err.is_not_ready());
}
