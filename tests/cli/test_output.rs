//! Tests for CLI output helpers

use crate::common::sample_engine;
use verselink::cli::output::{describe_proximity, highlight_with, pairing_references};
use verselink::core::pairing::RequestToken;
use verselink::core::types::SearchFilters;

#[test]
fn test_highlight_search_result() {
    let engine = sample_engine();
    let results = engine
        .search(&["light", "darkness"], &SearchFilters::books(["John"]))
        .unwrap();
    assert_eq!(results.len(), 1);

    let rendered = highlight_with(&results[0].verse.text, &results[0].matches, |s| {
        format!("<{s}>")
    });
    assert_eq!(
        rendered,
        "And the <light> shineth in <darkness>; and the <darkness> comprehended it not."
    );
}

#[test]
fn test_highlight_overlapping_terms() {
    let engine = sample_engine();
    // "love" and "loveth" both cover the start of "loveth"
    let results = engine
        .search(&["love", "loveth"], &SearchFilters::books(["1 John"]))
        .unwrap();

    let rendered = highlight_with(&results[0].verse.text, &results[0].matches, |s| {
        format!("[{s}]")
    });
    assert_eq!(
        rendered,
        "He that [loveth] not knoweth not God; for God is [love]."
    );
}

#[tokio::test]
async fn test_pairing_references() {
    let engine = sample_engine();
    let outcome = engine
        .pair_terms(&["spirit", "light"], &SearchFilters::none(), RequestToken::detached())
        .await
        .unwrap();

    let first = &outcome.pairings[0];
    assert_eq!(pairing_references(first), "Genesis 1:2 / Genesis 1:3");
    assert_eq!(describe_proximity(first.proximity), "adjacent");
}
