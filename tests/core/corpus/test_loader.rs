// Integration tests for corpus loading

use crate::common::{sample_engine, TempCorpus, SAMPLE_CORPUS};
use verselink::core::corpus::CorpusLoader;
use verselink::core::types::Testament;
use verselink::{VerseEngine, VerseError};

#[test]
fn test_sample_positions_are_dense() {
    let corpus = CorpusLoader::new().parse(SAMPLE_CORPUS);

    assert_eq!(corpus.len(), 12);
    for (i, verse) in corpus.iter().enumerate() {
        assert_eq!(verse.position, i, "position of {}", verse.reference);
    }
}

#[test]
fn test_sample_skip_counts() {
    let (verses, stats) = CorpusLoader::new().parse_with_stats(SAMPLE_CORPUS);

    assert_eq!(verses.len(), 12);
    assert_eq!(stats.blank, 1);
    assert_eq!(stats.headers, 3);
    assert_eq!(stats.malformed, 1);
}

#[test]
fn test_references_and_testaments() {
    let corpus = CorpusLoader::new().parse(SAMPLE_CORPUS);
    let get = |pos: usize| corpus.get(pos).expect("verse exists");

    assert_eq!(get(0).reference, "Genesis 1:1");
    assert_eq!(get(6).reference, "Psalms 119:105");
    assert_eq!(get(10).reference, "1 Corinthians 13:13");
    assert_eq!(get(10).book, "1 Corinthians");

    assert_eq!(get(0).testament, Testament::Old);
    assert_eq!(get(5).testament, Testament::Old);
    assert_eq!(get(7).testament, Testament::New);
    assert_eq!(get(11).testament, Testament::New);
}

#[test]
fn test_load_file_stats() {
    let file = TempCorpus::sample();
    let mut engine = VerseEngine::default();
    let stats = engine.load_file(file.path()).expect("Load failed");

    assert!(engine.is_ready());
    assert_eq!(stats.verses, 12);
    assert_eq!(stats.books, 5);
    assert!(stats.distinct_words > 50);
}

#[test]
fn test_unreadable_corpus_is_surfaced() {
    let mut engine = VerseEngine::default();
    let err = engine
        .load_file("/nonexistent/dir/kjv.txt")
        .expect_err("Missing file must fail");

    assert!(matches!(err, VerseError::CorpusUnavailable(_)));
    assert!(!err.is_not_ready());
    assert!(!engine.is_ready());
}

#[test]
fn test_stats_match_loaded_corpus() {
    let engine = sample_engine();
    let stats = engine.stats().expect("Engine is loaded");
    assert_eq!(stats.verses, 12);
}
