// Integration tests for pairing generation

use crate::common::{engine_with, labels, pairing_keys, sample_engine, strings, GENESIS_1_2, SAMPLE_CORPUS};
use std::collections::HashSet;
use verselink::core::config::{Config, ExtraTermPolicy};
use verselink::core::pairing::{PairingGenerator, PairingLimits, RequestToken};
use verselink::core::terms::TermNormalizer;
use verselink::core::types::SearchFilters;

#[tokio::test]
async fn test_scenario_within_group_same_verse() {
    let engine = engine_with(GENESIS_1_2, Config::default());
    let outcome = engine
        .pair_terms(&["heaven", "earth"], &SearchFilters::none(), RequestToken::detached())
        .await
        .expect("Pairing failed");

    assert_eq!(outcome.pairings.len(), 1);
    let pairing = &outcome.pairings[0];
    assert_eq!(pairing.proximity, 0);
    assert_eq!(pairing.verses.len(), 1);
    assert_eq!(pairing.verses[0].reference, "Genesis 1:1");
    assert!(!pairing.is_between_groups);
    assert_eq!(labels(pairing), strings(&["earth ↔ heaven"]));
    assert!(!outcome.truncated);
}

#[tokio::test]
async fn test_scenario_between_groups() {
    let engine = engine_with(GENESIS_1_2, Config::default());

    let outcome = engine
        .pair_groups(&["heaven"], &["earth"], &SearchFilters::none(), RequestToken::detached())
        .await
        .unwrap();
    assert_eq!(outcome.pairings.len(), 1);
    assert_eq!(outcome.pairings[0].proximity, 0);
    assert!(outcome.pairings[0].is_between_groups);

    let same_term = engine
        .pair_groups(&["heaven"], &["heaven"], &SearchFilters::none(), RequestToken::detached())
        .await
        .unwrap();
    assert!(same_term.pairings.is_empty());
}

#[tokio::test]
async fn test_same_word_terms_never_paired() {
    let engine = sample_engine();
    let outcome = engine
        .pair_terms(&["love", "loved", "god"], &SearchFilters::none(), RequestToken::detached())
        .await
        .unwrap();

    assert!(!outcome.pairings.is_empty());
    for pairing in &outcome.pairings {
        let pair: HashSet<&str> = [pairing.term1.as_str(), pairing.term2.as_str()].into();
        assert_ne!(pair, HashSet::from(["love", "loved"]));
    }
}

#[tokio::test]
async fn test_only_variants_yield_nothing() {
    let engine = sample_engine();
    let outcome = engine
        .pair_terms(&["love", "loving", "loved"], &SearchFilters::none(), RequestToken::detached())
        .await
        .unwrap();
    assert!(outcome.pairings.is_empty());
    assert_eq!(outcome.progress.total, 0);
}

#[tokio::test]
async fn test_recovered_variant_labels_follow_policy() {
    let include = sample_engine()
        .pair_terms(&["love", "loved", "god"], &SearchFilters::none(), RequestToken::detached())
        .await
        .unwrap();
    assert!(include
        .pairings
        .iter()
        .any(|p| labels(p).contains(&"love ↔ loved".to_string())));

    let mut config = Config::default();
    config.pairing.extra_terms = ExtraTermPolicy::ExcludeSameWord;
    let exclude = engine_with(SAMPLE_CORPUS, config)
        .pair_terms(&["love", "loved", "god"], &SearchFilters::none(), RequestToken::detached())
        .await
        .unwrap();
    assert!(exclude
        .pairings
        .iter()
        .all(|p| !labels(p).contains(&"love ↔ loved".to_string())));
}

#[tokio::test]
async fn test_proximity_invariants() {
    let mut config = Config::default();
    config.pairing.max_proximity = 2;
    let engine = engine_with(SAMPLE_CORPUS, config);

    let outcome = engine
        .pair_terms(
            &["light", "darkness", "god", "word"],
            &SearchFilters::none(),
            RequestToken::detached(),
        )
        .await
        .unwrap();

    assert!(!outcome.pairings.is_empty());
    for pairing in &outcome.pairings {
        assert!(pairing.proximity <= 2);
        assert_eq!(pairing.proximity == 0, pairing.verses.len() == 1);
        assert!(pairing
            .verses
            .windows(2)
            .all(|w| w[0].position < w[1].position));
        if let [a, b] = pairing.verses.as_slice() {
            assert_eq!(pairing.proximity, b.position - a.position);
        }
    }

    let keys = pairing_keys(&outcome.pairings);
    let unique: HashSet<_> = keys.iter().collect();
    assert_eq!(unique.len(), keys.len());
}

#[tokio::test]
async fn test_zero_proximity_only_same_verse() {
    let mut config = Config::default();
    config.pairing.max_proximity = 0;
    let engine = engine_with(SAMPLE_CORPUS, config);

    let outcome = engine
        .pair_terms(&["light", "darkness"], &SearchFilters::none(), RequestToken::detached())
        .await
        .unwrap();
    let refs: Vec<&str> = outcome
        .pairings
        .iter()
        .map(|p| p.verses[0].reference.as_str())
        .collect();
    assert_eq!(refs, vec!["Genesis 1:4", "Genesis 1:5", "John 1:5"]);
}

#[tokio::test]
async fn test_global_cap_never_exceeded() {
    for cap in [1, 3, 10] {
        let mut config = Config::default();
        config.pairing.max_total_pairings = cap;
        let engine = engine_with(SAMPLE_CORPUS, config);

        let outcome = engine
            .pair_terms(
                &["light", "darkness", "god", "the"],
                &SearchFilters::none(),
                RequestToken::detached(),
            )
            .await
            .unwrap();

        assert!(outcome.pairings.len() <= cap, "cap {cap} exceeded");
        assert!(outcome.truncated);
        assert!(outcome.progress.pairings <= cap);
    }
}

#[tokio::test]
async fn test_generation_is_idempotent() {
    let engine = sample_engine();
    let terms = ["light", "darkness", "god", "beginning"];

    let first = engine
        .pair_terms(&terms, &SearchFilters::none(), RequestToken::detached())
        .await
        .unwrap();
    let second = engine
        .pair_terms(&terms, &SearchFilters::none(), RequestToken::detached())
        .await
        .unwrap();

    let summary = |o: &verselink::PairingOutcome| {
        o.pairings
            .iter()
            .map(|p| (p.key(), labels(p)))
            .collect::<Vec<_>>()
    };
    assert_eq!(summary(&first), summary(&second));
}

#[test]
fn test_per_pair_cap_keeps_prefix() {
    let engine = sample_engine();
    let terms = strings(&["god", "light"]);
    let records = engine.term_records(&terms, &SearchFilters::none()).unwrap();

    let full = PairingGenerator::new(PairingLimits::default(), TermNormalizer::default())
        .find_pairings_for_terms("god", "light", records.verses("god"), records.verses("light"), false);
    let capped = PairingGenerator::new(
        PairingLimits {
            max_pairings_per_term_pair: 4,
            ..PairingLimits::default()
        },
        TermNormalizer::default(),
    )
    .find_pairings_for_terms("god", "light", records.verses("god"), records.verses("light"), false);

    assert_eq!(capped.len(), 4);
    assert_eq!(pairing_keys(&capped), pairing_keys(&full[..4]));
    // Same-verse pairings come first
    let same_count = full.iter().take_while(|p| p.proximity == 0).count();
    assert!(full[same_count..].iter().all(|p| p.proximity > 0));
}

#[test]
fn test_between_groups_generation_tags_pairings() {
    let engine = sample_engine();
    let group1 = strings(&["light"]);
    let group2 = strings(&["darkness", "word"]);
    let mut all = group1.clone();
    all.extend(group2.iter().cloned());
    let records = engine.term_records(&all, &SearchFilters::none()).unwrap();

    let generator = PairingGenerator::new(PairingLimits::default(), TermNormalizer::default());
    let outcome = generator.generate_between_groups_pairings(&group1, &group2, &records);

    assert!(!outcome.pairings.is_empty());
    assert!(outcome.pairings.iter().all(|p| p.is_between_groups));
    assert!(outcome.pairings.iter().all(|p| p.term1 == "light"));
    assert_eq!(outcome.progress.total, 2);
    assert_eq!(outcome.progress.processed, 2);
}

#[tokio::test]
async fn test_exact_global_cap_is_not_truncated() {
    let mut config = Config::default();
    config.pairing.max_total_pairings = 1;
    let engine = engine_with(
        "Genesis 1:1 In the beginning God created the heaven and the earth.\n",
        config,
    );

    let outcome = engine
        .pair_terms(&["heaven", "earth"], &SearchFilters::none(), RequestToken::detached())
        .await
        .unwrap();

    assert_eq!(outcome.pairings.len(), 1);
    assert!(!outcome.truncated);
    assert_eq!(outcome.progress.processed, outcome.progress.total);
}
