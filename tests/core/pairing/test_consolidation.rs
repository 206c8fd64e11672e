// Integration tests for pairing consolidation

use crate::common::{labels, pairing_keys, sample_engine};
use std::collections::HashSet;
use verselink::core::pairing::RequestToken;
use verselink::core::types::{PairingKey, SearchFilters, VersePairing};

fn label_set(pairing: &VersePairing) -> HashSet<String> {
    labels(pairing).into_iter().collect()
}

fn find(pairings: &[VersePairing], key: PairingKey) -> &VersePairing {
    pairings
        .iter()
        .find(|p| p.key() == key)
        .unwrap_or_else(|| panic!("no pairing with key {key}"))
}

#[tokio::test]
async fn test_one_pairing_per_key_with_all_labels() {
    let engine = sample_engine();
    let outcome = engine
        .pair_terms(
            &["light", "darkness", "god"],
            &SearchFilters::none(),
            RequestToken::detached(),
        )
        .await
        .unwrap();

    let keys = pairing_keys(&outcome.pairings);
    let unique: HashSet<_> = keys.iter().collect();
    assert_eq!(unique.len(), keys.len());

    // Genesis 1:4 holds all three words
    let gen_1_4 = find(&outcome.pairings, PairingKey::Same(3));
    let expected: HashSet<String> = ["darkness ↔ light", "darkness ↔ god", "god ↔ light"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(label_set(gen_1_4), expected);
}

#[tokio::test]
async fn test_every_pairing_lists_its_own_label() {
    let engine = sample_engine();
    let outcome = engine
        .pair_terms(
            &["light", "darkness", "god", "beginning"],
            &SearchFilters::none(),
            RequestToken::detached(),
        )
        .await
        .unwrap();

    for pairing in &outcome.pairings {
        let all = pairing.all_term_pairs.as_ref().expect("consolidated");
        assert!(!all.is_empty());
        assert!(all.contains(&pairing.label()));
        let unique: HashSet<&String> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }
}

#[tokio::test]
async fn test_between_groups_labels_are_cross_group() {
    let engine = sample_engine();
    let outcome = engine
        .pair_groups(
            &["light"],
            &["darkness", "god"],
            &SearchFilters::none(),
            RequestToken::detached(),
        )
        .await
        .unwrap();

    assert!(!outcome.pairings.is_empty());
    for pairing in &outcome.pairings {
        assert!(pairing.is_between_groups);
        for label in labels(pairing) {
            assert!(label.contains("light"), "{label} is not cross-group");
        }
    }

    let gen_1_4 = find(&outcome.pairings, PairingKey::Same(3));
    let expected: HashSet<String> = ["darkness ↔ light", "god ↔ light"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(label_set(gen_1_4), expected);
}

#[tokio::test]
async fn test_consolidated_proximity_matches_key() {
    let engine = sample_engine();
    let outcome = engine
        .pair_terms(&["god", "light"], &SearchFilters::none(), RequestToken::detached())
        .await
        .unwrap();

    for pairing in &outcome.pairings {
        match pairing.key() {
            PairingKey::Same(_) => assert_eq!(pairing.proximity, 0),
            PairingKey::Span(a, b) => assert_eq!(pairing.proximity, b - a),
        }
    }
}
