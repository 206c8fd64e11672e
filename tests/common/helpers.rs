// Test helper functions

use verselink::core::config::Config;
use verselink::core::types::{PairingKey, VersePairing};
use verselink::VerseEngine;

/// Engine over `corpus` with the given configuration
#[allow(dead_code)]
pub fn engine_with(corpus: &str, config: Config) -> VerseEngine {
    let mut engine = VerseEngine::new(config);
    engine.load_str(corpus);
    engine
}

/// Engine over the sample corpus with default configuration
#[allow(dead_code)]
pub fn sample_engine() -> VerseEngine {
    engine_with(crate::common::SAMPLE_CORPUS, Config::default())
}

#[allow(dead_code)]
pub fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Pairing keys in output order
#[allow(dead_code)]
pub fn pairing_keys(pairings: &[VersePairing]) -> Vec<PairingKey> {
    pairings.iter().map(VersePairing::key).collect()
}

/// Consolidated labels of one pairing, falling back to its own label
#[allow(dead_code)]
pub fn labels(pairing: &VersePairing) -> Vec<String> {
    pairing
        .all_term_pairs
        .clone()
        .unwrap_or_else(|| vec![pairing.label()])
}
