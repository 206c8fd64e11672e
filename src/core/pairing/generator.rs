//! Co-occurrence pairing generation.
//!
//! For a term pair, every verse containing both terms becomes a
//! same-verse pairing. Two distinct verses within `max_proximity`
//! positions of each other, one per term, become a nearby pairing
//! unless either verse is already a same-verse hit for the pair.
//! Enumeration order is fixed (same-verse first, then term1-verse
//! major, term2-verse minor) so that cap truncation always keeps the
//! same prefix.

use crate::core::config::PairingConfig;
use crate::core::pairing::records::TermRecords;
use crate::core::terms::TermNormalizer;
use crate::core::types::{term_pair_label, Progress, Verse, VersePairing};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::Arc;

/// Size guards for one pairing run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairingLimits {
    pub max_total_pairings: usize,
    pub max_pairings_per_term_pair: usize,
    pub max_proximity: usize,
}

impl From<&PairingConfig> for PairingLimits {
    fn from(config: &PairingConfig) -> Self {
        Self {
            max_total_pairings: config.max_total_pairings,
            max_pairings_per_term_pair: config.max_pairings_per_term_pair,
            max_proximity: config.max_proximity,
        }
    }
}

impl Default for PairingLimits {
    fn default() -> Self {
        Self::from(&PairingConfig::default())
    }
}

/// One candidate term pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermPair {
    pub term1: String,
    pub term2: String,
    pub between_groups: bool,
}

impl TermPair {
    pub fn label(&self) -> String {
        term_pair_label(&self.term1, &self.term2)
    }
}

/// Result of a pairing run
#[derive(Debug, Clone, Default, Serialize)]
pub struct PairingOutcome {
    pub pairings: Vec<VersePairing>,

    /// A per-pair or global cap cut enumeration short
    pub truncated: bool,

    /// The run was abandoned because its request was superseded or cancelled
    pub superseded: bool,

    /// Progress at the point the run stopped
    pub progress: Progress,
}

/// Builds term pairs and enumerates their pairings
#[derive(Debug, Clone)]
pub struct PairingGenerator {
    limits: PairingLimits,
    normalizer: TermNormalizer,
}

impl PairingGenerator {
    pub fn new(limits: PairingLimits, normalizer: TermNormalizer) -> Self {
        Self { limits, normalizer }
    }

    pub fn limits(&self) -> &PairingLimits {
        &self.limits
    }

    pub fn normalizer(&self) -> &TermNormalizer {
        &self.normalizer
    }

    /// All unordered pairs from one term set, minus same-word pairs
    pub fn within_group_pairs(&self, terms: &[String]) -> Vec<TermPair> {
        let mut pairs = Vec::new();
        for (i, a) in terms.iter().enumerate() {
            for b in &terms[i + 1..] {
                if self.normalizer.same_word(a, b) {
                    tracing::debug!("Skipping same-word pair {} / {}", a, b);
                    continue;
                }
                pairs.push(TermPair {
                    term1: a.clone(),
                    term2: b.clone(),
                    between_groups: false,
                });
            }
        }
        pairs
    }

    /// One term from each group, minus same-word pairs and repeated pairs
    pub fn between_groups_pairs(&self, group1: &[String], group2: &[String]) -> Vec<TermPair> {
        let mut seen = HashSet::new();
        let mut pairs = Vec::new();
        for a in group1 {
            for b in group2 {
                if self.normalizer.same_word(a, b) {
                    tracing::debug!("Skipping same-word pair {} / {}", a, b);
                    continue;
                }
                if !seen.insert(term_pair_label(a, b)) {
                    continue;
                }
                pairs.push(TermPair {
                    term1: a.clone(),
                    term2: b.clone(),
                    between_groups: true,
                });
            }
        }
        pairs
    }

    /// Pairings for one term pair, capped at the per-pair limit
    pub fn find_pairings_for_terms(
        &self,
        term1: &str,
        term2: &str,
        verses1: &[Arc<Verse>],
        verses2: &[Arc<Verse>],
        between_groups: bool,
    ) -> Vec<VersePairing> {
        enumerate_pairings(
            term1,
            term2,
            verses1,
            verses2,
            between_groups,
            self.limits.max_proximity,
            self.limits.max_pairings_per_term_pair,
        )
        .0
    }

    /// Pairings for `pair`, stopping at `cap`; the flag reports whether the cap was hit
    pub(crate) fn pairings_for(
        &self,
        pair: &TermPair,
        records: &TermRecords,
        cap: usize,
    ) -> (Vec<VersePairing>, bool) {
        enumerate_pairings(
            &pair.term1,
            &pair.term2,
            records.verses(&pair.term1),
            records.verses(&pair.term2),
            pair.between_groups,
            self.limits.max_proximity,
            cap.min(self.limits.max_pairings_per_term_pair),
        )
    }

    /// Within-group generation in natural term-pair order
    pub fn generate_all_pairings(&self, terms: &[String], records: &TermRecords) -> PairingOutcome {
        self.run_in_order(&self.within_group_pairs(terms), records)
    }

    /// Between-groups generation in natural term-pair order
    pub fn generate_between_groups_pairings(
        &self,
        group1: &[String],
        group2: &[String],
        records: &TermRecords,
    ) -> PairingOutcome {
        self.run_in_order(&self.between_groups_pairs(group1, group2), records)
    }

    fn run_in_order(&self, pairs: &[TermPair], records: &TermRecords) -> PairingOutcome {
        let max_total = self.limits.max_total_pairings;
        let mut outcome = PairingOutcome::default();
        let mut processed = 0;

        for pair in pairs {
            let remaining = max_total.saturating_sub(outcome.pairings.len());
            let (found, capped) = self.pairings_for(pair, records, remaining);
            outcome.truncated |= capped;
            outcome.pairings.extend(found);
            processed += 1;
            if capped && outcome.pairings.len() >= max_total {
                break;
            }
        }

        outcome.progress = Progress {
            processed,
            total: pairs.len(),
            pairings: outcome.pairings.len(),
        };
        if outcome.truncated {
            tracing::warn!(
                "Pairing truncated at {} pairings ({}/{} term pairs processed)",
                outcome.pairings.len(),
                processed,
                pairs.len()
            );
        }
        outcome
    }
}

fn sorted_by_position(verses: &[Arc<Verse>]) -> Cow<'_, [Arc<Verse>]> {
    if verses.windows(2).all(|w| w[0].position <= w[1].position) {
        Cow::Borrowed(verses)
    } else {
        let mut owned = verses.to_vec();
        owned.sort_by_key(|v| v.position);
        Cow::Owned(owned)
    }
}

fn enumerate_pairings(
    term1: &str,
    term2: &str,
    verses1: &[Arc<Verse>],
    verses2: &[Arc<Verse>],
    between_groups: bool,
    max_proximity: usize,
    cap: usize,
) -> (Vec<VersePairing>, bool) {
    // One pairing past the cap tells a real cut from an exact fit
    let mut out = scan_pairings(
        term1,
        term2,
        verses1,
        verses2,
        between_groups,
        max_proximity,
        cap.saturating_add(1),
    );
    let capped = out.len() > cap;
    out.truncate(cap);
    (out, capped)
}

/// Same-verse pairings first, then nearby pairings record1-major; stops at `limit`
fn scan_pairings(
    term1: &str,
    term2: &str,
    verses1: &[Arc<Verse>],
    verses2: &[Arc<Verse>],
    between_groups: bool,
    max_proximity: usize,
    limit: usize,
) -> Vec<VersePairing> {
    let mut out = Vec::new();
    let verses1 = sorted_by_position(verses1);
    let verses2 = sorted_by_position(verses2);

    let in_first: HashSet<usize> = verses1.iter().map(|v| v.position).collect();
    let in_second: HashSet<usize> = verses2.iter().map(|v| v.position).collect();
    let mut seen_same = HashSet::new();
    for verse in verses1.iter() {
        if in_second.contains(&verse.position) && seen_same.insert(verse.position) {
            out.push(VersePairing::same_verse(
                Arc::clone(verse),
                term1,
                term2,
                between_groups,
            ));
            if out.len() >= limit {
                return out;
            }
        }
    }

    let mut seen_spans = HashSet::new();
    for a in verses1.iter() {
        if in_second.contains(&a.position) {
            continue;
        }
        let lo = a.position.saturating_sub(max_proximity);
        let hi = a.position.saturating_add(max_proximity);
        let start = verses2.partition_point(|v| v.position < lo);

        for b in verses2[start..].iter() {
            if b.position > hi {
                break;
            }
            if in_first.contains(&b.position) {
                continue;
            }
            let span = (a.position.min(b.position), a.position.max(b.position));
            if !seen_spans.insert(span) {
                continue;
            }
            out.push(VersePairing::nearby(
                Arc::clone(a),
                Arc::clone(b),
                term1,
                term2,
                between_groups,
            ));
            if out.len() >= limit {
                return out;
            }
        }
    }

    out
}

/// Scheduling priority of a term pair from its two verse counts.
///
/// `min(n1, n2) * max(1, 100 - |n1 - n2|)`: favors pairs whose terms are
/// both reasonably frequent and similarly frequent.
pub fn priority(n1: usize, n2: usize) -> usize {
    let closeness = 100usize.saturating_sub(n1.abs_diff(n2)).max(1);
    n1.min(n2) * closeness
}
