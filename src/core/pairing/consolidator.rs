//! Merge pairings that resolve to the same verses.
//!
//! Pairings are grouped by [`PairingKey`]; each group becomes one
//! pairing whose `all_term_pairs` lists every term-pair label that hits
//! those verses, including terms recovered from the term records that
//! were never paired explicitly.

use crate::core::config::ExtraTermPolicy;
use crate::core::pairing::records::TermRecords;
use crate::core::terms::TermNormalizer;
use crate::core::types::{term_pair_label, PairingKey, VersePairing};
use std::collections::{HashMap, HashSet};

/// Which label pairs are valid for a consolidated pairing
#[derive(Debug, Clone, Copy)]
pub enum ConsolidationMode<'a> {
    /// Every unordered pair of the term union
    WithinGroup,
    /// Only pairs with one term from each group
    BetweenGroups {
        group1: &'a [String],
        group2: &'a [String],
    },
}

impl ConsolidationMode<'_> {
    fn allows(&self, a: &str, b: &str) -> bool {
        match self {
            ConsolidationMode::WithinGroup => true,
            ConsolidationMode::BetweenGroups { group1, group2 } => {
                let in1 = |t: &str| group1.iter().any(|g| g == t);
                let in2 = |t: &str| group2.iter().any(|g| g == t);
                (in1(a) && in2(b)) || (in2(a) && in1(b))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Consolidator {
    normalizer: TermNormalizer,
    policy: ExtraTermPolicy,
}

impl Consolidator {
    pub fn new(normalizer: TermNormalizer, policy: ExtraTermPolicy) -> Self {
        Self { normalizer, policy }
    }

    pub fn policy(&self) -> ExtraTermPolicy {
        self.policy
    }

    /// One pairing per distinct key, in first-seen order
    pub fn consolidate(
        &self,
        pairings: Vec<VersePairing>,
        records: Option<&TermRecords>,
        mode: ConsolidationMode<'_>,
    ) -> Vec<VersePairing> {
        let input_len = pairings.len();
        let mut order: Vec<PairingKey> = Vec::new();
        let mut groups: HashMap<PairingKey, Vec<VersePairing>> = HashMap::new();

        for pairing in pairings {
            let key = pairing.key();
            groups
                .entry(key)
                .or_insert_with(|| {
                    order.push(key);
                    Vec::new()
                })
                .push(pairing);
        }

        let mut consolidated = Vec::with_capacity(order.len());
        for key in order {
            let Some(group) = groups.remove(&key) else {
                continue;
            };
            let labels = self.labels_for(&key, &group, records, mode);

            let mut iter = group.into_iter();
            let Some(mut first) = iter.next() else {
                continue;
            };
            first.all_term_pairs = Some(if labels.is_empty() {
                vec![first.label()]
            } else {
                labels
            });
            consolidated.push(first);
        }

        tracing::debug!(
            "Consolidated {} pairings into {}",
            input_len,
            consolidated.len()
        );
        consolidated
    }

    fn labels_for(
        &self,
        key: &PairingKey,
        group: &[VersePairing],
        records: Option<&TermRecords>,
        mode: ConsolidationMode<'_>,
    ) -> Vec<String> {
        let mut terms: Vec<&str> = Vec::new();
        for pairing in group {
            for term in [pairing.term1.as_str(), pairing.term2.as_str()] {
                if !terms.contains(&term) {
                    terms.push(term);
                }
            }
        }
        let explicit = terms.len();

        if let Some(records) = records {
            let positions = key.positions();
            for set in records.iter() {
                if !terms.contains(&set.term.as_str()) && set.covers(&positions) {
                    terms.push(set.term.as_str());
                }
            }
        }
        if terms.len() > explicit {
            tracing::trace!(
                "Recovered {} extra terms for {}",
                terms.len() - explicit,
                key
            );
        }

        let mut seen = HashSet::new();
        let mut labels = Vec::new();
        for (i, a) in terms.iter().enumerate() {
            for b in &terms[i + 1..] {
                if !mode.allows(a, b) {
                    continue;
                }
                if self.policy == ExtraTermPolicy::ExcludeSameWord
                    && self.normalizer.same_word(a, b)
                {
                    continue;
                }
                let label = term_pair_label(a, b);
                if seen.insert(label.clone()) {
                    labels.push(label);
                }
            }
        }
        labels
    }
}

impl Default for Consolidator {
    fn default() -> Self {
        Self::new(TermNormalizer::default(), ExtraTermPolicy::default())
    }
}
