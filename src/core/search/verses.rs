//! Multi-term verse search.
//!
//! One result per matching verse, carrying every occurrence of every
//! term, in corpus reading order.

use crate::core::error::Result;
use crate::core::index::{CorpusIndex, TermMatcher};
use crate::core::terms::TermNormalizer;
use crate::core::types::{SearchFilters, SearchResult};
use std::collections::BTreeSet;

/// Verse search over a [`CorpusIndex`]
#[derive(Debug, Clone)]
pub struct VerseSearch {
    normalizer: TermNormalizer,
    max_terms: usize,
}

impl VerseSearch {
    pub fn new(normalizer: TermNormalizer, max_terms: usize) -> Self {
        Self {
            normalizer,
            max_terms,
        }
    }

    /// Normalized, validated, limited and deduplicated terms
    pub fn prepare_terms<S: AsRef<str>>(&self, terms: &[S]) -> Vec<String> {
        let mut prepared = self.normalizer.limit_and_validate(terms, self.max_terms);
        dedup_preserving_order(&mut prepared);
        prepared
    }

    /// Find every verse passing `filters` that matches at least one term.
    ///
    /// Terms shorter than the minimum are dropped first; if nothing is
    /// left the result is empty, not an error.
    pub fn search<S: AsRef<str>>(
        &self,
        index: &CorpusIndex,
        terms: &[S],
        filters: &SearchFilters,
    ) -> Result<Vec<SearchResult>> {
        let terms = self.prepare_terms(terms);
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let matchers = terms
            .iter()
            .map(|t| TermMatcher::new(t))
            .collect::<Result<Vec<_>>>()?;

        let candidates: BTreeSet<usize> = terms
            .iter()
            .flat_map(|t| index.candidate_positions(t))
            .collect();

        // BTreeSet iteration yields results in position order
        let mut results = Vec::new();
        for position in candidates {
            let Some(verse) = index.corpus().get(position) else {
                continue;
            };
            if !filters.accepts(verse) {
                continue;
            }

            let mut matches: Vec<_> = matchers
                .iter()
                .flat_map(|m| m.match_bounds(&verse.text))
                .collect();
            if matches.is_empty() {
                continue;
            }
            matches.sort_by_key(|b| (b.start, b.end));

            results.push(SearchResult {
                verse: verse.clone(),
                matches,
            });
        }

        tracing::debug!(
            "Search for {:?} matched {} verses",
            terms,
            results.len()
        );
        Ok(results)
    }
}

pub(crate) fn dedup_preserving_order(terms: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    terms.retain(|t| seen.insert(t.clone()));
}
