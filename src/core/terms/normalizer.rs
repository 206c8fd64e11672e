//! Search term canonicalization, validation and equivalence.

use crate::core::terms::morphology::{Morphology, SuffixTable};
use std::sync::Arc;

/// Normalizes user-entered terms and decides when two terms are the same word
#[derive(Debug, Clone)]
pub struct TermNormalizer {
    min_term_length: usize,
    morphology: Arc<dyn Morphology>,
}

impl TermNormalizer {
    /// Normalizer with the default suffix table
    pub fn new(min_term_length: usize) -> Self {
        Self::with_morphology(min_term_length, Arc::new(SuffixTable::default()))
    }

    /// Normalizer with a caller-supplied equivalence strategy
    pub fn with_morphology(min_term_length: usize, morphology: Arc<dyn Morphology>) -> Self {
        Self {
            min_term_length,
            morphology,
        }
    }

    pub fn min_term_length(&self) -> usize {
        self.min_term_length
    }

    /// Lowercase and trim
    pub fn normalize(&self, term: &str) -> String {
        term.trim().to_lowercase()
    }

    /// True iff the normalized term is long enough to search for
    pub fn is_valid(&self, term: &str) -> bool {
        self.normalize(term).chars().count() >= self.min_term_length
    }

    /// Whether two terms are variants of one underlying word.
    ///
    /// Equal base forms, or one normalized term containing the other.
    /// The substring rule is loose ("earth" ~ "hearth");
    /// it only decides which term pairs are never paired.
    pub fn same_word(&self, a: &str, b: &str) -> bool {
        let a = self.normalize(a);
        let b = self.normalize(b);
        if a == b || a.contains(&b) || b.contains(&a) {
            return true;
        }
        self.morphology.base_form(&a) == self.morphology.base_form(&b)
    }

    /// Normalize, drop invalid terms and keep at most `max_count`, in input order.
    ///
    /// Truncation is logged at warn level, never returned as an error.
    pub fn limit_and_validate<S: AsRef<str>>(&self, terms: &[S], max_count: usize) -> Vec<String> {
        let mut valid: Vec<String> = terms
            .iter()
            .map(|t| self.normalize(t.as_ref()))
            .filter(|t| t.chars().count() >= self.min_term_length)
            .collect();

        if valid.len() > max_count {
            tracing::warn!(
                "Too many search terms: keeping the first {} of {}",
                max_count,
                valid.len()
            );
            valid.truncate(max_count);
        }
        valid
    }
}

impl Default for TermNormalizer {
    fn default() -> Self {
        Self::new(2)
    }
}
