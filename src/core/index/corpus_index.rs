//! Corpus plus its derived word index, shared read-only by search and pairing.

use crate::core::corpus::Corpus;
use crate::core::index::{TermMatcher, WordIndex};
use crate::core::types::{CorpusStats, SearchFilters, Verse};
use std::sync::Arc;

/// Index handle owned by the engine and shared through `Arc`
#[derive(Debug)]
pub struct CorpusIndex {
    corpus: Corpus,
    words: WordIndex,
}

impl CorpusIndex {
    pub fn build(corpus: Corpus) -> Self {
        let words = WordIndex::build(&corpus);
        Self { corpus, words }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn words(&self) -> &WordIndex {
        &self.words
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            verses: self.corpus.len(),
            books: self.corpus.book_count(),
            distinct_words: self.words.word_count(),
        }
    }

    /// Ascending positions worth running the matcher on
    pub fn candidate_positions(&self, term: &str) -> Vec<usize> {
        self.words
            .prefix_candidates(term)
            .unwrap_or_else(|| (0..self.corpus.len()).collect())
    }

    /// Verses passing `filters` that the matcher accepts, ascending by position
    pub fn verses_matching(&self, matcher: &TermMatcher, filters: &SearchFilters) -> Vec<Arc<Verse>> {
        self.candidate_positions(matcher.term())
            .into_iter()
            .filter_map(|pos| self.corpus.get(pos))
            .filter(|verse| filters.accepts(verse) && matcher.test_match(&verse.text))
            .cloned()
            .collect()
    }
}
