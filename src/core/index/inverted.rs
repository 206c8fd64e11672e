//! Word → verse-position index.
//!
//! Built once per corpus load. Words are lowercased runs of word
//! characters, so every position the matcher could accept for a plain
//! word term appears under some indexed word starting with that term.
//! The index only narrows candidates; the matcher has the final say.

use crate::core::corpus::Corpus;
use std::collections::BTreeMap;

/// Inverted index over a corpus
#[derive(Debug, Default)]
pub struct WordIndex {
    /// word → ascending, deduplicated verse positions
    words: BTreeMap<String, Vec<usize>>,
}

impl WordIndex {
    pub fn build(corpus: &Corpus) -> Self {
        let mut words: BTreeMap<String, Vec<usize>> = BTreeMap::new();

        for verse in corpus.iter() {
            for word in tokenize(&verse.text) {
                let postings = words.entry(word).or_default();
                if postings.last() != Some(&verse.position) {
                    postings.push(verse.position);
                }
            }
        }

        tracing::info!("Indexed {} distinct words", words.len());
        Self { words }
    }

    /// Number of distinct indexed words
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Positions of verses containing exactly `word`
    pub fn positions(&self, word: &str) -> &[usize] {
        self.words.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Candidate positions for a prefix term, ascending.
    ///
    /// `None` when the term contains non-word characters and cannot be
    /// answered from the index; callers fall back to a full scan.
    pub fn prefix_candidates(&self, term: &str) -> Option<Vec<usize>> {
        if term.is_empty() || !term.chars().all(is_word_char) {
            return None;
        }

        let mut positions: Vec<usize> = self
            .words
            .range(term.to_string()..)
            .take_while(|(word, _)| word.starts_with(term))
            .flat_map(|(_, postings)| postings.iter().copied())
            .collect();
        positions.sort_unstable();
        positions.dedup();
        Some(positions)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lowercased runs of word characters
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}
