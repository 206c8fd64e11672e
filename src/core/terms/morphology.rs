//! Morphological equivalence strategies.
//!
//! A strategy maps a normalized word to a base form. Two terms whose
//! base forms agree are treated as the same word when pairing.

use std::fmt::Debug;

/// Maps a normalized (lowercased, trimmed) word to its base form
pub trait Morphology: Send + Sync + Debug {
    fn base_form(&self, word: &str) -> String;
}

const DEFAULT_SUFFIXES: [&str; 7] = ["ful", "ly", "ing", "ed", "er", "est", "s"];

const DEFAULT_REWRITES: [(&str, &str); 5] = [
    ("faithf", "faith"),
    ("lov", "love"),
    ("runn", "run"),
    ("begun", "begin"),
    ("began", "begin"),
];

/// Strips the first matching suffix, then applies exact-match rewrites
#[derive(Debug, Clone)]
pub struct SuffixTable {
    suffixes: Vec<String>,
    rewrites: Vec<(String, String)>,
    /// Shortest base a suffix may leave behind
    min_base_len: usize,
}

impl SuffixTable {
    pub fn new<S, R>(suffixes: S, rewrites: R) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        R: IntoIterator<Item = (String, String)>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
            rewrites: rewrites.into_iter().collect(),
            min_base_len: 2,
        }
    }

    /// Add an irregular rewrite on top of the current table
    pub fn with_rewrite(mut self, from: &str, to: &str) -> Self {
        self.rewrites.push((from.to_string(), to.to_string()));
        self
    }

    fn strip_suffix<'a>(&self, word: &'a str) -> &'a str {
        for suffix in &self.suffixes {
            if let Some(base) = word.strip_suffix(suffix.as_str()) {
                if base.chars().count() >= self.min_base_len {
                    return base;
                }
            }
        }
        word
    }
}

impl Default for SuffixTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_SUFFIXES,
            DEFAULT_REWRITES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string())),
        )
    }
}

impl Morphology for SuffixTable {
    fn base_form(&self, word: &str) -> String {
        let base = self.strip_suffix(word);
        self.rewrites
            .iter()
            .find(|(from, _)| from == base)
            .map(|(_, to)| to.clone())
            .unwrap_or_else(|| base.to_string())
    }
}
