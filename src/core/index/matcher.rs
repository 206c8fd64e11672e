//! Word-boundary prefix matching.
//!
//! A term matches wherever it starts at a word boundary, followed by
//! any number of word characters: "faith" matches "faith", "faithful"
//! and "faithfully" but not "unfaith". Search, pairing candidate
//! selection and highlight bounds all go through [`TermMatcher`], so
//! "found" and "highlighted" can never disagree.

use crate::core::error::{Result, VerseError};
use crate::core::types::MatchBounds;
use regex::{Regex, RegexBuilder};

/// Compiled matcher for one normalized term
#[derive(Debug, Clone)]
pub struct TermMatcher {
    term: String,
    pattern: Regex,
}

impl TermMatcher {
    pub fn new(term: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(&format!(r"\b{}\w*", regex::escape(term)))
            .case_insensitive(true)
            .build()
            .map_err(|e| VerseError::Pattern(format!("'{term}': {e}")))?;

        Ok(Self {
            term: term.to_string(),
            pattern,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Every non-overlapping occurrence as half-open byte ranges, left to right
    pub fn find_matches(&self, text: &str) -> Vec<(usize, usize)> {
        self.pattern
            .find_iter(text)
            .map(|m| (m.start(), m.end()))
            .collect()
    }

    /// Short-circuit form of [`find_matches`](Self::find_matches)
    pub fn test_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Occurrences tagged with the term, ready for highlighting
    pub fn match_bounds(&self, text: &str) -> Vec<MatchBounds> {
        self.pattern
            .find_iter(text)
            .map(|m| MatchBounds {
                term: self.term.clone(),
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }
}

/// One-off form of [`TermMatcher::find_matches`]
pub fn find_matches(text: &str, term: &str) -> Result<Vec<(usize, usize)>> {
    Ok(TermMatcher::new(term)?.find_matches(text))
}

/// One-off form of [`TermMatcher::test_match`]
pub fn test_match(text: &str, term: &str) -> Result<bool> {
    Ok(TermMatcher::new(term)?.test_match(text))
}
