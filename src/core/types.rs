//! Core data types for the verselink engine.
//!
//! Verses are created once by the corpus loader and shared through
//! `Arc`; search results and pairings hold those handles rather than
//! copies of the verse text.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which half of the canon a book belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Testament {
    Old,
    New,
}

impl FromStr for Testament {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "old" | "ot" => Ok(Testament::Old),
            "new" | "nt" => Ok(Testament::New),
            other => Err(format!("unknown testament '{other}' (expected old or new)")),
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Testament::Old => write!(f, "old"),
            Testament::New => write!(f, "new"),
        }
    }
}

/// A single verse of the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Book name as it appears in the source text
    pub book: String,

    /// Chapter number
    pub chapter: u32,

    /// Verse number within the chapter
    pub number: u32,

    /// Verse text with the reference prefix removed
    pub text: String,

    /// Display reference, "Book C:V"
    pub reference: String,

    /// Dense zero-based index in parse order; the corpus's total order
    pub position: usize,

    /// Testament derived from the book name
    pub testament: Testament,
}

/// Half-open byte range of one term occurrence inside a verse's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBounds {
    pub term: String,
    pub start: usize,
    pub end: usize,
}

/// One matching verse with every occurrence of every search term
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub verse: Arc<Verse>,
    pub matches: Vec<MatchBounds>,
}

/// Predicate over verses applied before matching
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default)]
    pub testament: Option<Testament>,

    /// Exact book names; intersected with `testament` when both are set
    #[serde(default)]
    pub books: Option<HashSet<String>>,
}

impl SearchFilters {
    /// Filter that accepts every verse
    pub fn none() -> Self {
        Self::default()
    }

    pub fn testament(testament: Testament) -> Self {
        Self {
            testament: Some(testament),
            books: None,
        }
    }

    pub fn books<I, S>(books: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            testament: None,
            books: Some(books.into_iter().map(Into::into).collect()),
        }
    }

    pub fn accepts(&self, verse: &Verse) -> bool {
        if let Some(testament) = self.testament {
            if verse.testament != testament {
                return false;
            }
        }
        match &self.books {
            Some(books) => books.contains(&verse.book),
            None => true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.testament.is_none() && self.books.is_none()
    }
}

/// Deduplication identity of a pairing, independent of the terms that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PairingKey {
    /// Both terms in one verse
    Same(usize),
    /// Two distinct verses, `(min position, max position)`
    Span(usize, usize),
}

impl PairingKey {
    pub fn for_positions(a: usize, b: usize) -> Self {
        if a == b {
            PairingKey::Same(a)
        } else {
            PairingKey::Span(a.min(b), a.max(b))
        }
    }

    /// Positions covered by this key, ascending
    pub fn positions(&self) -> Vec<usize> {
        match *self {
            PairingKey::Same(p) => vec![p],
            PairingKey::Span(a, b) => vec![a, b],
        }
    }
}

impl fmt::Display for PairingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairingKey::Same(p) => write!(f, "same:{p}"),
            PairingKey::Span(a, b) => write!(f, "span:{a}-{b}"),
        }
    }
}

/// Two terms co-occurring in one verse or in two nearby verses
#[derive(Debug, Clone, Serialize)]
pub struct VersePairing {
    /// One or two verses, sorted by position
    pub verses: Vec<Arc<Verse>>,

    pub term1: String,
    pub term2: String,

    /// 0 for a same-verse pairing, otherwise the position distance
    pub proximity: usize,

    pub is_between_groups: bool,

    /// Consolidated "a ↔ b" labels of every term pair hitting the same verses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_term_pairs: Option<Vec<String>>,
}

impl VersePairing {
    pub fn same_verse(verse: Arc<Verse>, term1: &str, term2: &str, between: bool) -> Self {
        Self {
            verses: vec![verse],
            term1: term1.to_string(),
            term2: term2.to_string(),
            proximity: 0,
            is_between_groups: between,
            all_term_pairs: None,
        }
    }

    pub fn nearby(
        a: Arc<Verse>,
        b: Arc<Verse>,
        term1: &str,
        term2: &str,
        between: bool,
    ) -> Self {
        let proximity = a.position.abs_diff(b.position);
        let verses = if a.position <= b.position {
            vec![a, b]
        } else {
            vec![b, a]
        };
        Self {
            verses,
            term1: term1.to_string(),
            term2: term2.to_string(),
            proximity,
            is_between_groups: between,
            all_term_pairs: None,
        }
    }

    pub fn key(&self) -> PairingKey {
        match self.verses.as_slice() {
            [only] => PairingKey::Same(only.position),
            [first, .., last] => PairingKey::for_positions(first.position, last.position),
            [] => PairingKey::Same(usize::MAX),
        }
    }

    /// Label of the term pair that produced this pairing
    pub fn label(&self) -> String {
        term_pair_label(&self.term1, &self.term2)
    }
}

/// Canonical "a ↔ b" label, alphabetically ordered
pub fn term_pair_label(a: &str, b: &str) -> String {
    if a <= b {
        format!("{a} ↔ {b}")
    } else {
        format!("{b} ↔ {a}")
    }
}

/// Progress of a scheduled pairing run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Term pairs processed so far
    pub processed: usize,

    /// Term pairs scheduled in total
    pub total: usize,

    /// Pairings collected so far
    pub pairings: usize,
}

/// Statistics about a loaded corpus
#[derive(Debug, Clone, Serialize)]
pub struct CorpusStats {
    pub verses: usize,
    pub books: usize,
    pub distinct_words: usize,
}
