//! Verse corpus: parsing and the owned verse collection.
//!
//! The corpus owns every verse for the lifetime of the engine.
//! Everything downstream holds `Arc<Verse>` handles into it and
//! never mutates a verse after parsing.

mod books;
mod loader;

pub use books::testament_of;
pub use loader::{CorpusLoader, LoadStats};

use crate::core::types::Verse;
use std::collections::HashSet;
use std::sync::Arc;

/// Ordered, immutable collection of verses
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    verses: Vec<Arc<Verse>>,
}

impl Corpus {
    /// Wrap already-positioned verses. `verses[i].position` must equal `i`.
    pub fn from_verses(verses: Vec<Arc<Verse>>) -> Self {
        debug_assert!(verses.iter().enumerate().all(|(i, v)| v.position == i));
        Self { verses }
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Verse at a corpus position
    pub fn get(&self, position: usize) -> Option<&Arc<Verse>> {
        self.verses.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Verse>> + '_ {
        self.verses.iter()
    }

    /// Number of distinct book names
    pub fn book_count(&self) -> usize {
        self.verses
            .iter()
            .map(|v| v.book.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}
