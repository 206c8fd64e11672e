//! Term → matching verses, the input shared by generation and consolidation.

use crate::core::types::Verse;
use std::collections::HashSet;
use std::sync::Arc;

/// Verses matching one term, ascending by position
#[derive(Debug, Clone)]
pub struct TermRecordSet {
    pub term: String,
    pub verses: Vec<Arc<Verse>>,
    positions: HashSet<usize>,
}

impl TermRecordSet {
    pub fn new(term: impl Into<String>, mut verses: Vec<Arc<Verse>>) -> Self {
        verses.sort_by_key(|v| v.position);
        verses.dedup_by_key(|v| v.position);
        let positions = verses.iter().map(|v| v.position).collect();
        Self {
            term: term.into(),
            verses,
            positions,
        }
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    /// True when every given position is in this set
    pub fn covers(&self, positions: &[usize]) -> bool {
        positions.iter().all(|p| self.positions.contains(p))
    }
}

/// Ordered term → verses map for one query
#[derive(Debug, Clone, Default)]
pub struct TermRecords {
    sets: Vec<TermRecordSet>,
}

impl TermRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the verses for a term
    pub fn insert(&mut self, term: impl Into<String>, verses: Vec<Arc<Verse>>) {
        let set = TermRecordSet::new(term, verses);
        match self.sets.iter_mut().find(|s| s.term == set.term) {
            Some(existing) => *existing = set,
            None => self.sets.push(set),
        }
    }

    pub fn get(&self, term: &str) -> Option<&TermRecordSet> {
        self.sets.iter().find(|s| s.term == term)
    }

    /// Verses for a term, empty when the term is unknown
    pub fn verses(&self, term: &str) -> &[Arc<Verse>] {
        self.get(term).map(|s| s.verses.as_slice()).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &TermRecordSet> + '_ {
        self.sets.iter()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
