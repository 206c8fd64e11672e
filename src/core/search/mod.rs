//! Verse search.
//!
//! Applies filters, runs the matcher for every term and folds all
//! match bounds for a verse into a single result.

mod verses;

pub(crate) use verses::dedup_preserving_order;
pub use verses::VerseSearch;
