//! Inverted index and term matching.
//!
//! - **inverted**: word → verse positions, used to narrow candidates
//! - **matcher**: the authoritative word-boundary prefix rule
//! - **corpus_index**: corpus + word index handle shared by search and pairing

mod corpus_index;
mod inverted;
mod matcher;

pub use corpus_index::CorpusIndex;
pub use inverted::{tokenize, WordIndex};
pub use matcher::{find_matches, test_match, TermMatcher};
