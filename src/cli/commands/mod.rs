//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for one
//! subcommand.

pub mod completions;
pub mod config;
pub mod info;
pub mod pair;
pub mod search;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use info::InfoArgs;
pub use pair::PairArgs;
pub use search::SearchArgs;

use crate::core::engine::VerseEngine;
use crate::core::error::{Result, VerseError};
use crate::core::types::{SearchFilters, Testament};
use clap::Args;

/// Verse filters shared by search and pair
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Restrict to one testament (old or new)
    #[arg(long, short = 't')]
    pub testament: Option<Testament>,

    /// Restrict to a book (can be specified multiple times)
    #[arg(long = "book", short = 'b')]
    pub books: Vec<String>,
}

impl FilterArgs {
    pub fn to_filters(&self) -> SearchFilters {
        SearchFilters {
            testament: self.testament,
            books: if self.books.is_empty() {
                None
            } else {
                Some(self.books.iter().cloned().collect())
            },
        }
    }
}

/// Fail when every term in `prepared` was dropped by normalization
pub fn require_terms(prepared: Vec<String>, engine: &VerseEngine, what: &str) -> Result<Vec<String>> {
    if prepared.is_empty() {
        return Err(VerseError::InvalidQuery(format!(
            "no {what} left after dropping words shorter than {} characters",
            engine.config().search.min_term_length
        )));
    }
    Ok(prepared)
}
