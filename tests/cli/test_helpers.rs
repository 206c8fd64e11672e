//! CLI test helpers

use verselink::cli::commands::{FilterArgs, PairArgs, SearchArgs};

/// Search args with no filters or limit
pub fn search_args(terms: &[&str]) -> SearchArgs {
    SearchArgs {
        terms: terms.iter().map(|s| s.to_string()).collect(),
        filters: FilterArgs::default(),
        limit: None,
    }
}

/// Pair args; an empty `with` means within-group
pub fn pair_args(terms: &[&str], with: &[&str]) -> PairArgs {
    PairArgs {
        terms: terms.iter().map(|s| s.to_string()).collect(),
        with: with.iter().map(|s| s.to_string()).collect(),
        filters: FilterArgs::default(),
        limit: None,
        progress: false,
        text: false,
    }
}
