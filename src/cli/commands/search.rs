//! Search command - find verses containing any of the given words

use crate::cli::commands::{require_terms, FilterArgs};
use crate::cli::output::{colors, highlight, print_json};
use crate::cli::OutputFormat;
use crate::core::engine::VerseEngine;
use crate::core::types::SearchResult;
use clap::Args;
use serde::Serialize;

/// Arguments for the search command
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Words to search for; each matches as a word prefix ("faith" finds "faithful")
    #[arg(required = true, num_args = 1..)]
    pub terms: Vec<String>,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Maximum number of verses to print (all when omitted)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub terms: Vec<String>,
    pub total_results: usize,
    pub results: Vec<SearchResult>,
}

/// Run the search and shape the response
pub fn build_output(args: &SearchArgs, engine: &VerseEngine) -> crate::core::error::Result<SearchOutput> {
    let terms = require_terms(engine.query_terms(&args.terms), engine, "search terms")?;
    let mut results = engine.search(&terms, &args.filters.to_filters())?;
    let total_results = results.len();
    if let Some(limit) = args.limit {
        results.truncate(limit);
    }
    Ok(SearchOutput {
        terms,
        total_results,
        results,
    })
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    engine: &VerseEngine,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = build_output(&args, engine)?;

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!(
                    "No verses found for {}",
                    colors::label(&output.terms.join(", "))
                );
                return Ok(());
            }

            println!(
                "Found {} verse(s):\n",
                colors::number(&output.total_results.to_string())
            );
            for result in &output.results {
                println!(
                    "{}  {}",
                    colors::reference(&result.verse.reference),
                    highlight(&result.verse.text, &result.matches)
                );
            }
            if output.results.len() < output.total_results {
                println!(
                    "\n{}",
                    colors::dim(&format!(
                        "... {} more (raise --limit to see them)",
                        output.total_results - output.results.len()
                    ))
                );
            }
        }
        OutputFormat::Json => print_json(&output)?,
    }

    Ok(())
}
