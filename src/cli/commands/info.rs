//! Info command - show corpus statistics and version

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::engine::VerseEngine;
use crate::core::types::CorpusStats;
use clap::Args;
use serde::Serialize;

/// Arguments for the info command
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    /// Also show the indexing limits in effect
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Corpus information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus: Option<String>,
    pub stats: CorpusStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<Limits>,
}

#[derive(Debug, Serialize)]
pub struct Limits {
    pub max_search_terms: usize,
    pub max_total_pairings: usize,
    pub max_proximity: usize,
}

/// Gather corpus information from a loaded engine
pub fn build_info(args: &InfoArgs, engine: &VerseEngine) -> crate::core::error::Result<InfoResponse> {
    let config = engine.config();
    Ok(InfoResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        corpus: config
            .corpus
            .path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned()),
        stats: engine.stats()?,
        limits: args.detailed.then(|| Limits {
            max_search_terms: config.search.max_search_terms,
            max_total_pairings: config.pairing.max_total_pairings,
            max_proximity: config.pairing.max_proximity,
        }),
    })
}

/// Execute the info command
pub fn execute(
    args: InfoArgs,
    engine: &VerseEngine,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let info = build_info(&args, engine)?;

    match format {
        OutputFormat::Human => {
            println!("{} {}", info.name, info.version);
            if let Some(corpus) = &info.corpus {
                println!("Corpus: {corpus}");
            }
            println!(
                "Verses: {}",
                colors::number(&info.stats.verses.to_string())
            );
            println!("Books: {}", colors::number(&info.stats.books.to_string()));
            println!(
                "Distinct words: {}",
                colors::number(&info.stats.distinct_words.to_string())
            );
            if let Some(limits) = &info.limits {
                println!("Max search terms: {}", limits.max_search_terms);
                println!("Max total pairings: {}", limits.max_total_pairings);
                println!("Max proximity: {}", limits.max_proximity);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
