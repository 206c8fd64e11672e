//! CLI adapter for Verselink
//!
//! Thin `clap` front end over [`VerseEngine`]. All matching, pairing and
//! consolidation happens in `core/`; this module only parses arguments
//! and renders results.
//!
//! ```text
//!  +------------------+      +------------------+
//!  |      cli/        | ---> |     core/        |
//!  | (clap adapter)   |      |  (domain logic)  |
//!  +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use crate::core::config::Config;
use crate::core::engine::VerseEngine;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Verselink - verse search and word co-occurrence pairing
///
/// Search a verse-per-line corpus for words, or find verses where two
/// different words occur together or close to each other.
#[derive(Parser, Debug)]
#[command(name = "verselink")]
#[command(version)]
#[command(about = "Verse search and word co-occurrence pairing", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Corpus file (overrides config and VERSELINK_CORPUS)
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    /// Emit log lines as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find verses containing any of the given words
    Search(commands::SearchArgs),

    /// Pair words that occur in the same or nearby verses
    Pair(commands::PairArgs),

    /// Show corpus statistics and version
    Info(commands::InfoArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  verselink completions bash > ~/.local/share/bash-completion/completions/verselink
    ///   zsh:   verselink completions zsh > ~/.zfunc/_verselink
    ///   fish:  verselink completions fish > ~/.config/fish/completions/verselink.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Completions need neither config nor corpus
    let command = match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        other => other,
    };

    let mut config = Config::load()?;
    if let Some(path) = cli.corpus {
        config.corpus.path = Some(path);
    }
    config.log_config();

    if let Commands::ShowConfig(args) = command {
        return commands::config::execute(args, &config, cli.format);
    }

    let mut engine = VerseEngine::new(config);
    engine.load_configured()?;

    match command {
        Commands::Search(args) => commands::search::execute(args, &engine, cli.format),
        Commands::Pair(args) => commands::pair::execute(args, &engine, cli.format).await,
        Commands::Info(args) => commands::info::execute(args, &engine, cli.format),
        Commands::ShowConfig(_) | Commands::Completions(_) => Ok(()), // Handled above
    }
}
