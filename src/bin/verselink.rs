//! Verselink CLI - verse search and word pairing from the command line
//!
//! # Examples
//!
//! ```bash
//! # Find verses containing either word
//! verselink search faith hope
//!
//! # Pair words within one group
//! verselink pair faith hope charity --testament new
//!
//! # Pair one group against another
//! verselink pair light --with darkness night
//!
//! # Corpus statistics
//! verselink info --corpus ./kjv.txt
//! ```

use clap::Parser;
use verselink::cli::{run, Cli};

fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "verselink=warn".into());

    // stderr keeps stdout clean for --format json
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    if let Err(e) = run(cli).await {
        verselink::cli::output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
