//! Pair command - find words occurring in the same or nearby verses

use crate::cli::commands::{require_terms, FilterArgs};
use crate::cli::output::{colors, describe_proximity, format_duration, pairing_references, print_warning};
use crate::cli::OutputFormat;
use crate::core::engine::VerseEngine;
use crate::core::pairing::PairingOutcome;
use crate::core::types::{Progress, VersePairing};
use clap::Args;
use serde::Serialize;
use std::time::Instant;

/// Arguments for the pair command
#[derive(Args, Debug, Clone)]
pub struct PairArgs {
    /// Words to pair with each other (or the first group when --with is given)
    #[arg(required = true, num_args = 1..)]
    pub terms: Vec<String>,

    /// Second group; pairs then always take one word from each group
    #[arg(long = "with", short = 'w', num_args = 1..)]
    pub with: Vec<String>,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Maximum number of pairings to print (all when omitted)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Report scheduler progress on stderr
    #[arg(long)]
    pub progress: bool,

    /// Print verse text under each pairing
    #[arg(long)]
    pub text: bool,
}

/// One printed pairing
#[derive(Debug, Serialize)]
pub struct PairingItem {
    pub references: Vec<String>,
    pub positions: Vec<usize>,
    pub proximity: usize,
    pub is_between_groups: bool,
    pub term_pairs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texts: Option<Vec<String>>,
}

impl PairingItem {
    fn from_pairing(pairing: &VersePairing, with_text: bool) -> Self {
        Self {
            references: pairing.verses.iter().map(|v| v.reference.clone()).collect(),
            positions: pairing.verses.iter().map(|v| v.position).collect(),
            proximity: pairing.proximity,
            is_between_groups: pairing.is_between_groups,
            term_pairs: pairing
                .all_term_pairs
                .clone()
                .unwrap_or_else(|| vec![pairing.label()]),
            texts: with_text.then(|| pairing.verses.iter().map(|v| v.text.clone()).collect()),
        }
    }
}

/// Pair response
#[derive(Debug, Serialize)]
pub struct PairOutput {
    pub mode: &'static str,
    pub group1: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group2: Vec<String>,
    pub total_pairings: usize,
    pub truncated: bool,
    pub progress: Progress,
    pub pairings: Vec<PairingItem>,
}

/// Terms the engine pairs, after normalization and limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedGroups {
    pub group1: Vec<String>,
    pub group2: Vec<String>,
}

impl PreparedGroups {
    /// Normalize both groups; a group left empty is an invalid query
    pub fn from_args(args: &PairArgs, engine: &VerseEngine) -> crate::core::error::Result<Self> {
        if args.with.is_empty() {
            return Ok(Self {
                group1: require_terms(engine.query_terms(&args.terms), engine, "terms to pair")?,
                group2: Vec::new(),
            });
        }
        Ok(Self {
            group1: require_terms(engine.group_terms(&args.terms), engine, "terms in the first group")?,
            group2: require_terms(engine.group_terms(&args.with), engine, "terms in the --with group")?,
        })
    }

    pub fn is_between(&self) -> bool {
        !self.group2.is_empty()
    }
}

/// Run the pairing and return the raw outcome
pub async fn run_pairing(
    groups: &PreparedGroups,
    args: &PairArgs,
    engine: &VerseEngine,
) -> crate::core::error::Result<PairingOutcome> {
    let filters = args.filters.to_filters();
    let token = engine.begin_request();
    let report = args.progress;
    let on_progress = move |p: Progress| {
        if report {
            eprintln!(
                "{}",
                colors::dim(&format!(
                    "  {}/{} term pairs, {} pairings",
                    p.processed, p.total, p.pairings
                ))
            );
        }
    };

    if groups.is_between() {
        engine
            .pair_groups_with_progress(&groups.group1, &groups.group2, &filters, token, on_progress)
            .await
    } else {
        engine
            .pair_terms_with_progress(&groups.group1, &filters, token, on_progress)
            .await
    }
}

/// Shape an outcome for printing
pub fn build_output(groups: &PreparedGroups, args: &PairArgs, outcome: &PairingOutcome) -> PairOutput {
    let shown = args.limit.unwrap_or(outcome.pairings.len());
    PairOutput {
        mode: if groups.is_between() {
            "between"
        } else {
            "within"
        },
        group1: groups.group1.clone(),
        group2: groups.group2.clone(),
        total_pairings: outcome.pairings.len(),
        truncated: outcome.truncated,
        progress: outcome.progress,
        pairings: outcome
            .pairings
            .iter()
            .take(shown)
            .map(|p| PairingItem::from_pairing(p, args.text))
            .collect(),
    }
}

/// Execute the pair command
pub async fn execute(
    args: PairArgs,
    engine: &VerseEngine,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();
    let groups = PreparedGroups::from_args(&args, engine)?;
    let outcome = run_pairing(&groups, &args, engine).await?;
    let output = build_output(&groups, &args, &outcome);

    match format {
        OutputFormat::Human => {
            if output.truncated {
                print_warning("pairing limit reached; results are partial");
            }
            if output.pairings.is_empty() {
                println!("No pairings found");
                return Ok(());
            }

            println!(
                "Found {} pairing(s) in {}:\n",
                colors::number(&output.total_pairings.to_string()),
                format_duration(started.elapsed().as_secs_f64())
            );
            for (i, (item, pairing)) in output.pairings.iter().zip(&outcome.pairings).enumerate() {
                println!(
                    "[{}] {} {}",
                    colors::rank(&(i + 1).to_string()),
                    colors::reference(&pairing_references(pairing)),
                    colors::dim(&format!("({})", describe_proximity(item.proximity)))
                );
                println!("    {}", colors::term_pair(&item.term_pairs.join(", ")));
                if let Some(texts) = &item.texts {
                    for text in texts {
                        println!("    {}", colors::dim(text));
                    }
                }
            }
            if output.pairings.len() < output.total_pairings {
                println!(
                    "\n{}",
                    colors::dim(&format!(
                        "... {} more (raise --limit to see them)",
                        output.total_pairings - output.pairings.len()
                    ))
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
