//! Configuration management for the verselink engine.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with defaults for every size guard.

use crate::core::error::{Result, VerseError};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub pairing: PairingConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

/// Corpus location
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Corpus text file; the XDG data dir is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Search term limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Shortest accepted term after normalization
    #[serde(default = "default_min_term_length")]
    pub min_term_length: usize,

    /// Terms kept for plain search and within-group pairing
    #[serde(default = "default_max_search_terms")]
    pub max_search_terms: usize,

    /// Terms kept per group for between-groups pairing
    #[serde(default = "default_max_search_terms_per_group")]
    pub max_search_terms_per_group: usize,
}

/// Pairing size guards
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PairingConfig {
    /// Hard cap on pairings returned by one run
    #[serde(default = "default_max_total_pairings")]
    pub max_total_pairings: usize,

    /// Hard cap on pairings enumerated for one term pair
    #[serde(default = "default_max_pairings_per_term_pair")]
    pub max_pairings_per_term_pair: usize,

    /// Largest position distance for a two-verse pairing
    #[serde(default = "default_max_proximity")]
    pub max_proximity: usize,

    /// How consolidation treats co-occurring terms recovered from the term index
    #[serde(default)]
    pub extra_terms: ExtraTermPolicy,
}

/// Label policy for terms recovered during consolidation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraTermPolicy {
    /// Label every valid pair from the recovered term union
    #[default]
    IncludeAll,
    /// Drop labels whose two terms are morphological variants of each other
    ExcludeSameWord,
}

/// Cooperative scheduling
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchedulerConfig {
    /// Term pairs processed before yielding
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Wall-clock budget between yields in milliseconds
    #[serde(default = "default_yield_budget_ms")]
    pub yield_budget_ms: u64,
}

// Default value functions
fn default_min_term_length() -> usize {
    2
}

fn default_max_search_terms() -> usize {
    8
}

fn default_max_search_terms_per_group() -> usize {
    8
}

fn default_max_total_pairings() -> usize {
    10_000
}

fn default_max_pairings_per_term_pair() -> usize {
    5_000
}

fn default_max_proximity() -> usize {
    100
}

fn default_chunk_size() -> usize {
    50
}

fn default_yield_budget_ms() -> u64 {
    100
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_term_length: default_min_term_length(),
            max_search_terms: default_max_search_terms(),
            max_search_terms_per_group: default_max_search_terms_per_group(),
        }
    }
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            max_total_pairings: default_max_total_pairings(),
            max_pairings_per_term_pair: default_max_pairings_per_term_pair(),
            max_proximity: default_max_proximity(),
            extra_terms: ExtraTermPolicy::default(),
        }
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            yield_budget_ms: default_yield_budget_ms(),
        }
    }
}

impl SchedulerConfig {
    pub fn yield_budget(&self) -> Duration {
        Duration::from_millis(self.yield_budget_ms)
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| VerseError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. VERSELINK_CONFIG env var
    /// 2. XDG config file (~/.config/verselink/config.toml)
    /// 3. ./verselink.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        xdg.log_paths();
        let mut config = if let Ok(config_path) = env::var("VERSELINK_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("verselink.toml").exists() {
                Self::from_file("verselink.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();

        if config.corpus.path.is_none() {
            config.corpus.path = Some(xdg.default_corpus());
        }

        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(path) = env::var("VERSELINK_CORPUS") {
            self.corpus.path = Some(PathBuf::from(path));
        }

        override_from_env("VERSELINK_MAX_SEARCH_TERMS", &mut self.search.max_search_terms);
        override_from_env(
            "VERSELINK_MAX_SEARCH_TERMS_PER_GROUP",
            &mut self.search.max_search_terms_per_group,
        );
        override_from_env(
            "VERSELINK_MAX_TOTAL_PAIRINGS",
            &mut self.pairing.max_total_pairings,
        );
        override_from_env(
            "VERSELINK_MAX_PAIRINGS_PER_TERM_PAIR",
            &mut self.pairing.max_pairings_per_term_pair,
        );
        override_from_env("VERSELINK_MAX_PROXIMITY", &mut self.pairing.max_proximity);
        override_from_env("VERSELINK_CHUNK_SIZE", &mut self.scheduler.chunk_size);
        override_from_env(
            "VERSELINK_YIELD_BUDGET_MS",
            &mut self.scheduler.yield_budget_ms,
        );
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let non_zero = [
            ("Min term length", self.search.min_term_length),
            ("Max search terms", self.search.max_search_terms),
            (
                "Max search terms per group",
                self.search.max_search_terms_per_group,
            ),
            ("Max total pairings", self.pairing.max_total_pairings),
            (
                "Max pairings per term pair",
                self.pairing.max_pairings_per_term_pair,
            ),
            ("Scheduler chunk size", self.scheduler.chunk_size),
        ];
        for (name, value) in non_zero {
            if value == 0 {
                return Err(VerseError::ConfigError(format!("{name} must be non-zero")));
            }
        }

        if self.scheduler.yield_budget_ms == 0 {
            return Err(VerseError::ConfigError(
                "Yield budget must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log the effective configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Corpus: {:?}", self.corpus.path);
        tracing::info!("  Min term length: {}", self.search.min_term_length);
        tracing::info!("  Max search terms: {}", self.search.max_search_terms);
        tracing::info!(
            "  Max search terms per group: {}",
            self.search.max_search_terms_per_group
        );
        tracing::info!("  Max total pairings: {}", self.pairing.max_total_pairings);
        tracing::info!(
            "  Max pairings per term pair: {}",
            self.pairing.max_pairings_per_term_pair
        );
        tracing::info!("  Max proximity: {}", self.pairing.max_proximity);
        tracing::info!("  Extra terms: {:?}", self.pairing.extra_terms);
        tracing::info!("  Chunk size: {}", self.scheduler.chunk_size);
        tracing::info!("  Yield budget: {}ms", self.scheduler.yield_budget_ms);
    }
}

fn override_from_env<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(raw) = env::var(var) {
        match raw.parse() {
            Ok(value) => *target = value,
            Err(_) => tracing::warn!("Ignoring unparsable {}={:?}", var, raw),
        }
    }
}
