//! Error types and error handling for the verselink engine.
//!
//! Only genuinely fatal conditions live here. Malformed corpus
//! lines, too-short terms and cap truncation are recovered inside
//! the core and never surface as errors.

use thiserror::Error;

/// Result type alias for verselink operations
pub type Result<T> = std::result::Result<T, VerseError>;

/// Main error type for the verselink engine
#[derive(Error, Debug)]
pub enum VerseError {
    #[error("Corpus unavailable: {0}")]
    CorpusUnavailable(String),

    #[error("Engine not initialized: load a corpus before searching")]
    NotInitialized,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid match pattern: {0}")]
    Pattern(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl VerseError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// True when the engine was asked to work before a corpus was loaded.
    ///
    /// Callers use this to tell "not ready" apart from "ready, nothing matched".
    pub fn is_not_ready(&self) -> bool {
        matches!(self, VerseError::NotInitialized)
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            VerseError::InvalidQuery(_) | VerseError::ConfigError(_)
        )
    }
}
