//! Core domain logic (front-end agnostic)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **corpus**: Verse-per-line corpus parsing
//! - **terms**: Term normalization and word equivalence
//! - **index**: Word index and the prefix matcher
//! - **search**: Multi-term verse search
//! - **pairing**: Co-occurrence generation, scheduling and consolidation
//! - **engine**: Caller-owned entry point over one loaded corpus

pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod index;
pub mod pairing;
pub mod search;
pub mod terms;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use engine::VerseEngine;
pub use error::{Result, VerseError};
