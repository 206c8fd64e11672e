//! Verselink - verse search and word co-occurrence pairing
//!
//! Finds verses of a fixed corpus containing any of a set of words, and
//! pairs of verses (or single verses) where two different words occur
//! within a bounded distance of each other.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - corpus (line parser, testament table)
//!   - terms (normalizer, morphology strategy)
//!   - index (word index, prefix matcher)
//!   - search (multi-term verse search)
//!   - pairing (generator, scheduler, consolidator, request tokens)
//!   - engine (ties the above together)
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Key Features
//!
//! - One matching rule everywhere: the term as a prefix of a word
//! - Deterministic, capped pairing enumeration
//! - Cooperative scheduling with latest-request-wins cancellation

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::engine::VerseEngine;
pub use crate::core::error::{Result, VerseError};
pub use crate::core::pairing::{PairingOutcome, RequestGenerations, RequestToken};
pub use crate::core::types::*;
