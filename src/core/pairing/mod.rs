//! Co-occurrence pairing: generation, scheduling and consolidation.

pub mod consolidator;
pub mod generator;
pub mod records;
pub mod scheduler;
pub mod token;

pub use consolidator::{ConsolidationMode, Consolidator};
pub use generator::{priority, PairingGenerator, PairingLimits, PairingOutcome, TermPair};
pub use records::{TermRecordSet, TermRecords};
pub use scheduler::{drive, drive_with_progress, prioritize, ChunkPolicy, PairingJob, Step};
pub use token::{RequestGenerations, RequestToken};
