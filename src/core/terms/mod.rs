//! Search term handling.
//!
//! - **normalizer**: lowercasing, validation, term-count limits and
//!   the `same_word` relation used to skip self-pairings
//! - **morphology**: pluggable base-form strategies behind `same_word`

mod morphology;
mod normalizer;

pub use morphology::{Morphology, SuffixTable};
pub use normalizer::TermNormalizer;
