//! Password candidate generation from seed words.
//!
//! A run has two phases. The mutation pipeline expands the seed words into a
//! deduplicated [`WorkingSet`](passforge_core::WorkingSet) (date
//! decomposition, case and leet transforms, punctuation injection). The
//! candidate generator then concatenates every ordering of every subset of
//! that set, up to a configured subset size.
//!
//! # Architecture
//!
//! - [`transform`] -- one-token transformers (case, accent folding, leet)
//! - [`date`] -- ISO date detection and decomposition
//! - [`charset`] -- static punctuation token sources
//! - [`pipeline`] -- option-driven mutation of the working set
//! - [`generator`] -- lazy subset/permutation enumeration and counting
//! - [`config`] -- growth cap and candidate limit
//! - [`engine`] -- the one-call entry point and its error type
//!
//! ```
//! use passforge_core::OptionSet;
//! use passforge_engine::generate;
//!
//! let out = generate(&["ab", "c"], OptionSet::new()).unwrap();
//! assert_eq!(out, vec!["ab", "c"]);
//! ```

pub mod charset;
pub mod config;
pub mod date;
pub mod engine;
pub mod generator;
pub mod pipeline;
pub mod transform;

pub use config::GeneratorConfig;
pub use engine::{Engine, GenerateError, PreparedRun, generate};
pub use generator::{Candidates, candidate_count, max_subset_len};
pub use pipeline::mutate;
