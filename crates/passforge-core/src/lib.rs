//! Shared building blocks for passforge.
//!
//! This crate holds everything the mutation pipeline and the candidate
//! generator agree on, with no I/O and no heavy dependencies:
//!
//! - [`options`] -- mutation option names and the [`OptionSet`] bitset
//! - [`case`] -- whole-token case conversion (upper, lower, capitalize)
//! - [`character`] -- leet table and the auxiliary punctuation sets
//! - [`calendar`] -- English and French month-name tables
//! - [`token`] -- the insertion-ordered, deduplicated [`WorkingSet`]

pub mod calendar;
pub mod case;
pub mod character;
pub mod options;
pub mod token;

pub use options::{MutationOption, OptionSet, UnknownOption};
pub use token::WorkingSet;
