//! Frequent substring mining over name corpora.
//!
//! This crate finds the substrings (built from `a`-`z` only) that occur in at
//! least a given number of names, and reports only the most specific form of
//! each pattern. It includes:
//! - A generation-by-generation substring miner with branch pruning
//! - Deduplication of shorter substrings carried by a longer one
//! - Corpus loading with a compact binary cache
//! - Result ranking and table rendering
//!
//! The usual entry point is [`mine`]; [`Miner`] exposes the same algorithm
//! with configurable options and per-generation statistics.

/// Substring mining: name index, generational expansion and pruning.
pub mod mining;

/// Name list loading and caching.
pub mod corpus;

/// Sorting, truncation and rendering of mining results.
pub mod ranking;

/// Error type shared by the whole crate.
pub mod error;

/// File helpers used by the corpus loader.
///
/// Not exposed
pub(crate) mod io;

pub use corpus::NameCorpus;
pub use error::MineError;
pub use mining::miner::{mine, Miner, MiningReport};
pub use mining::options::{Branching, MiningOptions};
