//! Top-level module for substring mining.
//!
//! The mining pipeline is built from:
//! - A per-letter name index used to seed the search (`NameIndex`)
//! - A breadth-first expander growing words one letter at a time (`GenerationalExpander`)
//! - A word/count table applying the deduplication rule (`FrequencyRegistry`)
//! - Mining configuration (`MiningOptions`)
//! - A high-level entry point tying everything together (`Miner`)

/// High-level mining interface.
///
/// Validates options, runs every generation and returns the pruned counts.
pub mod miner;

/// Mining configuration (length and occurrence thresholds, branching, threads).
pub mod options;

/// Per-letter eligibility lists built from the raw name list.
pub mod name_index;

/// Generation-by-generation word expansion.
///
/// Holds the explicit frontier passed from one generation to the next.
pub mod expander;

/// Word to count table and redundant substring pruning.
pub mod registry;

/// Compact set of the 26 lowercase latin letters.
pub mod letter_set;
