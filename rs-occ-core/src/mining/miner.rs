use std::collections::HashMap;

use log::info;

use crate::error::MineError;
use super::expander::{GenerationStats, GenerationalExpander};
use super::name_index::NameIndex;
use super::options::MiningOptions;
use super::registry::FrequencyRegistry;

/// Finds the substrings occurring in at least `min_occurrences` names.
///
/// Shortcut for `Miner::new(MiningOptions::new(min_length, min_occurrences)?).mine(names)`.
///
/// # Parameters
/// - `names`: Names to search in. Only `a`..=`z` runs can form a word.
/// - `min_length`: Minimum length of a reported word, must be >= 1.
/// - `min_occurrences`: Minimum number of names a word must occur in.
///   `0` is accepted and behaves like `1`.
///
/// # Returns
/// A map from word to the number of names containing it, where a word is
/// left out whenever a longer word containing it has the same count.
///
/// # Errors
/// Returns `MineError::InvalidMinLength` if `min_length` is 0.
pub fn mine<S: AsRef<str>>(
	names: &[S],
	min_length: usize,
	min_occurrences: usize,
) -> Result<HashMap<String, usize>, MineError> {
	Miner::new(MiningOptions::new(min_length, min_occurrences)?).mine(names)
}

/// Outcome of a mining run with its generation statistics.
#[derive(Debug)]
pub struct MiningReport {
	/// Pruned word counts.
	pub counts: HashMap<String, usize>,
	/// Frontier statistics, one entry per generation, seeds first.
	pub generations: Vec<GenerationStats>,
	/// Number of words removed by pruning.
	pub pruned: usize,
}

/// High-level substring miner.
///
/// # Responsibilities
/// - Build the name index
/// - Run the generational expansion into a `FrequencyRegistry`
/// - Prune redundant words and return the final counts
///
/// A `Miner` holds no state between runs: mining the same names twice
/// gives the same result.
#[derive(Clone, Debug, Default)]
pub struct Miner {
	options: MiningOptions,
}

impl Miner {
	pub fn new(options: MiningOptions) -> Self {
		Self { options }
	}

	/// Mines `names` and returns the pruned word counts.
	pub fn mine<S: AsRef<str>>(&self, names: &[S]) -> Result<HashMap<String, usize>, MineError> {
		Ok(self.mine_with_report(names)?.counts)
	}

	/// Mines `names` and returns the counts along with per-generation statistics.
	///
	/// # Errors
	/// Returns `MineError::InvalidMinLength` if the options hold a zero
	/// minimum length (options built through their setters never do).
	pub fn mine_with_report<S: AsRef<str>>(&self, names: &[S]) -> Result<MiningReport, MineError> {
		let min_length = self.options.min_length();
		if min_length < 1 {
			return Err(MineError::InvalidMinLength(min_length));
		}
		if names.is_empty() {
			return Ok(MiningReport { counts: HashMap::new(), generations: Vec::new(), pruned: 0 });
		}

		let index = NameIndex::build(names, min_length);
		let mut registry = FrequencyRegistry::new(min_length);
		let generations = GenerationalExpander::new(&self.options).run(&index, &mut registry);

		let recorded = registry.len();
		let pruned = registry.prune();
		info!(
			"mined {} names in {} generations: {} words kept, {} pruned",
			index.indexed(),
			generations.len(),
			recorded - pruned,
			pruned
		);

		Ok(MiningReport { counts: registry.into_counts(), generations, pruned })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_names_give_empty_result() {
		let names: Vec<String> = Vec::new();
		let report = Miner::default().mine_with_report(&names).unwrap();
		assert!(report.counts.is_empty());
		assert!(report.generations.is_empty());
	}

	#[test]
	fn invalid_min_length_fails_before_mining() {
		assert!(matches!(mine(&["anna"], 0, 1), Err(MineError::InvalidMinLength(0))));
	}

	#[test]
	fn reports_pruned_words() {
		let names = ["marie", "maria", "mario"];
		let report = Miner::new(MiningOptions::new(2, 2).unwrap()).mine_with_report(&names).unwrap();
		assert_eq!(report.counts.len(), 1);
		assert_eq!(report.counts.get("mari"), Some(&3));
		// ma, ar, ri, mar, ari
		assert_eq!(report.pruned, 5);
	}
}
