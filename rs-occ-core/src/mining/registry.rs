use std::collections::{HashMap, HashSet};

/// Word to occurrence count table.
///
/// The registry receives every word that reached the occurrence threshold
/// and, once mining is complete, drops the words that carry no extra
/// information.
///
/// # Pruning rule
/// A word `w` is kept if and only if no strictly longer recorded word
/// containing `w` has the same count. Counts are first-match per name and
/// names whose first occurrence hits a non-letter stop being searched, so
/// a longer word can end up with a higher count than one of its substrings
/// (`xybc` over `ybc` in `["yb-xybc", "xybc"]`). Every recorded substring is
/// therefore compared, not only the one-letter neighbours.
///
/// # Invariants
/// - Only words of at least `min_length` characters are stored
#[derive(Debug, Default)]
pub struct FrequencyRegistry {
	min_length: usize,
	counts: HashMap<String, usize>,
}

impl FrequencyRegistry {
	pub fn new(min_length: usize) -> Self {
		Self { min_length, counts: HashMap::new() }
	}

	/// Records the count of a word.
	///
	/// Returns `false` (and stores nothing) if the word is shorter than
	/// `min_length`.
	pub fn record(&mut self, word: String, count: usize) -> bool {
		if word.len() < self.min_length {
			return false;
		}
		self.counts.insert(word, count);
		true
	}

	pub fn get(&self, word: &str) -> Option<usize> {
		self.counts.get(word).copied()
	}

	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
		self.counts.iter().map(|(word, count)| (word.as_str(), *count))
	}

	/// Removes every word contained in a longer recorded word with the same count.
	///
	/// Returns the number of removed words.
	///
	/// # Notes
	/// - Each recorded word is split into all its shorter substrings of at
	///   least `min_length` letters, each looked up in the table.
	/// - Redundant words are collected first and removed afterwards, so a
	///   removal never hides another comparison.
	pub fn prune(&mut self) -> usize {
		let min_length = self.min_length.max(1);
		let mut redundant: HashSet<&str> = HashSet::new();

		for (word, &count) in &self.counts {
			let length = word.len();
			for start in 0..length {
				for end in (start + min_length)..=length {
					if end - start == length {
						continue;
					}
					let shorter = &word[start..end];
					if self.counts.get(shorter) == Some(&count) {
						redundant.insert(shorter);
					}
				}
			}
		}

		let redundant: Vec<String> = redundant.into_iter().map(str::to_owned).collect();
		for word in &redundant {
			self.counts.remove(word);
		}
		redundant.len()
	}

	/// Consumes the registry and returns the word counts.
	pub fn into_counts(self) -> HashMap<String, usize> {
		self.counts
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn registry(min_length: usize, entries: &[(&str, usize)]) -> FrequencyRegistry {
		let mut registry = FrequencyRegistry::new(min_length);
		for (word, count) in entries {
			registry.record((*word).to_owned(), *count);
		}
		registry
	}

	#[test]
	fn refuses_words_below_min_length() {
		let mut registry = FrequencyRegistry::new(3);
		assert!(!registry.record("ab".to_owned(), 4));
		assert!(registry.record("abc".to_owned(), 4));
		assert_eq!(registry.len(), 1);
	}

	#[test]
	fn prunes_prefix_and_suffix_with_same_count() {
		let mut registry = registry(2, &[("al", 3), ("li", 3), ("ali", 3), ("is", 2), ("lis", 2), ("alis", 2)]);
		assert_eq!(registry.prune(), 4);

		let counts = registry.into_counts();
		assert_eq!(counts.len(), 2);
		assert_eq!(counts.get("ali"), Some(&3));
		assert_eq!(counts.get("alis"), Some(&2));
	}

	#[test]
	fn keeps_shorter_word_with_higher_count() {
		let mut registry = registry(1, &[("a", 5), ("ab", 3), ("b", 3)]);
		assert_eq!(registry.prune(), 1);
		assert_eq!(registry.get("a"), Some(5));
		assert_eq!(registry.get("ab"), Some(3));
		assert_eq!(registry.get("b"), None);
	}

	#[test]
	fn drops_substrings_deep_inside_a_longer_word() {
		// "bcy" is not a one-letter neighbour of "abcxabcy"
		let mut registry = registry(2, &[("bcy", 2), ("abcxabcy", 2), ("xa", 3)]);
		assert_eq!(registry.prune(), 1);
		assert_eq!(registry.get("bcy"), None);
		assert_eq!(registry.get("abcxabcy"), Some(2));
		assert_eq!(registry.get("xa"), Some(3));
	}

	#[test]
	fn longer_word_with_higher_count_keeps_the_shorter_one() {
		let mut registry = registry(2, &[("ybc", 1), ("xybc", 2), ("xyb", 2)]);
		assert_eq!(registry.prune(), 1);
		assert_eq!(registry.get("ybc"), Some(1));
		assert_eq!(registry.get("xyb"), None);
	}

	#[test]
	fn chains_collapse_to_the_longest_word() {
		let mut registry = registry(2, &[("ma", 4), ("mar", 4), ("mari", 4), ("ar", 4), ("ari", 4), ("ri", 4)]);
		registry.prune();
		let counts = registry.into_counts();
		assert_eq!(counts.len(), 1);
		assert_eq!(counts.get("mari"), Some(&4));
	}
}
