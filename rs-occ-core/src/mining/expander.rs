use std::sync::mpsc;
use std::thread;

use log::{debug, trace};

use super::letter_set::LetterSet;
use super::name_index::NameIndex;
use super::options::{Branching, MiningOptions};
use super::registry::FrequencyRegistry;

/// Frontiers smaller than this are expanded on the calling thread.
const PARALLEL_THRESHOLD: usize = 64;

/// Words at or below this length are extended with the whole alphabet.
const FULL_BRANCHING_LENGTH: usize = 2;

/// Search state of a surviving word.
///
/// # Invariants
/// - `eligible` is a subset of the eligible names of the word it was
///   extended from
/// - Every name in `eligible` contains the word, and its first occurrence
///   is followed by a letter
#[derive(Clone, Debug)]
pub struct Branch<'a> {
	/// Names that may still contain a longer version of the word.
	pub eligible: Vec<&'a str>,

	/// Letters observed right after any occurrence of the word in its
	/// eligible names. `None` for single-letter seeds.
	pub next_letters: Option<LetterSet>,
}

/// Words of a given length that survived their generation.
///
/// A frontier is built once per generation and never modified afterwards;
/// the next generation is a new value.
#[derive(Clone, Debug)]
pub struct Frontier<'a> {
	length: usize,
	words: Vec<(String, Branch<'a>)>,
}

impl<'a> Frontier<'a> {
	fn new(length: usize) -> Self {
		Self { length, words: Vec::new() }
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn words(&self) -> impl Iterator<Item = (&str, &Branch<'a>)> {
		self.words.iter().map(|(word, branch)| (word.as_str(), branch))
	}

	/// Total size of all eligibility sets in this frontier.
	pub fn eligibility(&self) -> usize {
		self.words.iter().map(|(_, branch)| branch.eligible.len()).sum()
	}

	/// Summary of this frontier for reporting.
	pub fn stats(&self) -> GenerationStats {
		GenerationStats {
			length: self.length,
			words: self.words.len(),
			eligibility: self.eligibility(),
		}
	}
}

/// Size of one generation's frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationStats {
	/// Word length of the generation.
	pub length: usize,
	/// Number of words carried to the next generation.
	pub words: usize,
	/// Summed size of the eligibility sets of those words.
	pub eligibility: usize,
}

/// Result of expanding one frontier: the next frontier and every word that
/// reached the occurrence threshold.
#[derive(Debug)]
pub struct Expansion<'a> {
	pub frontier: Frontier<'a>,
	pub counts: Vec<(String, usize)>,
}

impl<'a> Expansion<'a> {
	fn new(length: usize) -> Self {
		Self { frontier: Frontier::new(length), counts: Vec::new() }
	}

	fn absorb(&mut self, other: Expansion<'a>) {
		self.frontier.words.extend(other.frontier.words);
		self.counts.extend(other.counts);
	}
}

/// Breadth-first word expander.
///
/// Grows words one letter at a time, generation by generation. Each name
/// contributes at most 1 to the count of a word: only the first occurrence
/// of the word in the name decides whether the name is counted and whether
/// it stays eligible.
///
/// # Responsibilities
/// - Seed the first frontier from a `NameIndex`
/// - Expand a frontier into the next one, pruning branches that cannot
///   reach the occurrence threshold anymore
/// - Feed qualifying words to a `FrequencyRegistry`
#[derive(Debug)]
pub struct GenerationalExpander {
	min_length: usize,
	threshold: usize,
	branching: Branching,
	threads: usize,
}

impl GenerationalExpander {
	pub fn new(options: &MiningOptions) -> Self {
		Self {
			min_length: options.min_length(),
			threshold: options.occurrence_threshold(),
			branching: options.branching,
			threads: options.threads.max(1),
		}
	}

	/// Builds the single-letter frontier from the index.
	///
	/// Letters found in fewer names than the threshold are left out: no
	/// longer word can occur in more names than its first letter.
	pub fn seed<'a>(&self, index: &NameIndex<'a>) -> Frontier<'a> {
		let mut frontier = Frontier::new(1);
		for (letter, names) in index.iter() {
			if names.len() < self.threshold {
				continue;
			}
			let branch = Branch { eligible: names.to_vec(), next_letters: None };
			frontier.words.push(((letter as char).to_string(), branch));
		}
		frontier
	}

	/// Expands every word of `frontier` by one letter.
	///
	/// # Notes
	/// - Large frontiers are split in contiguous chunks expanded on scoped
	///   worker threads; the chunk results are merged back in word order.
	/// - The input frontier is only read.
	pub fn expand<'a>(&self, frontier: &Frontier<'a>) -> Expansion<'a> {
		let length = frontier.length + 1;

		if self.threads < 2 || frontier.words.len() < PARALLEL_THRESHOLD {
			let mut expansion = Expansion::new(length);
			for (word, branch) in &frontier.words {
				self.expand_branch(word, branch, frontier.length, &mut expansion);
			}
			return expansion;
		}

		let chunk_size = frontier.words.len().div_ceil(self.threads);
		let (tx, rx) = mpsc::channel();
		thread::scope(|scope| {
			for chunk in frontier.words.chunks(chunk_size) {
				let tx = tx.clone();
				scope.spawn(move || {
					let mut partial = Expansion::new(length);
					for (word, branch) in chunk {
						self.expand_branch(word, branch, frontier.length, &mut partial);
					}
					tx.send(partial).expect("Receiver outlives the worker scope");
				});
			}
		});
		drop(tx);

		let mut expansion = Expansion::new(length);
		for partial in rx.iter() {
			expansion.absorb(partial);
		}
		expansion.frontier.words.sort_unstable_by(|a, b| a.0.cmp(&b.0));
		expansion
	}

	/// Tries every candidate extension of a single word.
	///
	/// For each candidate `word + letter`, scans the eligible names of `word`:
	/// - a name containing the candidate adds 1 to its count
	/// - the name stays eligible only if that first occurrence is followed by
	///   a letter
	/// - the letters following every occurrence in an eligible name form the
	///   candidate's next letters, so limiting branching to them never skips
	///   an extension the full alphabet would find
	///
	/// A candidate below the threshold is discarded. Otherwise it is reported
	/// (if long enough) and carried forward when it still has next letters
	/// and enough eligible names to reach the threshold again.
	fn expand_branch<'a>(&self, word: &str, branch: &Branch<'a>, length: usize, out: &mut Expansion<'a>) {
		let candidates = match (self.branching, branch.next_letters) {
			(Branching::NextLetters, Some(letters)) if length > FULL_BRANCHING_LENGTH => letters,
			_ => LetterSet::ALPHABET,
		};

		for letter in candidates.iter() {
			let mut candidate = String::with_capacity(word.len() + 1);
			candidate.push_str(word);
			candidate.push(letter as char);

			let mut count = 0;
			let mut eligible = Vec::new();
			let mut next_letters = LetterSet::new();
			for &name in &branch.eligible {
				let Some(at) = name.find(candidate.as_str()) else {
					continue;
				};
				count += 1;
				if !follows_with_letter(name, at + candidate.len()) {
					continue;
				}
				eligible.push(name);
				// Later occurrences can lead to extensions the first one cannot.
				for (later, _) in name[at..].match_indices(candidate.as_str()) {
					if let Some(&follower) = name.as_bytes().get(at + later + candidate.len()) {
						next_letters.insert(follower);
					}
				}
			}

			if count < self.threshold {
				continue;
			}
			trace!("{candidate}: {count} names, {} still eligible", eligible.len());

			if length + 1 >= self.min_length {
				out.counts.push((candidate.clone(), count));
			}
			// A later word can never occur in more names than are eligible now.
			if !next_letters.is_empty() && eligible.len() >= self.threshold {
				out.frontier.words.push((candidate, Branch { eligible, next_letters: Some(next_letters) }));
			}
		}
	}

	/// Runs every generation, recording qualifying words into `registry`.
	///
	/// Returns the statistics of each frontier, starting with the seeds.
	///
	/// # Notes
	/// - With `min_length == 1`, single-letter counts are read directly from
	///   the index list sizes.
	/// - Only the current frontier is kept alive; the previous one is
	///   released as soon as the next one is built.
	pub fn run(&self, index: &NameIndex<'_>, registry: &mut FrequencyRegistry) -> Vec<GenerationStats> {
		let mut frontier = self.seed(index);

		if self.min_length == 1 {
			for (letter, names) in index.iter() {
				if names.len() >= self.threshold {
					registry.record((letter as char).to_string(), names.len());
				}
			}
		}

		let mut generations = Vec::new();
		while !frontier.is_empty() {
			let stats = frontier.stats();
			debug!(
				"generation {}: {} words, {} eligible names",
				stats.length, stats.words, stats.eligibility
			);
			generations.push(stats);

			let expansion = self.expand(&frontier);
			for (word, count) in expansion.counts {
				registry.record(word, count);
			}
			frontier = expansion.frontier;
		}
		generations
	}
}

/// Whether the byte at `at` exists and is a lowercase latin letter.
fn follows_with_letter(name: &str, at: usize) -> bool {
	name.as_bytes().get(at).is_some_and(u8::is_ascii_lowercase)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn expander(min_length: usize, min_occurrences: usize) -> GenerationalExpander {
		let mut options = MiningOptions::new(min_length, min_occurrences).unwrap();
		options.threads = 1;
		GenerationalExpander::new(&options)
	}

	#[test]
	fn seeds_only_frequent_letters() {
		let names = ["alice", "alisha", "bob"];
		let index = NameIndex::build(&names, 1);
		let frontier = expander(1, 2).seed(&index);
		let words: Vec<&str> = frontier.words().map(|(word, _)| word).collect();
		assert_eq!(words, vec!["a", "i", "l"]);
		assert_eq!(frontier.eligibility(), 6);
	}

	#[test]
	fn drops_names_whose_occurrence_ends_the_name() {
		let names = ["anna", "hanna", "ann"];
		let index = NameIndex::build(&names, 1);
		let expander = expander(2, 2);
		let seeds = expander.seed(&index);
		let expansion = expander.expand(&seeds);

		let (_, branch) = expansion.frontier.words().find(|(word, _)| *word == "nn").unwrap();
		// "ann" ends right after "nn"
		assert_eq!(branch.eligible, vec!["anna", "hanna"]);
		assert_eq!(branch.next_letters.map(|letters| letters.iter().collect::<Vec<_>>()), Some(vec![b'a']));
		assert!(expansion.counts.contains(&("nn".to_owned(), 3)));
	}

	#[test]
	fn next_letters_cover_later_occurrences() {
		let names = ["abcxabcy", "abczabcy"];
		let index = NameIndex::build(&names, 1);
		let expander = expander(2, 2);
		let second = expander.expand(&expander.seed(&index));
		let third = expander.expand(&second.frontier);

		let (_, branch) = third.frontier.words().find(|(word, _)| *word == "abc").unwrap();
		let letters: Vec<u8> = branch.next_letters.map(|letters| letters.iter().collect()).unwrap_or_default();
		assert_eq!(letters, b"xyz".to_vec());

		let fourth = expander.expand(&third.frontier);
		assert!(fourth.counts.contains(&("abcy".to_owned(), 2)));
	}

	#[test]
	fn counts_a_name_once_even_with_repeats() {
		let names = ["lala", "lalala", "al"];
		let index = NameIndex::build(&names, 2);
		let mut registry = FrequencyRegistry::new(2);
		expander(2, 1).run(&index, &mut registry);
		assert_eq!(registry.get("la"), Some(2));
		assert_eq!(registry.get("al"), Some(3));
		assert_eq!(registry.get("lala"), Some(2));
	}

	#[test]
	fn non_letters_break_words() {
		let names = ["jo-jo", "jo jo"];
		let index = NameIndex::build(&names, 1);
		let mut registry = FrequencyRegistry::new(1);
		expander(1, 2).run(&index, &mut registry);
		assert_eq!(registry.get("jo"), Some(2));
		assert!(registry.iter().all(|(word, _)| word.bytes().all(|b| b.is_ascii_lowercase())));
	}

	#[test]
	fn stops_when_no_word_survives() {
		let names = ["abc", "xyz"];
		let index = NameIndex::build(&names, 1);
		let mut registry = FrequencyRegistry::new(1);
		let generations = expander(1, 2).run(&index, &mut registry);
		assert!(generations.is_empty());
		assert!(registry.is_empty());
	}
}
