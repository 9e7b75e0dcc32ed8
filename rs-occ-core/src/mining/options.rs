use crate::error::MineError;

/// Occurrence threshold used when none is configured.
pub const DEFAULT_MIN_OCCURRENCES: usize = 2;

/// Strategy used to choose the letters appended to a word.
///
/// # Variants
/// - `NextLetters`: past the second generation, only try the letters seen
///   right after an occurrence of the word.
/// - `FullAlphabet`: always try all 26 letters. Slower, kept as a
///   reference for differential testing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Branching {
	#[default]
	NextLetters,
	FullAlphabet,
}

/// Mining parameters.
///
/// # Responsibilities
/// - Hold the length and occurrence thresholds
/// - Select the branching strategy and the number of worker threads
///
/// # Invariants
/// - `min_length` is always >= 1
#[derive(Clone, Debug)]
pub struct MiningOptions {
	/// Minimum length of a reported word.
	min_length: usize,

	/// Minimum number of names a word must occur in. `0` behaves like `1`.
	pub min_occurrences: usize,

	/// Letter selection strategy for extensions.
	pub branching: Branching,

	/// Worker threads used to expand a generation. `0` and `1` both mean
	/// "expand on the calling thread".
	pub threads: usize,
}

impl MiningOptions {
	/// Creates options with the given thresholds and default strategy.
	///
	/// # Errors
	/// Returns `MineError::InvalidMinLength` if `min_length < 1`.
	pub fn new(min_length: usize, min_occurrences: usize) -> Result<Self, MineError> {
		let mut options = Self::default();
		options.set_min_length(min_length)?;
		options.min_occurrences = min_occurrences;
		Ok(options)
	}

	pub fn min_length(&self) -> usize {
		self.min_length
	}

	/// Sets the minimum reported word length.
	///
	/// # Errors
	/// Returns an error if `min_length` is 0.
	pub fn set_min_length(&mut self, min_length: usize) -> Result<(), MineError> {
		if min_length < 1 {
			return Err(MineError::InvalidMinLength(min_length));
		}
		self.min_length = min_length;
		Ok(())
	}

	/// Effective occurrence threshold, the comparison being `count >= threshold`.
	pub fn occurrence_threshold(&self) -> usize {
		self.min_occurrences.max(1)
	}
}

impl Default for MiningOptions {
	fn default() -> Self {
		Self {
			min_length: 1,
			min_occurrences: DEFAULT_MIN_OCCURRENCES,
			branching: Branching::default(),
			threads: num_cpus::get(),
		}
	}
}
