/// Number of letters in the latin alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Set of lowercase latin letters stored as a 26-bit mask.
///
/// Used for next-letter sets: the distinct letters seen right after an
/// occurrence of a word. Iteration is always in alphabetical order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct LetterSet(u32);

impl LetterSet {
	/// Every letter from `a` to `z`.
	pub const ALPHABET: LetterSet = LetterSet((1 << ALPHABET_SIZE) - 1);

	/// Creates an empty set.
	pub fn new() -> Self {
		Self(0)
	}

	/// Adds a letter to the set.
	///
	/// Returns `false` if `letter` is not in `a..=z` or already present.
	pub fn insert(&mut self, letter: u8) -> bool {
		if !letter.is_ascii_lowercase() {
			return false;
		}
		let bit = 1 << (letter - b'a');
		let added = (self.0 & bit) == 0;
		self.0 |= bit;
		added
	}

	pub fn len(&self) -> usize {
		self.0.count_ones() as usize
	}

	pub fn is_empty(&self) -> bool {
		self.0 == 0
	}

	/// Iterates over the letters (as ASCII bytes) in alphabetical order.
	pub fn iter(&self) -> impl Iterator<Item = u8> + use<> {
		let mask = self.0;
		(0..ALPHABET_SIZE as u8)
			.filter(move |&offset| (mask & (1 << offset)) != 0)
			.map(|offset| b'a' + offset)
	}
}

impl FromIterator<u8> for LetterSet {
	fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
		let mut set = LetterSet::new();
		for letter in iter {
			set.insert(letter);
		}
		set
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ignores_non_latin_bytes() {
		let mut set = LetterSet::new();
		assert!(!set.insert(b'A'));
		assert!(!set.insert(b'-'));
		assert!(!set.insert(0xC3));
		assert!(set.is_empty());
	}

	#[test]
	fn iterates_in_alphabetical_order() {
		let set: LetterSet = "zebra".bytes().collect();
		assert_eq!(set.iter().collect::<Vec<_>>(), b"aberz".to_vec());
		assert_eq!(set.len(), 5);
		assert!(!set.iter().any(|letter| letter == b'q'));
	}

	#[test]
	fn alphabet_holds_every_letter() {
		assert_eq!(LetterSet::ALPHABET.len(), ALPHABET_SIZE);
		assert_eq!(LetterSet::ALPHABET.iter().next(), Some(b'a'));
		assert_eq!(LetterSet::ALPHABET.iter().last(), Some(b'z'));
	}
}
