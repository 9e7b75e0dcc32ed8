use super::letter_set::{LetterSet, ALPHABET_SIZE};

/// Per-letter eligibility lists built from a raw name list.
///
/// For each letter `a`..=`z`, `NameIndex` keeps the names containing that
/// letter at least once, in input order. These lists are the eligibility
/// sets of the single-letter words and seed the first generation of the
/// expansion.
///
/// # Invariants
/// - Names shorter than `min_length` (in characters) are never indexed
/// - A name appears at most once in each list
#[derive(Debug)]
pub struct NameIndex<'a> {
	/// Number of names that passed the length filter.
	indexed: usize,
	letters: [Vec<&'a str>; ALPHABET_SIZE],
}

impl<'a> NameIndex<'a> {
	/// Builds the index from `names`, discarding names shorter than `min_length`.
	///
	/// # Notes
	/// - Characters outside `a`..=`z` are ignored, they never open a list.
	/// - Length is measured in characters, not bytes.
	pub fn build<S: AsRef<str>>(names: &'a [S], min_length: usize) -> Self {
		let mut letters: [Vec<&'a str>; ALPHABET_SIZE] = std::array::from_fn(|_| Vec::new());
		let mut indexed = 0;

		for name in names.iter().map(AsRef::as_ref) {
			if name.chars().count() < min_length {
				continue;
			}
			indexed += 1;

			let present: LetterSet = name.bytes().collect();
			for letter in present.iter() {
				letters[(letter - b'a') as usize].push(name);
			}
		}

		Self { indexed, letters }
	}

	/// Number of names kept after the length filter.
	pub fn indexed(&self) -> usize {
		self.indexed
	}

	/// Names containing `letter`, in input order.
	///
	/// Returns an empty slice for bytes outside `a`..=`z`.
	pub fn names_with(&self, letter: u8) -> &[&'a str] {
		if !letter.is_ascii_lowercase() {
			return &[];
		}
		&self.letters[(letter - b'a') as usize]
	}

	/// Number of names containing `letter`.
	///
	/// This is the exact count of the single-letter word, so a search for
	/// words of length 1 never needs to scan names again.
	pub fn count(&self, letter: u8) -> usize {
		self.names_with(letter).len()
	}

	/// Iterates over the letters having at least one name, with their lists.
	pub fn iter(&self) -> impl Iterator<Item = (u8, &[&'a str])> {
		self.letters
			.iter()
			.enumerate()
			.filter(|(_, names)| !names.is_empty())
			.map(|(offset, names)| (b'a' + offset as u8, names.as_slice()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn drops_names_shorter_than_min_length() {
		let names = ["al", "alice", "bob"];
		let index = NameIndex::build(&names, 3);
		assert_eq!(index.indexed(), 2);
		assert_eq!(index.names_with(b'a'), &["alice"]);
		assert_eq!(index.names_with(b'b'), &["bob"]);
	}

	#[test]
	fn lists_each_name_once_per_letter() {
		let names = vec!["anna".to_owned(), "hannah".to_owned(), "bob".to_owned()];
		let index = NameIndex::build(&names, 1);
		assert_eq!(index.count(b'a'), 2);
		assert_eq!(index.count(b'n'), 2);
		assert_eq!(index.count(b'h'), 1);
		assert_eq!(index.count(b'b'), 1);
		assert_eq!(index.count(b'z'), 0);
	}

	#[test]
	fn ignores_characters_outside_the_alphabet() {
		let names = ["jean-luc", "zoë"];
		let index = NameIndex::build(&names, 1);
		assert_eq!(index.count(b'-'), 0);
		assert_eq!(index.names_with(b'z'), &["zoë"]);
		let letters: Vec<u8> = index.iter().map(|(letter, _)| letter).collect();
		assert_eq!(letters, b"acejlnouz".to_vec());
	}
}
