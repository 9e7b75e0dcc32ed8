use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::MineError;
use crate::io::{cache_path, read_names};

/// An in-memory list of names to mine.
///
/// Names are kept as given: no lowercasing and no filtering of characters,
/// anything outside `a`..=`z` simply breaks words during mining.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct NameCorpus {
	names: Vec<String>,

	/// Text file the names were read from, if any.
	#[serde(skip)]
	source: Option<PathBuf>,
}

impl NameCorpus {
	/// Creates a corpus from names already in memory.
	pub fn from_names<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { names: names.into_iter().map(Into::into).collect(), source: None }
	}

	/// Loads a corpus from a text file (one name per line), using a binary cache.
	///
	/// - The cache is `<stem>.bin` in the same folder as `filepath`.
	/// - If the cache exists, it is decoded with `postcard` and the text
	///   file is not read.
	/// - Otherwise the text file is read and the cache is written for the
	///   next run.
	/// - A cache that cannot be decoded is rebuilt from the text file.
	///
	/// # Errors
	/// Returns an error if the text file cannot be read or the cache cannot
	/// be written.
	pub fn load<P: AsRef<Path>>(filepath: P) -> Result<Self, MineError> {
		let source = filepath.as_ref();
		let cache = cache_path(source)?;

		if cache.exists() {
			match Self::read_cache(&cache) {
				Ok(mut corpus) => {
					info!("loaded {} names from cache {}", corpus.len(), cache.display());
					corpus.source = Some(source.to_path_buf());
					return Ok(corpus);
				}
				Err(e) => warn!("ignoring unreadable cache {}: {e}", cache.display()),
			}
		}

		let corpus = Self { names: read_names(source)?, source: Some(source.to_path_buf()) };
		corpus.write_cache(&cache)?;
		info!("loaded {} names from {}, cached to {}", corpus.len(), source.display(), cache.display());
		Ok(corpus)
	}

	fn read_cache(cache: &Path) -> Result<Self, MineError> {
		let bytes = std::fs::read(cache)?;
		Ok(postcard::from_bytes(&bytes)?)
	}

	fn write_cache(&self, cache: &Path) -> Result<(), MineError> {
		let bytes = postcard::to_stdvec(self)?;
		std::fs::write(cache, bytes)?;
		Ok(())
	}

	pub fn names(&self) -> &[String] {
		&self.names
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	/// Text file this corpus was loaded from.
	pub fn source(&self) -> Option<&Path> {
		self.source.as_deref()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn writes_and_reuses_the_cache() {
		let dir = tempfile::tempdir().unwrap();
		let source = dir.path().join("names.txt");
		std::fs::write(&source, "alice\nalisha\nalison\nbob\n").unwrap();

		let corpus = NameCorpus::load(&source).unwrap();
		assert_eq!(corpus.names(), &["alice", "alisha", "alison", "bob"]);
		assert_eq!(corpus.source(), Some(source.as_path()));
		assert!(dir.path().join("names.bin").exists());

		// The cache is used even once the text file is gone.
		std::fs::remove_file(&source).unwrap();
		let cached = NameCorpus::load(&source).unwrap();
		assert_eq!(cached.names(), corpus.names());
	}

	#[test]
	fn rebuilds_a_corrupt_cache() {
		let dir = tempfile::tempdir().unwrap();
		let source = dir.path().join("bots.txt");
		std::fs::write(&source, "nightbot\nmoobot\n").unwrap();
		std::fs::write(dir.path().join("bots.bin"), [0xff, 0xff, 0xff]).unwrap();

		let corpus = NameCorpus::load(&source).unwrap();
		assert_eq!(corpus.len(), 2);
		assert_eq!(NameCorpus::load(&source).unwrap().names(), corpus.names());
	}

	#[test]
	fn missing_source_is_an_io_error() {
		let dir = tempfile::tempdir().unwrap();
		let result = NameCorpus::load(dir.path().join("missing.txt"));
		assert!(matches!(result, Err(MineError::Io(_))));
	}

	#[test]
	fn builds_from_memory() {
		let corpus = NameCorpus::from_names(["anna", "bob"]);
		assert_eq!(corpus.len(), 2);
		assert!(corpus.source().is_none());
		assert!(NameCorpus::default().is_empty());
	}
}
