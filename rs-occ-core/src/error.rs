use thiserror::Error;

/// Errors raised by the miner and the corpus loader.
#[derive(Debug, Error)]
pub enum MineError {
	/// A minimum substring length of zero was requested.
	#[error("minimum length must be >= 1, got {0}")]
	InvalidMinLength(usize),

	/// Reading the name list or writing its cache failed.
	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),

	/// The binary cache could not be encoded or decoded.
	#[error("cache error: {0}")]
	Cache(#[from] postcard::Error),

	/// A corpus path has no file name to derive the cache from.
	#[error("path has no file name: {0}")]
	EmptyPath(String),
}
