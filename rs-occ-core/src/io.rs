use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::MineError;

/// Reads a name list, one name per line.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n` and trims surrounding whitespace
/// - Skips blank lines
pub(crate) fn read_names<P: AsRef<Path>>(filename: P) -> Result<Vec<String>, MineError> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect())
}

/// Builds the path of the binary cache sitting next to a name list.
///
/// Example:
/// `data/names.txt` → `data/names.bin`
pub(crate) fn cache_path<P: AsRef<Path>>(source: P) -> Result<PathBuf, MineError> {
	let source = source.as_ref();

	let parent = source.parent().unwrap_or_else(|| Path::new("."));
	let stem = source
		.file_stem()
		.ok_or_else(|| MineError::EmptyPath(source.display().to_string()))?;

	let mut cache = PathBuf::from(parent);
	cache.push(stem);
	cache.set_extension("bin");

	Ok(cache)
}
