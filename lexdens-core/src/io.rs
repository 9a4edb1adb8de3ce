use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a word list file and returns one entry per line.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Trims surrounding whitespace, skips blank lines and `#` comments
pub(crate) fn read_word_list<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty() && !line.starts_with('#'))
		.map(str::to_owned)
		.collect())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn skips_comments_and_blank_lines() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "# filler words").unwrap();
		writeln!(file, "the").unwrap();
		writeln!(file).unwrap();
		writeln!(file, "  of  \r").unwrap();

		let words = read_word_list(file.path()).unwrap();
		assert_eq!(words, vec!["the".to_owned(), "of".to_owned()]);
	}

	#[test]
	fn missing_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		assert!(read_word_list(dir.path().join("absent.txt")).is_err());
	}
}
