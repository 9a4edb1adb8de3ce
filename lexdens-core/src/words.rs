use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::io::read_word_list;

/// Built-in non-lexical word list.
///
/// Entries are matched exactly, so capitalised `I` and lowercase words are
/// both kept as written. `that` appears twice in the source list; the
/// snapshot deduplicates it.
pub const SEED_WORDS: &[&str] = &[
	"to", "got", "is", "have", "and", "although", "or", "that", "when", "while", "a",
	"either", "more", "much", "neither", "my", "that", "the", "as", "no", "nor", "not",
	"at", "between", "in", "of", "without", "I", "you", "he", "she", "it", "we", "they",
	"anybody", "one",
];

fn seed_entries() -> impl Iterator<Item = String> {
	SEED_WORDS.iter().map(|w| (*w).to_owned())
}

/// A source able to list every non-lexical word.
///
/// The snapshot is built from a store once at startup (and again on an
/// explicit reload); request handling never touches the store.
pub trait WordStore: Send + Sync {
	/// Lists all entries held by the store.
	///
	/// # Errors
	/// Returns `Error::StoreUnavailable` if the store cannot be read.
	fn load(&self) -> Result<Vec<String>>;

	/// Human readable description used in logs.
	fn describe(&self) -> String;
}

/// Store backed by [`SEED_WORDS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedStore;

impl WordStore for SeedStore {
	fn load(&self) -> Result<Vec<String>> {
		Ok(seed_entries().collect())
	}

	fn describe(&self) -> String {
		"built-in seed list".to_owned()
	}
}

/// Store backed by a text file holding one word per line.
///
/// Blank lines and lines starting with `#` are ignored.
#[derive(Debug, Clone)]
pub struct FileStore {
	path: PathBuf,
}

impl FileStore {
	pub fn new<P: AsRef<Path>>(path: P) -> Self {
		Self { path: path.as_ref().to_path_buf() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl WordStore for FileStore {
	fn load(&self) -> Result<Vec<String>> {
		read_word_list(&self.path)
			.map_err(|e| Error::StoreUnavailable(format!("{}: {e}", self.path.display())))
	}

	fn describe(&self) -> String {
		format!("word file {}", self.path.display())
	}
}

/// Read-only snapshot of non-lexical words.
///
/// # Invariants
/// - Never mutated once built; a reload produces a new snapshot
/// - Membership is exact and case-sensitive (`"The"` does not match `"the"`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NonLexicalWords {
	words: HashSet<String>,
}

impl NonLexicalWords {
	/// Builds a snapshot from any list of entries. Duplicates collapse.
	pub fn from_entries<I, S>(entries: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { words: entries.into_iter().map(Into::into).collect() }
	}

	/// Snapshot of the built-in seed list.
	pub fn seed() -> Self {
		Self::from_entries(seed_entries())
	}

	/// Builds a snapshot from a store.
	///
	/// # Errors
	/// - Propagates the store error if it cannot be read.
	/// - Returns `Error::StoreUnavailable` if the store is empty, since an empty
	///   snapshot would silently disable filtering.
	pub fn load(store: &dyn WordStore) -> Result<Self> {
		let words = Self::from_entries(store.load()?);
		if words.is_empty() {
			return Err(Error::StoreUnavailable(format!("{} holds no words", store.describe())));
		}
		Ok(words)
	}

	/// Returns `true` if `token` is a non-lexical word.
	pub fn contains(&self, token: &str) -> bool {
		self.words.contains(token)
	}

	/// Lists every entry, sorted for stable output.
	pub fn all_entries(&self) -> Vec<&str> {
		let mut entries: Vec<&str> = self.words.iter().map(String::as_str).collect();
		entries.sort_unstable();
		entries
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}
