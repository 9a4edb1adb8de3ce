use std::sync::{Arc, RwLock};

use lexdens_core::validator::Limits;
use lexdens_core::words::{NonLexicalWords, WordStore};

use crate::error::ApiError;

/// State shared by every worker.
///
/// The word snapshot sits behind an `Arc` so a request only holds the lock
/// long enough to clone it; scoring itself runs lock-free.
pub struct SharedData {
	words: RwLock<Arc<NonLexicalWords>>,
	reload_source: Option<Box<dyn WordStore>>,
	pub limits: Limits,
}

impl SharedData {
	pub fn new(words: NonLexicalWords, reload_source: Option<Box<dyn WordStore>>, limits: Limits) -> Self {
		Self { words: RwLock::new(Arc::new(words)), reload_source, limits }
	}

	/// Current word snapshot.
	pub fn words(&self) -> Result<Arc<NonLexicalWords>, ApiError> {
		self.words.read().map(|w| Arc::clone(&w)).map_err(|_| ApiError::LockFailed)
	}

	/// Rebuilds the snapshot from the reload source and swaps it in.
	///
	/// On failure the previous snapshot stays in place.
	///
	/// # Errors
	/// - `ApiError::NoWordFile` if the server was started without a word file.
	/// - The store error if the new list cannot be loaded.
	pub fn reload(&self) -> Result<usize, ApiError> {
		let source = self.reload_source.as_ref().ok_or(ApiError::NoWordFile)?;
		let fresh = NonLexicalWords::load(source.as_ref())?;
		let count = fresh.len();

		let mut current = self.words.write().map_err(|_| ApiError::LockFailed)?;
		*current = Arc::new(fresh);
		log::info!("Reloaded {count} non-lexical words from {}", source.describe());
		Ok(count)
	}
}
