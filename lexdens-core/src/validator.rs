use crate::error::{Error, Result};
use crate::tokenizer::word_count;

/// Exclusive upper bounds on a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
	/// Submissions must hold fewer characters than this.
	pub max_chars: usize,
	/// Submissions must hold fewer space-delimited words than this.
	pub max_words: usize,
}

impl Default for Limits {
	fn default() -> Self {
		Self { max_chars: 1000, max_words: 100 }
	}
}

/// Decodes a raw request body as UTF-8.
///
/// # Errors
/// Returns `Error::InvalidEncoding` if the bytes are not valid UTF-8.
pub fn decode_payload(bytes: &[u8]) -> Result<&str> {
	Ok(std::str::from_utf8(bytes)?)
}

/// Checks a submission against `limits` before any scoring happens.
///
/// Characters are counted as Unicode scalar values and words with the
/// space tokenizer. Reaching a limit exactly is already a rejection.
///
/// # Errors
/// Returns `Error::PayloadTooLarge` naming the first limit reached.
pub fn validate(text: &str, limits: &Limits) -> Result<()> {
	let chars = text.chars().count();
	if chars >= limits.max_chars {
		return Err(Error::PayloadTooLarge { measure: "characters", actual: chars, limit: limits.max_chars });
	}

	let words = word_count(text);
	if words >= limits.max_words {
		return Err(Error::PayloadTooLarge { measure: "words", actual: words, limit: limits.max_words });
	}

	Ok(())
}
