use std::str::Utf8Error;

use thiserror::Error;

/// Error type for scoring operations
#[derive(Debug, Error)]
pub enum Error {
	/// The submission exceeds one of the configured limits
	#[error("Payload too large: {actual} {measure} (must be below {limit})")]
	PayloadTooLarge {
		measure: &'static str,
		actual: usize,
		limit: usize,
	},

	/// The submission is not valid UTF-8
	#[error("Invalid encoding: {0}")]
	InvalidEncoding(#[from] Utf8Error),

	/// The non-lexical word store could not provide a usable word list
	#[error("Word store unavailable: {0}")]
	StoreUnavailable(String),

	/// A report could not be serialized
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for scoring operations
pub type Result<T> = std::result::Result<T, Error>;
