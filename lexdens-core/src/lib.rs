//! Lexical density scoring library.
//!
//! This crate provides everything needed to score a text submission:
//! - A read-only snapshot of non-lexical (function/filler) words and the
//!   stores it can be loaded from
//! - Space and sentence tokenization
//! - Overall and per-sentence lexical density
//! - Request size validation
//! - Plain and verbose report shaping
//!
//! Transport concerns (HTTP, routing) live in `lexdens-server`.

/// Error type shared by every module of the crate.
pub mod error;

/// Non-lexical word snapshot and the stores it is loaded from.
pub mod words;

/// Space-delimited and sentence-delimited splitting.
pub mod tokenizer;

/// Lexical density computations.
pub mod density;

/// Payload decoding and size limits.
pub mod validator;

/// Report shapes (plain / verbose) and their JSON serialization.
pub mod response;

/// I/O utilities (word list files).
///
/// Not exposed
pub(crate) mod io;

pub use error::{Error, Result};
