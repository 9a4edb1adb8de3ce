use std::path::PathBuf;

use clap::Parser;
use lexdens_core::validator::Limits;

/// Server configuration, read from the command line with environment fallbacks.
#[derive(Debug, Parser)]
#[command(version, about = "Lexical density scoring over HTTP")]
pub struct Config {
	/// Address to bind
	#[arg(long, env = "LEXDENS_HOST", default_value = "127.0.0.1")]
	pub host: String,

	/// Port to bind
	#[arg(long, env = "LEXDENS_PORT", default_value_t = 5000)]
	pub port: u16,

	/// Non-lexical word list, one word per line (default: built-in list)
	#[arg(long, env = "LEXDENS_WORDS_FILE", value_name = "FILE")]
	pub words_file: Option<PathBuf>,

	/// Submissions must hold fewer characters than this
	#[arg(long, env = "LEXDENS_MAX_CHARS", default_value_t = 1000)]
	pub max_chars: usize,

	/// Submissions must hold fewer words than this
	#[arg(long, env = "LEXDENS_MAX_WORDS", default_value_t = 100)]
	pub max_words: usize,

	/// Default log filter, overridden by RUST_LOG
	#[arg(long, env = "LEXDENS_LOG", default_value = "info")]
	pub log_level: String,
}

impl Config {
	pub fn limits(&self) -> Limits {
		Limits { max_chars: self.max_chars, max_words: self.max_words }
	}
}
