use crate::response::{DensityReport, Mode};
use crate::tokenizer::{split_sentences, split_words, word_count};
use crate::words::NonLexicalWords;

/// Rounds to 2 decimal places, ties to even.
pub fn round2(value: f64) -> f64 {
	(value * 100.0).round_ties_even() / 100.0
}

/// Scores texts against a non-lexical word snapshot.
///
/// The engine only borrows the snapshot, so any number of engines can score
/// concurrently against the same shared words without locking.
#[derive(Debug, Clone, Copy)]
pub struct DensityEngine<'a> {
	words: &'a NonLexicalWords,
}

impl<'a> DensityEngine<'a> {
	pub fn new(words: &'a NonLexicalWords) -> Self {
		Self { words }
	}

	/// Drops every token that is a non-lexical word and rejoins the rest with
	/// single spaces.
	///
	/// Matching is exact: `"cinema."` is kept even if `"cinema"` is listed.
	pub fn remove_non_lexical(&self, text: &str) -> String {
		split_words(text)
			.into_iter()
			.filter(|token| !self.words.contains(token))
			.collect::<Vec<_>>()
			.join(" ")
	}

	/// Number of lexical words in `text`.
	///
	/// Returns 0 when filtering removed everything (the filtered text splits
	/// back into `[""]`).
	pub fn lexical_count(&self, text: &str) -> usize {
		let filtered = self.remove_non_lexical(text);
		let remaining = split_words(&filtered);
		if remaining == [""] {
			return 0;
		}
		remaining.len()
	}

	/// Lexical words over total words, rounded to 2 decimals.
	///
	/// # Notes
	/// - The denominator is never 0: empty text splits into `[""]`, so it
	///   scores `0.0`.
	pub fn overall_density(&self, text: &str) -> f64 {
		round2(self.lexical_count(text) as f64 / word_count(text) as f64)
	}

	/// Density of every sentence of `text`, in order.
	///
	/// One terminal `.` is stripped from each sentence before filtering, so
	/// `"the."` is recognised as `"the"`. The denominator counts the sentence
	/// as submitted.
	pub fn sentence_densities(&self, text: &str) -> Vec<f64> {
		split_sentences(text)
			.into_iter()
			.map(|sentence| {
				let total = word_count(sentence);
				let body = sentence.strip_suffix('.').unwrap_or(sentence);
				round2(self.lexical_count(body) as f64 / total as f64)
			})
			.collect()
	}

	/// Scores `text` and shapes the result for `mode`.
	pub fn analyze(&self, text: &str, mode: Mode) -> DensityReport {
		let overall_ld = self.overall_density(text);
		match mode {
			Mode::Plain => DensityReport::plain(overall_ld),
			Mode::Verbose => DensityReport::verbose(self.sentence_densities(text), overall_ld),
		}
	}
}
