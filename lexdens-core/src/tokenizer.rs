//! Tokenization used by the density engine.
//!
//! Splitting is deliberately literal: words are separated by the single
//! ASCII space and sentences by `". "`. Other whitespace is part of a token.

/// Delimiter separating two sentences.
pub const SENTENCE_DELIMITER: &str = ". ";

/// Splits `text` on the single space character.
///
/// Empty input yields `[""]`, never an empty vector. Runs of spaces produce
/// empty tokens.
pub fn split_words(text: &str) -> Vec<&str> {
	text.split(' ').collect()
}

/// Splits `text` into sentences on [`SENTENCE_DELIMITER`].
pub fn split_sentences(text: &str) -> Vec<&str> {
	text.split(SENTENCE_DELIMITER).collect()
}

/// Number of tokens [`split_words`] would produce. Always at least 1.
pub fn word_count(text: &str) -> usize {
	text.split(' ').count()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_input_yields_one_empty_token() {
		assert_eq!(split_words(""), vec![""]);
		assert_eq!(word_count(""), 1);
	}

	#[test]
	fn only_single_space_separates_words() {
		assert_eq!(split_words("a  b\tc"), vec!["a", "", "b\tc"]);
		assert_eq!(word_count("Kim loves going to the cinema"), 6);
	}

	#[test]
	fn sentences_split_on_period_space() {
		assert_eq!(
			split_sentences("One two. Three.Four. Five."),
			vec!["One two", "Three.Four", "Five."]
		);
		assert_eq!(split_sentences("no delimiter"), vec!["no delimiter"]);
	}
}
