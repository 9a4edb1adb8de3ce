use serde::Serialize;

use crate::error::Result;

/// Query value selecting the verbose report.
pub const VERBOSE: &str = "verbose";

/// Report shape requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
	/// Overall density only.
	#[default]
	Plain,
	/// Per-sentence densities followed by the overall density.
	Verbose,
}

impl Mode {
	/// Resolves the `mode` query parameter.
	///
	/// Only the exact value `"verbose"` selects [`Mode::Verbose`]; an absent
	/// parameter or any other value falls back to [`Mode::Plain`].
	pub fn from_query(value: Option<&str>) -> Self {
		match value {
			Some(VERBOSE) => Mode::Verbose,
			_ => Mode::Plain,
		}
	}
}

/// Scoring result, serialized as strict JSON.
///
/// - Plain: `{"overall_ld":0.67}`
/// - Verbose: `{"sentence_ld":[0.67,0.4],"overall_ld":0.63}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityReport {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sentence_ld: Option<Vec<f64>>,
	pub overall_ld: f64,
}

impl DensityReport {
	pub fn plain(overall_ld: f64) -> Self {
		Self { sentence_ld: None, overall_ld }
	}

	pub fn verbose(sentence_ld: Vec<f64>, overall_ld: f64) -> Self {
		Self { sentence_ld: Some(sentence_ld), overall_ld }
	}

	/// Serializes the report to its JSON body.
	///
	/// # Errors
	/// Returns `Error::Serialization` if serde_json rejects a value.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mode_from_query() {
		assert_eq!(Mode::from_query(None), Mode::Plain);
		assert_eq!(Mode::from_query(Some("verbose")), Mode::Verbose);
		assert_eq!(Mode::from_query(Some("Verbose")), Mode::Plain);
		assert_eq!(Mode::from_query(Some("")), Mode::Plain);
	}

	#[test]
	fn plain_report_has_only_overall() {
		let json = DensityReport::plain(0.67).to_json().unwrap();
		assert_eq!(json, r#"{"overall_ld":0.67}"#);
	}

	#[test]
	fn verbose_report_lists_sentences_first() {
		let json = DensityReport::verbose(vec![0.67, 0.4, 0.0, 1.0], 0.63).to_json().unwrap();
		assert_eq!(json, r#"{"sentence_ld":[0.67,0.4,0.0,1.0],"overall_ld":0.63}"#);
	}
}
