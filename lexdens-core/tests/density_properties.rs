use lexdens_core::density::DensityEngine;
use lexdens_core::response::Mode;
use lexdens_core::validator::{validate, Limits};
use lexdens_core::words::{NonLexicalWords, SEED_WORDS};
use proptest::prelude::*;

fn token() -> impl Strategy<Value = String> {
	prop_oneof![
		prop::sample::select(SEED_WORDS).prop_map(str::to_owned),
		"[A-Za-z]{1,8}\\.?",
	]
}

fn sentence() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec(token(), 1..20)
}

proptest! {
	#[test]
	fn removal_is_idempotent(words in sentence()) {
		let snapshot = NonLexicalWords::seed();
		let engine = DensityEngine::new(&snapshot);
		let text = words.join(" ");
		let once = engine.remove_non_lexical(&text);
		prop_assert_eq!(engine.remove_non_lexical(&once), once);
	}

	#[test]
	fn density_stays_in_unit_range(words in sentence()) {
		let snapshot = NonLexicalWords::seed();
		let engine = DensityEngine::new(&snapshot);
		let density = engine.overall_density(&words.join(" "));
		prop_assert!((0.0..=1.0).contains(&density));
	}

	#[test]
	fn density_ignores_word_order(words in sentence()) {
		let snapshot = NonLexicalWords::seed();
		let engine = DensityEngine::new(&snapshot);
		let mut reversed = words.clone();
		reversed.reverse();
		prop_assert_eq!(
			engine.overall_density(&words.join(" ")),
			engine.overall_density(&reversed.join(" "))
		);
	}

	#[test]
	fn oversized_payloads_are_rejected(extra in 0usize..50) {
		let limits = Limits::default();
		let long = "x".repeat(limits.max_chars + extra);
		prop_assert!(validate(&long, &limits).is_err());
		let wordy = vec!["a"; limits.max_words + extra].join(" ");
		prop_assert!(validate(&wordy, &limits).is_err());
	}
}

#[test]
fn verbose_report_for_concatenated_scenarios() {
	let snapshot = NonLexicalWords::seed();
	let engine = DensityEngine::new(&snapshot);
	let text = "Kim loves going to the cinema. a Kim to the cinema. a to the. Kim cats dogs hello cinema";

	let report = engine.analyze(text, Mode::Verbose);
	assert_eq!(report.sentence_ld, Some(vec![0.67, 0.4, 0.0, 1.0]));
	assert_eq!(report.overall_ld, 0.63);
	assert_eq!(
		report.to_json().unwrap(),
		r#"{"sentence_ld":[0.67,0.4,0.0,1.0],"overall_ld":0.63}"#
	);
}

#[test]
fn custom_word_sets_can_be_injected() {
	let snapshot = NonLexicalWords::from_entries(["Kim"]);
	let engine = DensityEngine::new(&snapshot);
	assert_eq!(engine.remove_non_lexical("Kim loves going to the cinema"), "loves going to the cinema");
	assert_eq!(engine.overall_density("Kim Kim cats"), 0.33);
}
