//! Runs the rule table over a string.

use tracing::{debug, trace};

use crate::options::{CleanOptions, PartialCleanOptions};
use crate::rules::{PIPELINE, Step};
use crate::types::{CleanReport, CleanResult};

/// Cleans `text` with fully resolved options.
pub fn clean_ai_text(text: &str, options: &CleanOptions) -> CleanResult {
	let (text, applied) = run_pipeline(text, options);
	CleanResult {
		text,
		changes: applied.len(),
	}
}

/// Cleans `text`, filling any unset option from the defaults.
pub fn clean_ai_text_with(text: &str, options: &PartialCleanOptions) -> CleanResult {
	clean_ai_text(text, &CleanOptions::from(*options))
}

/// Like [`clean_ai_text`], also listing which steps fired.
pub fn clean_ai_text_report(text: &str, options: &CleanOptions) -> CleanReport {
	let (text, applied) = run_pipeline(text, options);
	CleanReport {
		text,
		changes: applied.len(),
		applied,
	}
}

fn run_pipeline(input: &str, options: &CleanOptions) -> (String, Vec<Step>) {
	let mut text = input.to_string();
	let mut applied = Vec::new();

	for step in PIPELINE.into_iter().filter(|step| step.is_enabled(options)) {
		if let Some(rewritten) = step.apply(&text) {
			debug!(target = "textscrub", step = step.name(), before = text.len(), after = rewritten.len(), "step rewrote text");
			text = rewritten;
			applied.push(step);
		}
	}

	trace!(target = "textscrub", input_len = input.len(), output_len = text.len(), changes = applied.len(), "pipeline finished");
	(text, applied)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn clean(text: &str) -> CleanResult {
		clean_ai_text(text, &CleanOptions::default())
	}

	#[test]
	fn replaces_non_breaking_space() {
		let result = clean("Hello\u{A0}world");
		assert_eq!(result.text, "Hello world");
		assert_eq!(result.changes, 1);
	}

	#[test]
	fn straightens_quotes_in_two_steps() {
		let result = clean("“Quoted” and ‘single’");
		assert_eq!(result.text, "\"Quoted\" and 'single'");
		assert_eq!(result.changes, 2);
	}

	#[test]
	fn replaces_em_and_en_dashes() {
		let result = clean("em—dash and en–dash");
		assert_eq!(result.text, "em-dash and en-dash");
		assert_eq!(result.changes, 1);
	}

	#[test]
	fn expands_ellipsis() {
		let result = clean("Wait… really?");
		assert_eq!(result.text, "Wait... really?");
		assert_eq!(result.changes, 1);
	}

	#[test]
	fn fixes_spacing_around_punctuation() {
		let result = clean("spaced   out  ,  punctuation !");
		assert_eq!(result.text, "spaced out, punctuation!");
		assert_eq!(result.changes, 2);
	}

	#[test]
	fn trims_trailing_space_and_keeps_newline() {
		let result = clean("line with trailing space   \nnext line");
		assert_eq!(result.text, "line with trailing space\nnext line");
		assert_eq!(result.changes, 1);
	}

	#[test]
	fn empty_input_is_untouched() {
		let result = clean("");
		assert_eq!(result.text, "");
		assert_eq!(result.changes, 0);
	}

	#[test]
	fn counts_steps_not_substitutions() {
		let result = clean("“a” “b” “c” ‘d’ — e – f");
		assert_eq!(result.text, "\"a\" \"b\" \"c\" 'd' - e - f");
		assert_eq!(result.changes, 3);
	}

	#[test]
	fn common_fixes_count_each_sub_step() {
		let result = clean("a\u{2026}  b ,c");
		assert_eq!(result.text, "a... b,c");
		assert_eq!(result.changes, 3);
	}

	#[test]
	fn report_lists_fired_steps_in_order() {
		let report = clean_ai_text_report("\u{200B}“x”\u{2014}y\u{A0}z \n\u{2026}", &CleanOptions::default());
		assert_eq!(report.text, "\"x\"-y z...");
		assert_eq!(
			report.applied,
			vec![
				Step::InvisibleChars,
				Step::DoubleQuotes,
				Step::Dashes,
				Step::Nbsp,
				Step::TrailingWhitespace,
				Step::Ellipsis,
				Step::SpaceBeforePunctuation,
			]
		);
		assert_eq!(report.changes, report.applied.len());
	}

	#[test]
	fn partial_options_fall_back_to_defaults() {
		let options = PartialCleanOptions {
			normalize_dashes: Some(false),
			..Default::default()
		};
		let result = clean_ai_text_with("“a”—b", &options);
		assert_eq!(result.text, "\"a\"—b");
		assert_eq!(result.changes, 1);
	}

	#[test]
	fn keyboard_restriction_runs_without_other_groups() {
		let options = CleanOptions {
			restrict_to_keyboard_chars: true,
			..CleanOptions::disabled()
		};
		let result = clean_ai_text("“smart” — 😀", &options);
		assert_eq!(result.text, "smart  ");
		assert_eq!(result.changes, 1);
	}

	#[test]
	fn collapse_preserves_line_breaks() {
		let options = CleanOptions {
			apply_common_fixes: true,
			..CleanOptions::disabled()
		};
		let result = clean_ai_text("a  \n\t\tb\r\nc", &options);
		assert_eq!(result.text, "a \n b\r\nc");
		assert_eq!(result.changes, 1);
	}
}
