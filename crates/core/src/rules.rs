//! The fixed rule table.
//!
//! Each [`Step`] is one global find/replace pass gated by a [`RuleGroup`].
//! [`PIPELINE`] is the single source of ordering.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::options::CleanOptions;
use crate::patterns;

/// Option that switches a group of steps on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleGroup {
	RemoveInvisibleChars,
	NormalizeQuotes,
	NormalizeDashes,
	ReplaceNbsp,
	TrimTrailingWhitespace,
	ApplyCommonFixes,
	RestrictToKeyboardChars,
}

impl RuleGroup {
	/// Every group, in pipeline order.
	pub const ALL: [RuleGroup; 7] = [
		RuleGroup::RemoveInvisibleChars,
		RuleGroup::NormalizeQuotes,
		RuleGroup::NormalizeDashes,
		RuleGroup::ReplaceNbsp,
		RuleGroup::TrimTrailingWhitespace,
		RuleGroup::ApplyCommonFixes,
		RuleGroup::RestrictToKeyboardChars,
	];

	pub fn is_enabled(self, options: &CleanOptions) -> bool {
		match self {
			RuleGroup::RemoveInvisibleChars => options.remove_invisible_chars,
			RuleGroup::NormalizeQuotes => options.normalize_quotes,
			RuleGroup::NormalizeDashes => options.normalize_dashes,
			RuleGroup::ReplaceNbsp => options.replace_nbsp,
			RuleGroup::TrimTrailingWhitespace => options.trim_trailing_whitespace,
			RuleGroup::ApplyCommonFixes => options.apply_common_fixes,
			RuleGroup::RestrictToKeyboardChars => options.restrict_to_keyboard_chars,
		}
	}

	/// Option key as it appears in config files.
	pub fn option_name(self) -> &'static str {
		match self {
			RuleGroup::RemoveInvisibleChars => "removeInvisibleChars",
			RuleGroup::NormalizeQuotes => "normalizeQuotes",
			RuleGroup::NormalizeDashes => "normalizeDashes",
			RuleGroup::ReplaceNbsp => "replaceNbsp",
			RuleGroup::TrimTrailingWhitespace => "trimTrailingWhitespace",
			RuleGroup::ApplyCommonFixes => "applyCommonFixes",
			RuleGroup::RestrictToKeyboardChars => "restrictToKeyboardChars",
		}
	}
}

/// A single find/replace pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
	InvisibleChars,
	DoubleQuotes,
	SingleQuotes,
	Dashes,
	Nbsp,
	TrailingWhitespace,
	Ellipsis,
	HorizontalWhitespace,
	SpaceBeforePunctuation,
	GapBeforePunctuation,
	NonKeyboardChars,
}

/// Every step in application order.
pub const PIPELINE: [Step; 11] = [
	Step::InvisibleChars,
	Step::DoubleQuotes,
	Step::SingleQuotes,
	Step::Dashes,
	Step::Nbsp,
	Step::TrailingWhitespace,
	Step::Ellipsis,
	Step::HorizontalWhitespace,
	Step::SpaceBeforePunctuation,
	Step::GapBeforePunctuation,
	Step::NonKeyboardChars,
];

impl Step {
	pub fn group(self) -> RuleGroup {
		match self {
			Step::InvisibleChars => RuleGroup::RemoveInvisibleChars,
			Step::DoubleQuotes | Step::SingleQuotes => RuleGroup::NormalizeQuotes,
			Step::Dashes => RuleGroup::NormalizeDashes,
			Step::Nbsp => RuleGroup::ReplaceNbsp,
			Step::TrailingWhitespace => RuleGroup::TrimTrailingWhitespace,
			Step::Ellipsis | Step::HorizontalWhitespace | Step::SpaceBeforePunctuation | Step::GapBeforePunctuation => RuleGroup::ApplyCommonFixes,
			Step::NonKeyboardChars => RuleGroup::RestrictToKeyboardChars,
		}
	}

	pub fn is_enabled(self, options: &CleanOptions) -> bool {
		self.group().is_enabled(options)
	}

	/// Stable identifier used in logs and structured output.
	pub fn name(self) -> &'static str {
		match self {
			Step::InvisibleChars => "invisible_chars",
			Step::DoubleQuotes => "double_quotes",
			Step::SingleQuotes => "single_quotes",
			Step::Dashes => "dashes",
			Step::Nbsp => "nbsp",
			Step::TrailingWhitespace => "trailing_whitespace",
			Step::Ellipsis => "ellipsis",
			Step::HorizontalWhitespace => "horizontal_whitespace",
			Step::SpaceBeforePunctuation => "space_before_punctuation",
			Step::GapBeforePunctuation => "gap_before_punctuation",
			Step::NonKeyboardChars => "non_keyboard_chars",
		}
	}

	pub fn description(self) -> &'static str {
		match self {
			Step::InvisibleChars => "removed invisible and bidi control characters",
			Step::DoubleQuotes => "straightened double quotes",
			Step::SingleQuotes => "straightened single quotes and apostrophes",
			Step::Dashes => "replaced em and en dashes with hyphens",
			Step::Nbsp => "replaced non-breaking spaces",
			Step::TrailingWhitespace => "trimmed trailing whitespace",
			Step::Ellipsis => "expanded ellipsis glyphs",
			Step::HorizontalWhitespace => "collapsed horizontal whitespace",
			Step::SpaceBeforePunctuation => "removed whitespace before punctuation",
			Step::GapBeforePunctuation => "closed gaps between words and punctuation",
			Step::NonKeyboardChars => "removed characters not on a US keyboard",
		}
	}

	fn pattern(self) -> &'static Regex {
		let pattern: &'static LazyLock<Regex> = match self {
			Step::InvisibleChars => &patterns::INVISIBLE,
			Step::DoubleQuotes => &patterns::DOUBLE_QUOTES,
			Step::SingleQuotes => &patterns::SINGLE_QUOTES,
			Step::Dashes => &patterns::DASHES,
			Step::Nbsp => &patterns::NBSP,
			Step::TrailingWhitespace => &patterns::TRAILING_WHITESPACE,
			Step::Ellipsis => &patterns::ELLIPSIS,
			Step::HorizontalWhitespace => &patterns::HORIZONTAL_RUN,
			Step::SpaceBeforePunctuation => &patterns::SPACE_BEFORE_PUNCTUATION,
			Step::GapBeforePunctuation => &patterns::GAP_BEFORE_PUNCTUATION,
			Step::NonKeyboardChars => &patterns::NON_KEYBOARD,
		};
		LazyLock::force(pattern)
	}

	fn replacement(self) -> &'static str {
		match self {
			Step::InvisibleChars | Step::NonKeyboardChars => "",
			Step::DoubleQuotes => "\"",
			Step::SingleQuotes => "'",
			Step::Dashes => "-",
			Step::Nbsp | Step::HorizontalWhitespace => " ",
			Step::TrailingWhitespace | Step::SpaceBeforePunctuation => "${1}",
			Step::Ellipsis => "...",
			Step::GapBeforePunctuation => "${1}${2}",
		}
	}

	/// Runs this step over `text`. Returns `None` when the text comes out unchanged.
	pub(crate) fn apply(self, text: &str) -> Option<String> {
		match self.pattern().replace_all(text, self.replacement()) {
			Cow::Borrowed(_) => None,
			Cow::Owned(rewritten) if rewritten == text => None,
			Cow::Owned(rewritten) => Some(rewritten),
		}
	}
}

impl fmt::Display for Step {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pipeline_lists_each_step_once() {
		for (index, step) in PIPELINE.iter().enumerate() {
			assert!(!PIPELINE[index + 1..].contains(step), "{step} appears twice");
		}
	}

	#[test]
	fn pipeline_keeps_group_order() {
		let mut groups: Vec<RuleGroup> = PIPELINE.iter().map(|step| step.group()).collect();
		groups.dedup();
		assert_eq!(groups, RuleGroup::ALL.to_vec());
	}

	#[test]
	fn unchanged_text_reports_none() {
		assert_eq!(Step::Dashes.apply("plain-text"), None);
		assert_eq!(Step::HorizontalWhitespace.apply("one space only"), None);
	}

	#[test]
	fn trailing_whitespace_keeps_terminators() {
		assert_eq!(Step::TrailingWhitespace.apply("a  \r\nb\t\r\n").as_deref(), Some("a\r\nb\r\n"));
		assert_eq!(Step::TrailingWhitespace.apply("end \t").as_deref(), Some("end"));
		assert_eq!(Step::TrailingWhitespace.apply("x\x0B\x0C\ny").as_deref(), Some("x\ny"));
	}

	#[test]
	fn gap_before_punctuation_joins_word_and_mark() {
		assert_eq!(Step::GapBeforePunctuation.apply("word  ;").as_deref(), Some("word;"));
		assert_eq!(Step::GapBeforePunctuation.apply("word;"), None);
	}

	#[test]
	fn space_before_punctuation_crosses_newlines() {
		assert_eq!(Step::SpaceBeforePunctuation.apply("done\n.").as_deref(), Some("done."));
	}

	#[test]
	fn ellipsis_replacement_is_literal() {
		assert_eq!(Step::Ellipsis.apply("so…").as_deref(), Some("so..."));
	}

	#[test]
	fn option_names_match_serialized_keys() {
		let json = serde_json::to_value(CleanOptions::default()).unwrap();
		for group in RuleGroup::ALL {
			assert!(json.get(group.option_name()).is_some(), "{} missing", group.option_name());
		}
	}
}
