//! Compiled patterns behind each pipeline step.
//!
//! Classes follow ECMAScript regex semantics rather than the regex crate's
//! Unicode defaults: whitespace is the JS `\s` set (which includes U+FEFF and
//! excludes U+0085) and word characters are ASCII only.

use std::sync::LazyLock;

use regex::Regex;

/// Class body equivalent to JS `\s`.
const WHITESPACE: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// `WHITESPACE` without CR and LF.
const HORIZONTAL_WHITESPACE: &str = r"\t\x0B\x0C \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

pub(crate) static INVISIBLE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"[\x{AD}\x{180E}\x{200B}-\x{200F}\x{202A}-\x{202E}\x{2060}\x{2066}-\x{2069}\x{FEFF}]").expect("INVISIBLE regex should compile")
});

pub(crate) static DOUBLE_QUOTES: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[\x{201C}\x{201D}\x{AB}\x{BB}\x{201E}]").expect("DOUBLE_QUOTES regex should compile"));

pub(crate) static SINGLE_QUOTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\x{2018}\x{2019}\x{2BC}]").expect("SINGLE_QUOTES regex should compile"));

pub(crate) static DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\x{2014}\x{2013}]").expect("DASHES regex should compile"));

pub(crate) static NBSP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x{A0}").expect("NBSP regex should compile"));

// The terminator is captured and written back; the regex crate has no lookahead.
pub(crate) static TRAILING_WHITESPACE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[ \t\x0B\x0C]+([\n\r\x{2028}\x{2029}]|\z)").expect("TRAILING_WHITESPACE regex should compile"));

pub(crate) static ELLIPSIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x{2026}").expect("ELLIPSIS regex should compile"));

pub(crate) static HORIZONTAL_RUN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(&format!("[{HORIZONTAL_WHITESPACE}]+")).expect("HORIZONTAL_RUN regex should compile"));

pub(crate) static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(&format!("[{WHITESPACE}]+([.,;:!?])")).expect("SPACE_BEFORE_PUNCTUATION regex should compile"));

pub(crate) static GAP_BEFORE_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(&format!("([^{WHITESPACE}])[{WHITESPACE}]+([.,;:!?])")).expect("GAP_BEFORE_PUNCTUATION regex should compile")
});

pub(crate) static NON_KEYBOARD: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(&format!(r#"[^A-Za-z0-9_{WHITESPACE}~`!@#$%\^&*()+\-=\[\]{{}};':"\\|,.<>/?]"#)).expect("NON_KEYBOARD regex should compile")
});

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn whitespace_class_matches_js_semantics() {
		assert!(HORIZONTAL_RUN.is_match("\u{3000}"));
		assert!(HORIZONTAL_RUN.is_match("\u{FEFF}"));
		assert!(!HORIZONTAL_RUN.is_match("\u{85}"));
		assert!(!HORIZONTAL_RUN.is_match("\n"));
		assert!(!HORIZONTAL_RUN.is_match("\r"));
	}

	#[test]
	fn trailing_whitespace_stops_at_line_terminators() {
		assert!(TRAILING_WHITESPACE.is_match("a \n"));
		assert!(TRAILING_WHITESPACE.is_match("a\t\r\n"));
		assert!(TRAILING_WHITESPACE.is_match("a \u{2028}"));
		assert!(TRAILING_WHITESPACE.is_match("a \x0C"));
		assert!(!TRAILING_WHITESPACE.is_match("a b\n"));
	}

	#[test]
	fn keyboard_class_keeps_ascii_word_characters() {
		assert!(!NON_KEYBOARD.is_match("abcXYZ019_"));
		assert!(NON_KEYBOARD.is_match("é"));
		assert!(NON_KEYBOARD.is_match("\u{0}"));
	}

	#[test]
	fn keyboard_class_keeps_every_listed_symbol() {
		let symbols = "~`!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";
		assert!(!NON_KEYBOARD.is_match(symbols), "a listed symbol was treated as non-keyboard");
	}
}
