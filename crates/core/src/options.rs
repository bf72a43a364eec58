//! Option records and the defaults-overlay merge.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Effective toggles for one cleaning call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanOptions {
	pub remove_invisible_chars: bool,
	pub trim_trailing_whitespace: bool,
	pub replace_nbsp: bool,
	pub normalize_dashes: bool,
	pub normalize_quotes: bool,
	pub apply_common_fixes: bool,
	pub restrict_to_keyboard_chars: bool,
}

impl Default for CleanOptions {
	fn default() -> Self {
		Self {
			remove_invisible_chars: true,
			trim_trailing_whitespace: true,
			replace_nbsp: true,
			normalize_dashes: true,
			normalize_quotes: true,
			apply_common_fixes: true,
			restrict_to_keyboard_chars: false,
		}
	}
}

impl CleanOptions {
	/// Options with every rule group switched off.
	pub const fn disabled() -> Self {
		Self {
			remove_invisible_chars: false,
			trim_trailing_whitespace: false,
			replace_nbsp: false,
			normalize_dashes: false,
			normalize_quotes: false,
			apply_common_fixes: false,
			restrict_to_keyboard_chars: false,
		}
	}

	/// Returns a copy with every field set in `partial` taking precedence.
	pub fn merged(&self, partial: &PartialCleanOptions) -> Self {
		Self {
			remove_invisible_chars: partial.remove_invisible_chars.unwrap_or(self.remove_invisible_chars),
			trim_trailing_whitespace: partial.trim_trailing_whitespace.unwrap_or(self.trim_trailing_whitespace),
			replace_nbsp: partial.replace_nbsp.unwrap_or(self.replace_nbsp),
			normalize_dashes: partial.normalize_dashes.unwrap_or(self.normalize_dashes),
			normalize_quotes: partial.normalize_quotes.unwrap_or(self.normalize_quotes),
			apply_common_fixes: partial.apply_common_fixes.unwrap_or(self.apply_common_fixes),
			restrict_to_keyboard_chars: partial.restrict_to_keyboard_chars.unwrap_or(self.restrict_to_keyboard_chars),
		}
	}
}

impl From<PartialCleanOptions> for CleanOptions {
	fn from(partial: PartialCleanOptions) -> Self {
		CleanOptions::default().merged(&partial)
	}
}

/// Caller-supplied options. `None` keeps the default for that field.
///
/// Deserialization ignores unknown keys and coerces non-boolean values by
/// truthiness (`null`, `0` and `""` are false), so a loosely written config
/// never fails to load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialCleanOptions {
	#[serde(default, deserialize_with = "truthy", skip_serializing_if = "Option::is_none")]
	pub remove_invisible_chars: Option<bool>,
	#[serde(default, deserialize_with = "truthy", skip_serializing_if = "Option::is_none")]
	pub trim_trailing_whitespace: Option<bool>,
	#[serde(default, deserialize_with = "truthy", skip_serializing_if = "Option::is_none")]
	pub replace_nbsp: Option<bool>,
	#[serde(default, deserialize_with = "truthy", skip_serializing_if = "Option::is_none")]
	pub normalize_dashes: Option<bool>,
	#[serde(default, deserialize_with = "truthy", skip_serializing_if = "Option::is_none")]
	pub normalize_quotes: Option<bool>,
	#[serde(default, deserialize_with = "truthy", skip_serializing_if = "Option::is_none")]
	pub apply_common_fixes: Option<bool>,
	#[serde(default, deserialize_with = "truthy", skip_serializing_if = "Option::is_none")]
	pub restrict_to_keyboard_chars: Option<bool>,
}

impl PartialCleanOptions {
	/// Layers `other` over `self`; fields set in `other` win.
	pub fn overlay(self, other: PartialCleanOptions) -> Self {
		Self {
			remove_invisible_chars: other.remove_invisible_chars.or(self.remove_invisible_chars),
			trim_trailing_whitespace: other.trim_trailing_whitespace.or(self.trim_trailing_whitespace),
			replace_nbsp: other.replace_nbsp.or(self.replace_nbsp),
			normalize_dashes: other.normalize_dashes.or(self.normalize_dashes),
			normalize_quotes: other.normalize_quotes.or(self.normalize_quotes),
			apply_common_fixes: other.apply_common_fixes.or(self.apply_common_fixes),
			restrict_to_keyboard_chars: other.restrict_to_keyboard_chars.or(self.restrict_to_keyboard_chars),
		}
	}
}

fn truthy<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	Ok(Some(is_truthy(&value)))
}

fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
		Value::String(s) => !s.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}
