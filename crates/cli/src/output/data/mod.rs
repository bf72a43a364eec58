use std::path::PathBuf;

use serde::Serialize;
use textscrub::Step;

/// Result data for the clean command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanData {
	/// Cleaned text; omitted when it was written to a file.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
	pub changes: usize,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub applied: Vec<Step>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub written_to: Option<PathBuf>,
}

/// Result data for the check command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckData {
	pub clean: bool,
	pub changes: usize,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub applied: Vec<Step>,
}
