//! Public types returned by a cleaning call.

use serde::Serialize;

use crate::rules::Step;

/// Cleaned text plus the number of steps that altered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanResult {
	pub text: String,
	/// Count of steps that changed the text, not of individual substitutions.
	pub changes: usize,
}

/// A [`CleanResult`] that also names the steps that fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanReport {
	pub text: String,
	pub changes: usize,
	/// Steps that changed the text, in application order.
	pub applied: Vec<Step>,
}

impl From<CleanReport> for CleanResult {
	fn from(report: CleanReport) -> Self {
		CleanResult {
			text: report.text,
			changes: report.changes,
		}
	}
}
