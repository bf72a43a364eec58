use std::path::PathBuf;

use thiserror::Error;

use crate::output::ErrorCode;

#[derive(Debug, Error)]
pub enum CliError {
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid config {}: {source}", .path.display())]
	Config {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("failed to write {}: {source}", .path.display())]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("cleaning would apply {changes} change(s)")]
	WouldChange { changes: usize },
}

impl CliError {
	/// Process exit status: 1 when `check` found work to do, 2 for real failures.
	pub fn exit_code(&self) -> i32 {
		match self {
			CliError::WouldChange { .. } => 1,
			_ => 2,
		}
	}

	/// Envelope error code; `None` for `WouldChange`, which is a verdict rather than a failure.
	pub fn code(&self) -> Option<ErrorCode> {
		match self {
			CliError::Io { .. } | CliError::Write { .. } => Some(ErrorCode::IoError),
			CliError::Config { .. } => Some(ErrorCode::InvalidConfig),
			CliError::WouldChange { .. } => None,
		}
	}
}

pub type Result<T> = std::result::Result<T, CliError>;
