//! Reading the text to clean and writing the result.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{CliError, Result};

const STDIN_LABEL: &str = "<stdin>";
const STDOUT_LABEL: &str = "<stdout>";

/// Decoded input text and where it came from.
#[derive(Debug)]
pub struct SourceText {
	pub text: String,
	pub label: String,
	/// True when invalid UTF-8 was replaced with U+FFFD while decoding.
	pub lossy: bool,
}

/// Reads `path`, or stdin when `path` is `None` or `-`.
pub fn read_source(path: Option<&Path>) -> Result<SourceText> {
	let (bytes, label) = match path.filter(|p| p.as_os_str() != "-") {
		Some(path) => {
			let bytes = fs::read(path).map_err(|source| CliError::Io {
				path: path.to_path_buf(),
				source,
			})?;
			(bytes, path.display().to_string())
		}
		None => {
			let mut bytes = Vec::new();
			io::stdin().lock().read_to_end(&mut bytes).map_err(|source| CliError::Io {
				path: PathBuf::from(STDIN_LABEL),
				source,
			})?;
			(bytes, STDIN_LABEL.to_string())
		}
	};

	Ok(decode(bytes, label))
}

fn decode(bytes: Vec<u8>, label: String) -> SourceText {
	match String::from_utf8(bytes) {
		Ok(text) => SourceText { text, label, lossy: false },
		Err(err) => {
			warn!(target = "textscrub", input = %label, valid_up_to = err.utf8_error().valid_up_to(), "input is not valid UTF-8");
			SourceText {
				text: String::from_utf8_lossy(err.as_bytes()).into_owned(),
				label,
				lossy: true,
			}
		}
	}
}

pub fn write_file(path: &Path, text: &str) -> Result<()> {
	fs::write(path, text).map_err(|source| CliError::Write {
		path: path.to_path_buf(),
		source,
	})
}

/// Writes `text` to stdout verbatim, without a trailing newline.
pub fn write_stdout(text: &str) -> Result<()> {
	write_stream(io::stdout().lock(), text)
}

fn write_stream(mut out: impl Write, text: &str) -> Result<()> {
	out.write_all(text.as_bytes()).and_then(|()| out.flush()).map_err(|source| CliError::Write {
		path: PathBuf::from(STDOUT_LABEL),
		source,
	})
}
