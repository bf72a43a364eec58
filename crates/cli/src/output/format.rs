use clap::ValueEnum;

/// Output format for CLI results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	/// Plain text (default; `clean` writes the cleaned text verbatim)
	#[default]
	Text,
	/// JSON result envelope
	Json,
	/// Single-line JSON envelope
	Ndjson,
	/// TOON result envelope (token-efficient for LLMs)
	Toon,
}

impl OutputFormat {
	pub fn is_structured(self) -> bool {
		self != OutputFormat::Text
	}
}

impl std::fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OutputFormat::Text => write!(f, "text"),
			OutputFormat::Json => write!(f, "json"),
			OutputFormat::Ndjson => write!(f, "ndjson"),
			OutputFormat::Toon => write!(f, "toon"),
		}
	}
}
