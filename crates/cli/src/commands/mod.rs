mod check;
mod clean;
mod options;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::input::SourceText;
use crate::output::{CommandInputs, DiagnosticLevel, ResultBuilder};

pub fn dispatch(cli: Cli) -> Result<()> {
	match cli.command {
		Commands::Clean(args) => clean::execute(args, cli.format),
		Commands::Check(args) => check::execute(args, cli.format),
		Commands::Options(args) => options::execute(args, cli.format),
	}
}

fn source_inputs(source: &SourceText) -> CommandInputs {
	CommandInputs {
		source: Some(source.label.clone()),
		bytes: Some(source.text.len()),
		..Default::default()
	}
}

fn with_source_diagnostics<T: serde::Serialize>(builder: ResultBuilder<T>, source: &SourceText) -> ResultBuilder<T> {
	if source.lossy {
		builder.diagnostic_with_source(
			DiagnosticLevel::Warning,
			"input was not valid UTF-8; invalid bytes were replaced with U+FFFD",
			source.label.clone(),
		)
	} else {
		builder
	}
}
