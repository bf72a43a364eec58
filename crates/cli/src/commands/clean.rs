use textscrub::clean_ai_text_report;
use tracing::info;

use crate::cli::CleanArgs;
use crate::commands::{source_inputs, with_source_diagnostics};
use crate::config::resolve_options;
use crate::error::Result;
use crate::input::{read_source, write_file, write_stdout};
use crate::output::{CleanData, OutputFormat, ResultBuilder, print_result};

pub fn execute(args: CleanArgs, format: OutputFormat) -> Result<()> {
	let config = resolve_options(&args.rules)?;
	let source = read_source(args.input.as_deref())?;
	info!(target = "textscrub", input = %source.label, bytes = source.text.len(), "clean input");

	let report = clean_ai_text_report(&source.text, &config.options);
	info!(target = "textscrub", changes = report.changes, "cleaned");

	if let Some(path) = &args.output {
		write_file(path, &report.text)?;
		info!(target = "textscrub", path = %path.display(), "wrote cleaned text");
	}

	if !format.is_structured() {
		if args.output.is_none() {
			write_stdout(&report.text)?;
		}
		return Ok(());
	}

	let mut inputs = source_inputs(&source);
	inputs.output_path = args.output.clone();

	let data = CleanData {
		text: args.output.is_none().then_some(report.text),
		changes: report.changes,
		applied: report.applied,
		written_to: args.output,
	};

	let builder = ResultBuilder::new("clean").inputs(inputs).data(data).config(config);
	print_result(&with_source_diagnostics(builder, &source).build(), format);
	Ok(())
}
