use textscrub::{CleanReport, clean_ai_text_report};
use tracing::info;

use crate::cli::CheckArgs;
use crate::commands::{source_inputs, with_source_diagnostics};
use crate::config::resolve_options;
use crate::error::{CliError, Result};
use crate::input::{read_source, write_stdout};
use crate::output::{CheckData, OutputFormat, ResultBuilder, print_result};

pub fn execute(args: CheckArgs, format: OutputFormat) -> Result<()> {
	let config = resolve_options(&args.rules)?;
	let source = read_source(args.input.as_deref())?;
	info!(target = "textscrub", input = %source.label, bytes = source.text.len(), "check input");

	let report = clean_ai_text_report(&source.text, &config.options);
	let changes = report.changes;

	if format.is_structured() {
		let data = CheckData {
			clean: changes == 0,
			changes,
			applied: report.applied,
		};
		let builder = ResultBuilder::new("check").inputs(source_inputs(&source)).data(data).config(config);
		print_result(&with_source_diagnostics(builder, &source).build(), format);
	} else {
		write_stdout(&render_check_text(&source.label, &report))?;
	}

	if changes > 0 {
		return Err(CliError::WouldChange { changes });
	}
	Ok(())
}

fn render_check_text(label: &str, report: &CleanReport) -> String {
	if report.changes == 0 {
		return format!("{label}: clean\n");
	}

	let mut out = format!("{label}: {} change(s) would be applied\n", report.changes);
	for step in &report.applied {
		out.push_str(&format!("  - {} ({step})\n", step.description()));
	}
	out
}
