use crate::cli::RuleArgs;
use crate::config::resolve_options;
use crate::error::Result;
use crate::output::{OutputFormat, ResultBuilder, print_result};

pub fn execute(args: RuleArgs, format: OutputFormat) -> Result<()> {
	let config = resolve_options(&args)?;
	print_result(&ResultBuilder::new("options").data(config).build(), format);
	Ok(())
}
