use clap::Parser;
use textscrub_cli::cli::Cli;
use textscrub_cli::error::CliError;
use textscrub_cli::{commands, logging, output};
use tracing::{error, info};

fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	let command = cli.command.name();
	let format = cli.format;

	if let Err(err) = commands::dispatch(cli) {
		match &err {
			CliError::WouldChange { changes } => info!(target = "textscrub", changes = *changes, "input is not clean"),
			_ => {
				error!(target = "textscrub", error = %err, "command failed");
				output::print_failure(command, &err, format);
			}
		}
		std::process::exit(err.exit_code());
	}
}
