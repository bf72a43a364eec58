use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use textscrub::PartialCleanOptions;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "textscrub")]
#[command(about = "Strip invisible marks, smart punctuation and spacing artifacts from text")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format
	#[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
	pub format: OutputFormat,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Clean a file (or stdin) and write the result
	Clean(CleanArgs),

	/// Report whether cleaning would change the input (exit status 1 if so)
	Check(CheckArgs),

	/// Show the effective options after applying the config file and flags
	#[command(alias = "opts")]
	Options(RuleArgs),
}

impl Commands {
	pub fn name(&self) -> &'static str {
		match self {
			Commands::Clean(_) => "clean",
			Commands::Check(_) => "check",
			Commands::Options(_) => "options",
		}
	}
}

#[derive(Args, Debug)]
pub struct CleanArgs {
	/// Input file ("-" or omitted reads stdin)
	pub input: Option<PathBuf>,

	/// Write the cleaned text to FILE instead of stdout
	#[arg(short, long, value_name = "FILE")]
	pub output: Option<PathBuf>,

	#[command(flatten)]
	pub rules: RuleArgs,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
	/// Input file ("-" or omitted reads stdin)
	pub input: Option<PathBuf>,

	#[command(flatten)]
	pub rules: RuleArgs,
}

/// Rule toggles shared by every command.
#[derive(Args, Debug, Default)]
pub struct RuleArgs {
	/// Load options from a JSON file (camelCase keys, e.g. {"normalizeDashes": false})
	#[arg(long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Keep invisible and bidi control characters
	#[arg(long)]
	pub keep_invisible: bool,

	/// Keep curly quotes and modifier apostrophes
	#[arg(long)]
	pub keep_quotes: bool,

	/// Keep em and en dashes
	#[arg(long)]
	pub keep_dashes: bool,

	/// Keep non-breaking spaces
	#[arg(long)]
	pub keep_nbsp: bool,

	/// Keep whitespace at the end of lines
	#[arg(long)]
	pub keep_trailing_whitespace: bool,

	/// Skip ellipsis, space-collapse and punctuation-spacing fixes
	#[arg(long)]
	pub no_common_fixes: bool,

	/// Drop every character that cannot be typed on a US keyboard
	#[arg(long)]
	pub keyboard_only: bool,
}

impl RuleArgs {
	/// Flags as an options layer. Flags that were not passed leave their field unset.
	pub fn flag_overrides(&self) -> PartialCleanOptions {
		PartialCleanOptions {
			remove_invisible_chars: self.keep_invisible.then_some(false),
			trim_trailing_whitespace: self.keep_trailing_whitespace.then_some(false),
			replace_nbsp: self.keep_nbsp.then_some(false),
			normalize_dashes: self.keep_dashes.then_some(false),
			normalize_quotes: self.keep_quotes.then_some(false),
			apply_common_fixes: self.no_common_fixes.then_some(false),
			restrict_to_keyboard_chars: self.keyboard_only.then_some(true),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_clean_from_stdin() {
		let cli = Cli::try_parse_from(["textscrub", "clean"]).unwrap();

		match cli.command {
			Commands::Clean(args) => {
				assert!(args.input.is_none());
				assert!(args.output.is_none());
				assert_eq!(args.rules.flag_overrides(), PartialCleanOptions::default());
			}
			_ => panic!("Expected Clean command"),
		}
		assert_eq!(cli.format, OutputFormat::Text);
	}

	#[test]
	fn parse_clean_with_file_and_output() {
		let cli = Cli::try_parse_from(["textscrub", "clean", "draft.md", "-o", "/tmp/clean.md"]).unwrap();

		match cli.command {
			Commands::Clean(args) => {
				assert_eq!(args.input, Some(PathBuf::from("draft.md")));
				assert_eq!(args.output, Some(PathBuf::from("/tmp/clean.md")));
			}
			_ => panic!("Expected Clean command"),
		}
	}

	#[test]
	fn rule_flags_become_overrides() {
		let cli = Cli::try_parse_from(["textscrub", "check", "--keep-dashes", "--no-common-fixes", "--keyboard-only"]).unwrap();

		match cli.command {
			Commands::Check(args) => {
				let overrides = args.rules.flag_overrides();
				assert_eq!(overrides.normalize_dashes, Some(false));
				assert_eq!(overrides.apply_common_fixes, Some(false));
				assert_eq!(overrides.restrict_to_keyboard_chars, Some(true));
				assert_eq!(overrides.normalize_quotes, None);
			}
			_ => panic!("Expected Check command"),
		}
	}

	#[test]
	fn format_flag_is_global() {
		let cli = Cli::try_parse_from(["textscrub", "options", "-f", "json"]).unwrap();
		assert_eq!(cli.format, OutputFormat::Json);
		assert_eq!(cli.command.name(), "options");
	}

	#[test]
	fn verbose_flag_short_and_long() {
		let short_cli = Cli::try_parse_from(["textscrub", "-v", "clean"]).unwrap();
		assert_eq!(short_cli.verbose, 1);

		let long_cli = Cli::try_parse_from(["textscrub", "--verbose", "clean"]).unwrap();
		assert_eq!(long_cli.verbose, 1);

		let double_cli = Cli::try_parse_from(["textscrub", "-vv", "clean"]).unwrap();
		assert_eq!(double_cli.verbose, 2);
	}

	#[test]
	fn invalid_command_fails() {
		assert!(Cli::try_parse_from(["textscrub", "scrub-harder"]).is_err());
	}
}
