//! Tracing subscriber setup. Logs go to stderr so stdout stays clean for output.

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins when set; otherwise `-v` raises the level from warn.
pub fn init_logging(verbosity: u8) {
	let level = match verbosity {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
