//! Option layering: built-in defaults, then the JSON config file, then flags.

use std::fs;
use std::path::Path;

use textscrub::{CleanOptions, PartialCleanOptions};
use tracing::debug;

use crate::cli::RuleArgs;
use crate::error::{CliError, Result};
use crate::output::EffectiveConfig;

pub fn load_config_file(path: &Path) -> Result<PartialCleanOptions> {
	let content = fs::read_to_string(path).map_err(|source| CliError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	serde_json::from_str(&content).map_err(|source| CliError::Config {
		path: path.to_path_buf(),
		source,
	})
}

pub fn resolve_options(rules: &RuleArgs) -> Result<EffectiveConfig> {
	let file_layer = match &rules.config {
		Some(path) => {
			let layer = load_config_file(path)?;
			debug!(target = "textscrub", path = %path.display(), ?layer, "loaded config file");
			layer
		}
		None => PartialCleanOptions::default(),
	};

	let options = CleanOptions::from(file_layer.overlay(rules.flag_overrides()));
	debug!(target = "textscrub", ?options, "resolved options");

	Ok(EffectiveConfig {
		options,
		config_file: rules.config.clone(),
	})
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn flags_override_config_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, r#"{{"normalizeDashes": false, "normalizeQuotes": false}}"#).unwrap();

		let rules = RuleArgs {
			config: Some(file.path().to_path_buf()),
			keep_nbsp: true,
			..Default::default()
		};
		let resolved = resolve_options(&rules).unwrap();

		assert!(!resolved.options.normalize_dashes);
		assert!(!resolved.options.normalize_quotes);
		assert!(!resolved.options.replace_nbsp);
		assert!(resolved.options.remove_invisible_chars);
		assert_eq!(resolved.config_file.as_deref(), Some(file.path()));
	}

	#[test]
	fn no_config_means_defaults() {
		let resolved = resolve_options(&RuleArgs::default()).unwrap();
		assert_eq!(resolved.options, CleanOptions::default());
		assert!(resolved.config_file.is_none());
	}

	#[test]
	fn malformed_config_is_reported() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "{{not json").unwrap();

		let err = load_config_file(file.path()).unwrap_err();
		assert!(matches!(err, CliError::Config { .. }));
	}

	#[test]
	fn missing_config_is_an_io_error() {
		let err = load_config_file(Path::new("/nonexistent/textscrub.json")).unwrap_err();
		assert!(matches!(err, CliError::Io { .. }));
	}
}
