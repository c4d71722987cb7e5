use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use fpick::app_dirs;

use crate::cli::CliArgs;

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	layered_config(defaults, &cli.config)
}

/// Optional `defaults`, then required `explicit` files, then `FPICK__*`
/// environment variables.
pub(super) fn layered_config(defaults: Vec<PathBuf>, explicit: &[PathBuf]) -> Result<Config> {
	let mut builder = Config::builder();

	for path in defaults {
		builder = builder.add_source(File::from(path).required(false));
	}

	for path in explicit {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("fpick")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".fpick.toml"));
		files.push(current_dir.join("fpick.toml"));
	}

	files
}
