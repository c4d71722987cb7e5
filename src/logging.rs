//! File-backed tracing setup.
//!
//! The picker owns the terminal while it runs, so log output never goes to
//! stderr. Events are appended to a log file instead; when that file cannot
//! be opened, logging stays disabled.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::app_dirs;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "FPICK_LOG";
const DEFAULT_FILTER: &str = "fpick=info";
const LOG_FILE_NAME: &str = "fpick.log";

/// Default location of the log file inside the data directory.
pub fn default_log_path() -> Option<PathBuf> {
	app_dirs::get_data_dir()
		.ok()
		.map(|dir| dir.join(LOG_FILE_NAME))
}

/// Install the global subscriber, writing to `path` or the default log file.
///
/// Returns the path being written to, or `None` when logging is disabled.
pub fn initialize(path: Option<&Path>) -> Option<PathBuf> {
	let log_path = match path {
		Some(path) => path.to_path_buf(),
		None => default_log_path()?,
	};
	if let Some(parent) = log_path.parent()
		&& !parent.as_os_str().is_empty()
		&& fs::create_dir_all(parent).is_err()
	{
		return None;
	}

	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&log_path)
		.ok()?;

	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
	let file_layer = tracing_subscriber::fmt::layer()
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true);

	tracing_subscriber::registry()
		.with(filter)
		.with(file_layer)
		.try_init()
		.ok()?;

	tracing::info!(path = ?log_path, "tracing initialized");
	Some(log_path)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn writes_to_an_explicit_path_in_a_fresh_directory() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested").join("picker.log");

		let active = initialize(Some(&path));
		assert_eq!(active.as_deref(), Some(path.as_path()));
		assert!(path.exists());
	}
}
