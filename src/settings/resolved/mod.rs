use std::path::PathBuf;
use std::time::Duration;

use fpick::picker::PickerLabels;
use fpick::{InputFormat, PickerStyles};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub labels: PickerLabels,
	pub show_filter: bool,
	pub selected: Option<String>,
	pub theme_name: String,
	pub async_timeout: Duration,
	/// Options file; stdin when absent.
	pub input: Option<PathBuf>,
	pub format: InputFormat,
	/// Shell command that refreshes options as the filter changes.
	pub command: Option<String>,
	pub styles: PickerStyles,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
