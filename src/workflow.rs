use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use fpick::source::{read_options, run_command};
use fpick::tui::{self, theme};
use fpick::{Appearance, InputFormat, PickOutcome, PickerOption, PickerProps, SourceCommand};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates loading options and running the interactive picker.
pub(crate) struct PickWorkflow {
	props: PickerProps,
	appearance: Appearance,
	source: Option<SourceCommand>,
}

impl PickWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			labels,
			show_filter,
			selected,
			theme_name,
			async_timeout,
			input,
			format,
			command,
			styles,
		} = config;

		let options = load_options(input.as_deref(), command.as_deref(), format)?;
		info!(options = options.len(), format = format.as_str(), "options loaded");

		let mut props = PickerProps::new(options)
			.with_show_filter(show_filter)
			.with_async_timeout(async_timeout)
			.with_labels(labels);
		if let Some(key) = selected {
			props = props.with_selected(key);
		}

		let theme = theme::by_name(&theme_name).ok_or_else(|| anyhow!("unknown theme '{theme_name}'"))?;
		let source = command.map(|command| SourceCommand { command, format });

		Ok(Self {
			props,
			appearance: Appearance { theme, styles },
			source,
		})
	}

	pub(crate) fn run(self) -> Result<PickOutcome> {
		tui::run(self.props, self.appearance, self.source)
	}
}

/// Initial option list: the input file, the source command run with an empty
/// filter, or stdin, in that order of preference.
fn load_options(
	input: Option<&Path>,
	command: Option<&str>,
	format: InputFormat,
) -> Result<Vec<PickerOption>> {
	match (input, command) {
		(Some(path), _) => {
			let file = File::open(path)
				.with_context(|| format!("failed to open options file {}", path.display()))?;
			read_options(file, format)
				.with_context(|| format!("failed to read options from {}", path.display()))
		}
		(None, Some(command)) => {
			run_command(command, "", format).context("failed to load initial options")
		}
		(None, None) => read_options(io::stdin().lock(), format).context("failed to read options from stdin"),
	}
}
