use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Error, Result};
use fpick::picker::{DEFAULT_ASYNC_TIMEOUT, PickerLabels};
use fpick::tui::{PickerStyles, StyleSpec};
use fpick::{InputFormat, tui};
use serde::Deserialize;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	picker: PickerSection,
	source: SourceSection,
	styles: StylesSection,
}

/// `[picker]`: labels and behaviour of the overlay.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PickerSection {
	pub(super) title: Option<String>,
	pub(super) placeholder_text: Option<String>,
	pub(super) no_results_text: Option<String>,
	pub(super) cancel_button_text: Option<String>,
	pub(super) show_filter: Option<bool>,
	pub(super) selected: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) async_timeout_ms: Option<u64>,
}

/// `[source]`: where options come from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SourceSection {
	pub(super) input: Option<PathBuf>,
	pub(super) format: Option<String>,
	pub(super) command: Option<String>,
}

/// `[styles.<element>]`: per-element style patches.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct StylesSection {
	overlay: Option<StyleSpec>,
	title: Option<StyleSpec>,
	list_container: Option<StyleSpec>,
	filter_input: Option<StyleSpec>,
	option_text: Option<StyleSpec>,
	selected_option_text: Option<StyleSpec>,
	no_results_text: Option<StyleSpec>,
	cancel_button: Option<StyleSpec>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.picker.apply_cli_overrides(cli);
		self.source.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			async_timeout: detect_source(
				cli.async_timeout_ms.is_some(),
				self.picker.async_timeout_ms.is_some(),
				"FPICK__PICKER__ASYNC_TIMEOUT_MS",
				"--async-timeout",
				"picker.async_timeout_ms",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.picker.theme.is_some(),
				"FPICK__PICKER__THEME",
				"--theme",
				"picker.theme",
			),
			format: detect_source(
				cli.input_format.is_some(),
				self.source.format.is_some(),
				"FPICK__SOURCE__FORMAT",
				"--input-format",
				"source.format",
			),
			command: detect_source(
				cli.source_command.is_some(),
				self.source.command.is_some(),
				"FPICK__SOURCE__COMMAND",
				"--source-command",
				"source.command",
			),
		};

		let styles = self.styles.resolve()?;
		let PickerSection {
			title,
			placeholder_text,
			no_results_text,
			cancel_button_text,
			show_filter,
			selected,
			theme,
			async_timeout_ms,
		} = self.picker;

		let defaults = PickerLabels::default();
		let labels = PickerLabels {
			placeholder_text: placeholder_text.unwrap_or(defaults.placeholder_text),
			no_results_text: no_results_text.unwrap_or(defaults.no_results_text),
			title: title.filter(|title| !title.trim().is_empty()),
			cancel_button_text: cancel_button_text.unwrap_or(defaults.cancel_button_text),
		};

		let format = match self.source.format {
			Some(raw) => raw.parse::<InputFormat>().map_err(|reason| {
				ConfigError::invalid("source.format", raw.as_str(), sources.source_for_format(), reason)
			})?,
			None => InputFormat::default(),
		};

		let theme_name = theme.unwrap_or_else(|| tui::theme::DEFAULT_THEME.to_string());
		let async_timeout = async_timeout_ms.map_or(DEFAULT_ASYNC_TIMEOUT, Duration::from_millis);

		let config = ResolvedConfig {
			labels,
			show_filter: show_filter.unwrap_or(true),
			selected: selected.filter(|key| !key.is_empty()),
			theme_name,
			async_timeout,
			input: self.source.input,
			format,
			command: self.source.command,
			styles,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

impl PickerSection {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(text) = cli.placeholder.clone() {
			self.placeholder_text = Some(text);
		}
		if let Some(text) = cli.no_results_text.clone() {
			self.no_results_text = Some(text);
		}
		if let Some(text) = cli.cancel_text.clone() {
			self.cancel_button_text = Some(text);
		}
		if let Some(show) = cli.show_filter {
			self.show_filter = Some(show);
		}
		if let Some(key) = cli.selected.clone() {
			self.selected = Some(key);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(ms) = cli.async_timeout_ms {
			self.async_timeout_ms = Some(ms);
		}
	}
}

impl SourceSection {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(input) = cli.input.clone() {
			self.input = Some(input);
		}
		if let Some(format) = cli.input_format {
			self.format = Some(format.as_str().to_string());
		}
		if let Some(command) = cli.source_command.clone() {
			self.command = Some(command);
		}
	}
}

impl StylesSection {
	fn resolve(self) -> Result<PickerStyles> {
		let style = |spec: Option<StyleSpec>, key: &str| {
			spec.map(|spec| spec.to_style(&format!("styles.{key}")))
				.transpose()
		};
		Ok(PickerStyles {
			overlay: style(self.overlay, "overlay")?,
			title: style(self.title, "title")?,
			list_container: style(self.list_container, "list_container")?,
			filter_input: style(self.filter_input, "filter_input")?,
			option_text: style(self.option_text, "option_text")?,
			selected_option_text: style(self.selected_option_text, "selected_option_text")?,
			no_results_text: style(self.no_results_text, "no_results_text")?,
			cancel_button: style(self.cancel_button, "cancel_button")?,
		})
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
