use fpick::tui::theme;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.async_timeout.is_zero() {
		return Err(ConfigError::invalid(
			"picker.async_timeout_ms",
			config.async_timeout.as_millis().to_string(),
			sources.source_for_async_timeout(),
			"must be greater than zero",
		));
	}

	if theme::by_name(&config.theme_name).is_none() {
		return Err(ConfigError::invalid(
			"picker.theme",
			config.theme_name.as_str(),
			sources.source_for_theme(),
			format!("unknown theme (available: {})", theme::names().join(", ")),
		));
	}

	if let Some(command) = &config.command
		&& command.trim().is_empty()
	{
		return Err(ConfigError::invalid(
			"source.command",
			command.as_str(),
			sources.source_for_command(),
			"must not be empty",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use fpick::picker::PickerLabels;
	use fpick::{InputFormat, PickerStyles};

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			labels: PickerLabels::default(),
			show_filter: true,
			selected: None,
			theme_name: "slate".into(),
			async_timeout: Duration::from_millis(700),
			input: None,
			format: InputFormat::Plain,
			command: None,
			styles: PickerStyles::default(),
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let config = ResolvedConfig {
			async_timeout: Duration::ZERO,
			..config()
		};
		let sources = ConfigSources {
			async_timeout: Some(SettingSource::CliFlag("--async-timeout")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "picker.async_timeout_ms"));
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let config = ResolvedConfig {
			theme_name: "neon".into(),
			..config()
		};
		let sources = ConfigSources {
			theme: Some(SettingSource::Environment("FPICK__PICKER__THEME")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "picker.theme"));
		let message = err.to_string();
		assert!(message.contains("environment variable"));
		assert!(message.contains("slate"));
	}

	#[test]
	fn validation_rejects_blank_command() {
		let config = ResolvedConfig {
			command: Some("  ".into()),
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "source.command"));
		assert!(err.to_string().contains("configuration key"));
	}
}
