use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) async_timeout: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) format: Option<SettingSource>,
	pub(crate) command: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_async_timeout(&self) -> SettingSource {
		self.async_timeout
			.clone()
			.unwrap_or(SettingSource::ConfigKey("picker.async_timeout_ms"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("picker.theme"))
	}

	pub(crate) fn source_for_format(&self) -> SettingSource {
		self.format
			.clone()
			.unwrap_or(SettingSource::ConfigKey("source.format"))
	}

	pub(crate) fn source_for_command(&self) -> SettingSource {
		self.command
			.clone()
			.unwrap_or(SettingSource::ConfigKey("source.command"))
	}
}
