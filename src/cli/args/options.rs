use clap::ValueEnum;
use fpick::InputFormat;

/// Option formats accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum InputFormatArg {
	Plain,
	Json,
}

impl InputFormatArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		InputFormat::from(self).as_str()
	}
}

impl From<InputFormatArg> for InputFormat {
	fn from(value: InputFormatArg) -> Self {
		match value {
			InputFormatArg::Plain => InputFormat::Plain,
			InputFormatArg::Json => InputFormat::Json,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
