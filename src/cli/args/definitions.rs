use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{InputFormatArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `fpick` binary.
#[derive(Parser, Debug)]
#[command(
	name = "fpick",
	version,
	long_version = long_version(),
	about = "Pick one option from a filterable list in the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "FPICK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short,
		long,
		value_name = "FILE",
		help = "Read options from a file instead of stdin (default: stdin)"
	)]
	pub(crate) input: Option<PathBuf>,
	#[arg(
		short = 'f',
		long = "input-format",
		value_enum,
		help = "How options are written in the input (default: plain)"
	)]
	pub(crate) input_format: Option<InputFormatArg>,
	#[arg(
		short = 's',
		long = "source-command",
		value_name = "CMD",
		help = "Shell command producing options for the filter text in $FPICK_QUERY (default: none)"
	)]
	pub(crate) source_command: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Title shown above the list (default: none)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Placeholder for the empty filter input (default: Filter...)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long = "no-results-text",
		value_name = "TEXT",
		help = "Text shown when nothing matches (default: No matches)"
	)]
	pub(crate) no_results_text: Option<String>,
	#[arg(
		long = "cancel-text",
		value_name = "TEXT",
		help = "Label of the cancel button (default: Cancel)"
	)]
	pub(crate) cancel_text: Option<String>,
	#[arg(
		long = "show-filter",
		value_name = "BOOL",
		value_parser = BoolishValueParser::new(),
		help = "Show the filter input (default: enabled)"
	)]
	pub(crate) show_filter: Option<bool>,
	#[arg(
		long,
		value_name = "KEY",
		help = "Key of the option to mark as selected (default: none)"
	)]
	pub(crate) selected: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "async-timeout",
		value_name = "MS",
		help = "Debounce delay before running the source command (default: 700)"
	)]
	pub(crate) async_timeout_ms: Option<u64>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: fpick.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
