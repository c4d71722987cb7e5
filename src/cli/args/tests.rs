use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, InputFormatArg, OutputFormat};

#[test]
fn command_supports_custom_styles() {
	let command = CliArgs::command();
	assert!(command.get_about().is_some());
	command.debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["fpick"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.input.is_none());
	assert!(parsed.show_filter.is_none());
}

#[test]
fn picker_flags_are_parsed() {
	let cli = CliArgs::parse_from([
		"fpick",
		"--input-format",
		"json",
		"--show-filter",
		"off",
		"--selected",
		"b",
		"--async-timeout",
		"250",
		"-o",
		"json",
	]);
	assert_eq!(cli.input_format, Some(InputFormatArg::Json));
	assert_eq!(cli.show_filter, Some(false));
	assert_eq!(cli.selected.as_deref(), Some("b"));
	assert_eq!(cli.async_timeout_ms, Some(250));
	assert_eq!(cli.output, OutputFormat::Json);
}
