//! Reading picker options from text streams and shell commands.

use std::io::{BufRead, BufReader, Read};
use std::process::{Child, Command, Stdio};
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::picker::PickerOption;

/// Environment variable carrying the filter text into a source command.
pub const QUERY_ENV: &str = "FPICK_QUERY";

/// How option lines are encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
	/// One option per line; the line is both key and label.
	#[default]
	Plain,
	/// One JSON value per line: an option object or a bare string.
	Json,
}

impl InputFormat {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Plain => "plain",
			Self::Json => "json",
		}
	}
}

impl FromStr for InputFormat {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"plain" | "text" => Ok(Self::Plain),
			"json" | "jsonl" => Ok(Self::Json),
			other => Err(format!("unknown input format `{other}`")),
		}
	}
}

/// Failures while loading options.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("failed to read options: {0}")]
	Io(#[from] std::io::Error),
	#[error("malformed option on line {line}: {source}")]
	Malformed {
		line: usize,
		#[source]
		source: serde_json::Error,
	},
	#[error("failed to run source command `{command}`: {source}")]
	Spawn {
		command: String,
		#[source]
		source: std::io::Error,
	},
	#[error("source command `{command}` exited with {status}")]
	CommandFailed { command: String, status: String },
	#[error("source command `{command}` was killed")]
	Cancelled { command: String },
}

/// Shared slot for the source command currently running, so another thread
/// can kill it.
#[derive(Debug, Clone, Default)]
pub struct RunningCommand {
	child: Arc<Mutex<Option<Child>>>,
}

impl RunningCommand {
	fn slot(&self) -> MutexGuard<'_, Option<Child>> {
		self.child.lock().unwrap_or_else(PoisonError::into_inner)
	}

	#[must_use]
	pub fn is_running(&self) -> bool {
		self.slot().is_some()
	}

	/// Kill and reap the running command. Returns `false` when nothing was
	/// running.
	pub fn kill(&self) -> bool {
		let Some(mut child) = self.slot().take() else {
			return false;
		};
		if let Err(err) = child.kill() {
			debug!(error = %err, "source command already exited");
		}
		if let Err(err) = child.wait() {
			debug!(error = %err, "failed to reap source command");
		}
		true
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonLine {
	Text(String),
	Option(PickerOption),
}

/// Parse every option out of `reader`. Blank lines are skipped.
pub fn read_options<R: Read>(reader: R, format: InputFormat) -> Result<Vec<PickerOption>, LoadError> {
	let mut options = Vec::new();
	for (idx, line) in BufReader::new(reader).lines().enumerate() {
		let line = line?;
		let trimmed = line.trim_end_matches('\r');
		if trimmed.trim().is_empty() {
			continue;
		}
		let option = match format {
			InputFormat::Plain => PickerOption::from_text(trimmed),
			InputFormat::Json => parse_json_line(trimmed, idx + 1)?,
		};
		options.push(option);
	}
	Ok(options)
}

fn parse_json_line(line: &str, line_number: usize) -> Result<PickerOption, LoadError> {
	let parsed: JsonLine = serde_json::from_str(line).map_err(|source| LoadError::Malformed {
		line: line_number,
		source,
	})?;
	Ok(match parsed {
		JsonLine::Text(text) => PickerOption::from_text(text),
		JsonLine::Option(option) => option,
	})
}

/// Run `command` through `sh -c` with `query` exported as [`QUERY_ENV`] and
/// parse its standard output.
pub fn run_command(
	command: &str,
	query: &str,
	format: InputFormat,
) -> Result<Vec<PickerOption>, LoadError> {
	run_command_in(command, query, format, &RunningCommand::default())
}

/// [`run_command`], parking the child in `running` while it executes.
///
/// A [`RunningCommand::kill`] from another thread ends the run with
/// [`LoadError::Cancelled`].
pub fn run_command_in(
	command: &str,
	query: &str,
	format: InputFormat,
	running: &RunningCommand,
) -> Result<Vec<PickerOption>, LoadError> {
	debug!(command, query, "running source command");
	let mut child = Command::new("sh")
		.arg("-c")
		.arg(command)
		.env(QUERY_ENV, query)
		.stdin(Stdio::null())
		.stdout(Stdio::piped())
		.stderr(Stdio::null())
		.spawn()
		.map_err(|source| LoadError::Spawn {
			command: command.to_owned(),
			source,
		})?;
	let stdout = child.stdout.take();
	*running.slot() = Some(child);

	let mut output = Vec::new();
	let read = match stdout {
		Some(mut stdout) => stdout.read_to_end(&mut output).map(drop),
		None => Ok(()),
	};

	let Some(mut child) = running.slot().take() else {
		return Err(LoadError::Cancelled {
			command: command.to_owned(),
		});
	};
	let status = child.wait()?;
	read?;

	if !status.success() {
		return Err(LoadError::CommandFailed {
			command: command.to_owned(),
			status: status.to_string(),
		});
	}

	read_options(output.as_slice(), format)
}
