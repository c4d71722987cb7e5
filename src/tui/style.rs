//! Per-instance style overrides layered on top of a [`Theme`].

use std::borrow::Cow;

use anyhow::{Context, Result, bail};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use super::theme::Theme;

/// Optional style patches for each element of the picker. Unset entries keep
/// the theme's style; set entries are patched over it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickerStyles {
	pub overlay: Option<Style>,
	pub title: Option<Style>,
	pub list_container: Option<Style>,
	pub filter_input: Option<Style>,
	pub option_text: Option<Style>,
	pub selected_option_text: Option<Style>,
	pub no_results_text: Option<Style>,
	pub cancel_button: Option<Style>,
}

impl PickerStyles {
	/// The theme with every override applied.
	#[must_use]
	pub fn apply(&self, theme: &Theme) -> Theme {
		let patch = |base: Style, over: Option<Style>| match over {
			Some(over) => base.patch(over),
			None => base,
		};
		Theme {
			overlay: patch(theme.overlay, self.overlay),
			title: patch(theme.title, self.title),
			border: patch(theme.border, self.list_container),
			prompt: patch(theme.prompt, self.filter_input),
			muted: theme.muted,
			no_results: patch(theme.no_results, self.no_results_text),
			option: patch(theme.option, self.option_text),
			selected: patch(theme.selected, self.selected_option_text),
			cursor: theme.cursor,
			cancel: patch(theme.cancel, self.cancel_button),
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}
}

/// A style as written in configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StyleSpec {
	#[serde(default)]
	pub fg: Option<String>,
	#[serde(default)]
	pub bg: Option<String>,
	#[serde(default)]
	pub modifiers: Vec<String>,
}

impl StyleSpec {
	/// Build the ratatui style, naming `context` in any error.
	pub fn to_style(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();

		if let Some(fg) = &self.fg {
			let color = parse_color(fg)
				.with_context(|| format!("{context}: invalid foreground colour `{fg}`"))?;
			style = style.fg(color);
		}

		if let Some(bg) = &self.bg {
			let color = parse_color(bg)
				.with_context(|| format!("{context}: invalid background colour `{bg}`"))?;
			style = style.bg(color);
		}

		for modifier in &self.modifiers {
			let value = parse_modifier(modifier)
				.with_context(|| format!("{context}: invalid modifier `{modifier}`"))?;
			style = style.add_modifier(value);
		}

		Ok(style)
	}
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex_colour(hex);
	}

	if let Some(body) = value.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
		return parse_rgb_triplet(body);
	}

	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	match normalise_key(value).as_ref() {
		"reset" | "none" | "default" => Ok(Color::Reset),
		"black" => Ok(Color::Black),
		"red" => Ok(Color::Red),
		"green" => Ok(Color::Green),
		"yellow" => Ok(Color::Yellow),
		"blue" => Ok(Color::Blue),
		"magenta" => Ok(Color::Magenta),
		"cyan" => Ok(Color::Cyan),
		"gray" | "grey" => Ok(Color::Gray),
		"dark_gray" | "dark_grey" => Ok(Color::DarkGray),
		"light_red" => Ok(Color::LightRed),
		"light_green" => Ok(Color::LightGreen),
		"light_yellow" => Ok(Color::LightYellow),
		"light_blue" => Ok(Color::LightBlue),
		"light_magenta" => Ok(Color::LightMagenta),
		"light_cyan" => Ok(Color::LightCyan),
		"white" => Ok(Color::White),
		other => bail!("unknown colour `{other}`"),
	}
}

fn parse_hex_colour(hex: &str) -> Result<Color> {
	let expanded = match hex.len() {
		3 => Cow::Owned(hex.chars().flat_map(|ch| [ch, ch]).collect::<String>()),
		6 => Cow::Borrowed(hex),
		_ => bail!("hex colours must be 3 or 6 characters long"),
	};

	let component = |range: std::ops::Range<usize>, name: &str| {
		expanded
			.get(range)
			.and_then(|digits| u8::from_str_radix(digits, 16).ok())
			.with_context(|| format!("invalid {name} component in `#{hex}`"))
	};

	Ok(Color::Rgb(
		component(0..2, "red")?,
		component(2..4, "green")?,
		component(4..6, "blue")?,
	))
}

fn parse_rgb_triplet(body: &str) -> Result<Color> {
	let components = body.split(',').map(str::trim).collect::<Vec<_>>();
	let [r, g, b] = components.as_slice() else {
		bail!(
			"expected three components for rgb() colour, found {}",
			components.len()
		);
	};
	let parse = |value: &str| {
		value
			.parse::<u8>()
			.with_context(|| format!("invalid component `{value}` in rgb() colour"))
	};
	Ok(Color::Rgb(parse(*r)?, parse(*g)?, parse(*b)?))
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	match normalise_key(input).as_ref() {
		"bold" => Ok(Modifier::BOLD),
		"dim" => Ok(Modifier::DIM),
		"italic" => Ok(Modifier::ITALIC),
		"underline" | "underlined" => Ok(Modifier::UNDERLINED),
		"reversed" | "reverse" | "invert" | "inverted" => Ok(Modifier::REVERSED),
		"crossed_out" | "strikethrough" => Ok(Modifier::CROSSED_OUT),
		other => bail!("unknown modifier `{other}`"),
	}
}

fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.chars()
		.map(|ch| match ch {
			'-' | ' ' => '_',
			other => other,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tui::theme::SLATE;

	#[test]
	fn spec_parses_named_hex_and_rgb_colours() {
		let spec = StyleSpec {
			fg: Some("Light-Cyan".into()),
			bg: Some("#0af".into()),
			modifiers: vec!["bold".into()],
		};
		let style = spec.to_style("style.title").expect("valid style");
		assert_eq!(style.fg, Some(Color::LightCyan));
		assert_eq!(style.bg, Some(Color::Rgb(0x00, 0xaa, 0xff)));
		assert!(style.add_modifier.contains(Modifier::BOLD));

		let rgb = StyleSpec {
			fg: Some("rgb(1, 2, 3)".into()),
			..StyleSpec::default()
		};
		assert_eq!(
			rgb.to_style("x").expect("rgb").fg,
			Some(Color::Rgb(1, 2, 3))
		);
	}

	#[test]
	fn spec_errors_name_the_context() {
		let spec = StyleSpec {
			fg: Some("chartreuse".into()),
			..StyleSpec::default()
		};
		let err = spec.to_style("style.option_text").unwrap_err();
		assert!(format!("{err:#}").contains("style.option_text"));
	}

	#[test]
	fn overrides_patch_only_their_element() {
		let styles = PickerStyles {
			selected_option_text: Some(Style::new().fg(Color::Red)),
			..PickerStyles::default()
		};
		let theme = styles.apply(&SLATE);
		assert_eq!(theme.selected.fg, Some(Color::Red));
		assert_eq!(theme.option, SLATE.option);
		assert!(PickerStyles::default().is_empty());
		assert_eq!(PickerStyles::default().apply(&SLATE), SLATE);
	}

	#[test]
	fn no_results_override_leaves_placeholder_and_spinner_alone() {
		let styles = PickerStyles {
			no_results_text: Some(Style::new().fg(Color::Magenta)),
			..PickerStyles::default()
		};
		let theme = styles.apply(&SLATE);
		assert_eq!(theme.no_results_style().fg, Some(Color::Magenta));
		assert_eq!(theme.muted_style(), SLATE.muted_style());
		assert_eq!(PickerStyles::default().apply(&SLATE), SLATE);
	}
}
