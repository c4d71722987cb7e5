use ratatui::style::{Color, Modifier, Style};

use crate::tui::theme::{Theme, ThemeDefinition};

pub const NAME: &str = "slate";

pub const SLATE: Theme = Theme {
	overlay: Style::new().bg(Color::Rgb(15, 23, 42)),
	title: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Rgb(71, 85, 105)),
	prompt: Style::new().fg(Color::LightCyan),
	muted: Style::new().fg(Color::DarkGray),
	no_results: Style::new()
		.fg(Color::DarkGray)
		.add_modifier(Modifier::ITALIC),
	option: Style::new().fg(Color::Rgb(226, 232, 240)),
	selected: Style::new()
		.fg(Color::Rgb(250, 204, 21))
		.add_modifier(Modifier::BOLD),
	cursor: Style::new().bg(Color::Rgb(30, 41, 59)),
	cancel: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(148, 163, 184)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, SLATE).with_aliases(&["dark"]);
