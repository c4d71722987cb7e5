use ratatui::style::{Color, Modifier, Style};

use crate::tui::theme::{Theme, ThemeDefinition};

pub const NAME: &str = "light";

pub const LIGHT: Theme = Theme {
	overlay: Style::new().bg(Color::Rgb(248, 250, 252)),
	title: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Rgb(148, 163, 184)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	muted: Style::new().fg(Color::Rgb(100, 100, 100)),
	no_results: Style::new()
		.fg(Color::Rgb(100, 100, 100))
		.add_modifier(Modifier::ITALIC),
	option: Style::new().fg(Color::Rgb(15, 23, 42)),
	selected: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	cursor: Style::new().bg(Color::Rgb(226, 232, 240)),
	cancel: Style::new()
		.fg(Color::Rgb(248, 250, 252))
		.bg(Color::Rgb(71, 85, 105)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, LIGHT);
