use ratatui::style::{Color, Modifier, Style};

use crate::tui::theme::{Theme, ThemeDefinition};

pub const NAME: &str = "solarized";

pub const SOLARIZED: Theme = Theme {
	overlay: Style::new().bg(Color::Rgb(0, 43, 54)),
	title: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Rgb(88, 110, 117)),
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	muted: Style::new().fg(Color::Rgb(88, 110, 117)),
	no_results: Style::new()
		.fg(Color::Rgb(88, 110, 117))
		.add_modifier(Modifier::ITALIC),
	option: Style::new().fg(Color::Rgb(147, 161, 161)),
	selected: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
	cursor: Style::new().bg(Color::Rgb(7, 54, 66)),
	cancel: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(7, 54, 66)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, SOLARIZED);
