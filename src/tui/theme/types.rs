use ratatui::style::Style;

/// Colour scheme for every element of the picker overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Fill of the full-screen overlay behind the picker.
	pub overlay: Style,
	pub title: Style,
	/// Border around the list container.
	pub border: Style,
	/// Text typed into the filter input.
	pub prompt: Style,
	/// Placeholder and spinner.
	pub muted: Style,
	/// Row shown when nothing matches the filter.
	pub no_results: Style,
	pub option: Style,
	/// Variant for the option the host marked as selected.
	pub selected: Style,
	/// Keyboard cursor row.
	pub cursor: Style,
	pub cancel: Style,
}

impl Theme {
	#[must_use]
	pub fn overlay_style(&self) -> Style {
		self.overlay
	}

	#[must_use]
	pub fn title_style(&self) -> Style {
		self.title
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		self.border
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn muted_style(&self) -> Style {
		self.muted
	}

	#[must_use]
	pub fn no_results_style(&self) -> Style {
		self.no_results
	}

	/// Style for an option row, switching to the selected variant when asked.
	#[must_use]
	pub fn option_style(&self, selected: bool) -> Style {
		if selected { self.selected } else { self.option }
	}

	#[must_use]
	pub fn cursor_style(&self) -> Style {
		self.cursor
	}

	#[must_use]
	pub fn cancel_style(&self) -> Style {
		self.cancel
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}
}
