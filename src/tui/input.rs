//! Single-line filter input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Text field that feeds the filter engine.
#[derive(Debug, Clone)]
pub struct FilterInput {
	textarea: TextArea<'static>,
	style: Style,
}

impl Default for FilterInput {
	fn default() -> Self {
		Self::new()
	}
}

impl FilterInput {
	#[must_use]
	pub fn new() -> Self {
		Self::with_text("", Style::default())
	}

	fn with_text(text: &str, style: Style) -> Self {
		let mut textarea = TextArea::new(vec![text.to_owned()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_style(style);
		textarea.move_cursor(CursorMove::End);
		Self { textarea, style }
	}

	/// Current contents, as typed.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the contents and move the cursor to the end.
	pub fn set_text(&mut self, text: &str) {
		*self = Self::with_text(text, self.style);
	}

	pub fn clear(&mut self) {
		self.set_text("");
	}

	pub fn set_style(&mut self, style: Style) {
		self.style = style;
		self.textarea.set_style(style);
	}

	/// Feed a key press to the field. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_line_break(&key) {
			return false;
		}
		let before = self.text().to_owned();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn is_line_break(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
