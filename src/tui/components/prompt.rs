use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthChar;

use crate::tui::input::FilterInput;
use crate::tui::theme::Theme;

/// Argument bundle for rendering the filter row.
pub struct FilterContext<'a> {
	pub input: &'a FilterInput,
	/// Shown while the input is empty.
	pub placeholder: &'a str,
	/// Spinner state, present while the host reports loading.
	pub loading: Option<&'a ThrobberState>,
}

/// Render the filter input with its placeholder and loading spinner.
pub fn render_filter(frame: &mut Frame, area: Rect, filter: &FilterContext<'_>, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	filter.input.render(frame, area);

	if filter.input.text().is_empty() {
		render_placeholder(frame, area, filter.placeholder, theme);
	}
	if let Some(state) = filter.loading {
		render_spinner(frame, area, state, theme);
	}
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if text.is_empty() {
		return;
	}
	// Leave the first cell to the input cursor.
	let start = area.left().saturating_add(1);
	let width = area.right().saturating_sub(start);
	if width == 0 {
		return;
	}
	let mut used = 0;
	let display: String = text
		.chars()
		.take_while(|ch| {
			used += ch.width().unwrap_or(0);
			used <= usize::from(width)
		})
		.collect();
	frame.buffer_mut().set_line(
		start,
		area.top(),
		&Line::from(Span::styled(display, theme.muted_style())),
		width,
	);
}

fn render_spinner(frame: &mut Frame, area: Rect, state: &ThrobberState, theme: &Theme) {
	let muted = theme.muted_style();
	let spinner = Throbber::default().style(muted).throbber_style(muted);
	let line = Line::from(spinner.to_symbol_span(state));
	let width = line.width() as u16;
	if width == 0 || width >= area.width {
		return;
	}
	let start = area.right().saturating_sub(width);
	frame.buffer_mut().set_line(start, area.top(), &line, width);
}
