use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::theme::Theme;

/// Render the default cancel button centred in `area`.
pub fn render_cancel_button(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let label = Span::styled(format!(" {text} "), theme.cancel_style());
	frame.render_widget(Paragraph::new(Line::from(label).centered()), area);
}
