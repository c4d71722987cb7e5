use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use crate::picker::PickerOption;
use crate::tui::theme::Theme;

/// Marker drawn in front of the host-selected option.
pub const SELECTED_MARKER: &str = "● ";
const UNSELECTED_MARKER: &str = "  ";

/// Default row for an option: its label, styled as selected when asked.
#[must_use]
pub fn option_item<'a>(option: &'a PickerOption, selected: bool, theme: &Theme) -> ListItem<'a> {
	let marker = if selected {
		SELECTED_MARKER
	} else {
		UNSELECTED_MARKER
	};
	let line = Line::from(vec![Span::raw(marker), Span::raw(option.label.as_str())]);
	ListItem::new(line).style(theme.option_style(selected))
}

/// Default placeholder row shown when nothing matches the filter.
#[must_use]
pub fn no_results_item<'a>(text: &'a str, theme: &Theme) -> ListItem<'a> {
	ListItem::new(Line::from(text).centered()).style(theme.no_results_style())
}
