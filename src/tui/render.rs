//! Overridable rendering for the picker overlay.
//!
//! Hosts customise the look of the picker by implementing [`PickerRenderer`]
//! and overriding only the methods they care about. Every method has a default
//! built from [`crate::tui::components`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState};

use super::components::{
	FilterContext, no_results_item, option_item, render_cancel_button, render_filter,
};
use super::theme::Theme;
use crate::picker::PickerOption;

/// Symbol drawn in front of the keyboard cursor row.
pub const CURSOR_SYMBOL: &str = "▌";

/// One visible option and whether the host marked it as selected.
#[derive(Debug, Clone, Copy)]
pub struct OptionRow<'a> {
	pub option: &'a PickerOption,
	pub selected: bool,
}

/// Everything needed to draw the list body.
pub struct ListContext<'a> {
	/// Area reserved for the list container.
	pub area: Rect,
	/// Visible rows in display order.
	pub rows: Vec<OptionRow<'a>>,
	/// The filter row, when the host shows it.
	pub filter: Option<FilterContext<'a>>,
	pub no_results_text: &'a str,
	/// Keyboard cursor and scroll offset.
	pub list_state: &'a mut ListState,
	pub theme: &'a Theme,
}

/// Rendering hooks for the picker. Implement only what needs to change.
pub trait PickerRenderer {
	/// A single option row. Rows are expected to be one line tall so mouse
	/// presses land on the right option.
	fn render_option<'a>(&self, option: &'a PickerOption, selected: bool, theme: &Theme) -> ListItem<'a> {
		option_item(option, selected, theme)
	}

	/// The single non-interactive row shown when nothing matches.
	fn render_no_results<'a>(&self, text: &'a str, theme: &Theme) -> ListItem<'a> {
		no_results_item(text, theme)
	}

	/// The list body: filter row plus option rows. Returns the area holding
	/// pressable rows, or `None` when there are none.
	fn render_list(&self, frame: &mut Frame, ctx: ListContext<'_>) -> Option<Rect> {
		render_default_list(self, frame, ctx)
	}

	fn render_cancel_button(&self, frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
		render_cancel_button(frame, area, text, theme);
	}
}

/// Renderer that keeps every default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRenderer;

impl PickerRenderer for DefaultRenderer {}

/// The stock list body, drawing rows through `renderer`.
pub fn render_default_list<R: PickerRenderer + ?Sized>(
	renderer: &R,
	frame: &mut Frame,
	ctx: ListContext<'_>,
) -> Option<Rect> {
	let ListContext {
		area,
		rows,
		filter,
		no_results_text,
		list_state,
		theme,
	} = ctx;

	let container = Block::bordered().border_style(theme.border_style());
	let inner = container.inner(area);
	frame.render_widget(container, area);

	let rows_area = match &filter {
		Some(filter) => {
			let [filter_area, rows_area] =
				Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(inner);
			let divider = Block::new()
				.borders(Borders::BOTTOM)
				.border_style(theme.border_style());
			let input_area = divider.inner(filter_area);
			frame.render_widget(divider, filter_area);
			render_filter(frame, input_area, filter, theme);
			rows_area
		}
		None => inner,
	};

	if rows.is_empty() {
		let placeholder = renderer.render_no_results(no_results_text, theme);
		frame.render_widget(List::new([placeholder]), rows_area);
		return None;
	}

	let items: Vec<ListItem<'_>> = rows
		.iter()
		.map(|row| renderer.render_option(row.option, row.selected, theme))
		.collect();
	let list = List::new(items)
		.highlight_style(theme.cursor_style())
		.highlight_symbol(CURSOR_SYMBOL)
		.highlight_spacing(HighlightSpacing::Always);
	frame.render_stateful_widget(list, rows_area, list_state);
	Some(rows_area)
}
