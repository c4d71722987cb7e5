//! Terminal host for a [`FilterablePicker`].
//!
//! [`PickerView`] turns key presses, mouse clicks and frames into picker
//! operations: typing drives the filter, Enter or a click presses a row, Esc
//! or the cancel button cancels. It also keeps the keyboard cursor and the
//! areas needed to hit-test the last frame.

use ratatui::Frame;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, ListState, Paragraph};
use throbber_widgets_tui::ThrobberState;

use super::components::{FilterContext, point_in_rect};
use super::input::FilterInput;
use super::render::{DefaultRenderer, ListContext, OptionRow, PickerRenderer};
use super::style::PickerStyles;
use super::theme::Theme;
use crate::picker::{Clock, FilterablePicker, PickerProps, ResetReason, SystemClock};

/// Rows moved by PageUp/PageDown before the first frame is drawn.
const DEFAULT_PAGE: usize = 10;

/// Screen regions from the most recent frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
	/// Rows that respond to presses; absent when the list is empty.
	pub rows: Option<Rect>,
	pub cancel: Option<Rect>,
}

/// A picker plus the terminal state needed to drive and draw it.
pub struct PickerView<C: Clock = SystemClock> {
	picker: FilterablePicker<C>,
	input: FilterInput,
	list_state: ListState,
	throbber: ThrobberState,
	renderer: Box<dyn PickerRenderer>,
	theme: Theme,
	styles: PickerStyles,
	hit: HitAreas,
}

impl<C: Clock> PickerView<C> {
	#[must_use]
	pub fn new(picker: FilterablePicker<C>) -> Self {
		let mut view = Self {
			picker,
			input: FilterInput::new(),
			list_state: ListState::default(),
			throbber: ThrobberState::default(),
			renderer: Box::new(DefaultRenderer),
			theme: Theme::default(),
			styles: PickerStyles::default(),
			hit: HitAreas::default(),
		};
		view.place_cursor_on_selection();
		view
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	#[must_use]
	pub fn with_styles(mut self, styles: PickerStyles) -> Self {
		self.styles = styles;
		self
	}

	#[must_use]
	pub fn with_renderer(mut self, renderer: impl PickerRenderer + 'static) -> Self {
		self.renderer = Box::new(renderer);
		self
	}

	#[must_use]
	pub fn picker(&self) -> &FilterablePicker<C> {
		&self.picker
	}

	/// Text currently in the filter input, as typed.
	#[must_use]
	pub fn query(&self) -> &str {
		self.input.text()
	}

	/// Row under the keyboard cursor.
	#[must_use]
	pub fn cursor(&self) -> Option<usize> {
		self.list_state.selected()
	}

	#[must_use]
	pub fn hit_areas(&self) -> HitAreas {
		self.hit
	}

	/// Forward new host configuration to the picker and keep the input and
	/// cursor consistent with whatever it decided.
	pub fn configure(&mut self, props: PickerProps) -> Option<ResetReason> {
		let reason = self.picker.configure(props);
		if reason.is_some() {
			if self.picker.filter_text().is_empty() && !self.input.text().is_empty() {
				self.input.clear();
			}
			if reason == Some(ResetReason::Shown) {
				self.place_cursor_on_selection();
			}
		}
		self.clamp_cursor();
		reason
	}

	/// Advance timers: fire a due async filter and spin the loading indicator.
	pub fn tick(&mut self) -> bool {
		if self.picker.props().is_loading {
			self.throbber.calc_next();
		}
		self.picker.poll_timer()
	}

	/// Handle a key press. Returns `true` when the key was consumed.
	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		if !self.picker.is_visible() {
			return false;
		}
		match key.code {
			KeyCode::Esc => {
				self.picker.request_close();
				true
			}
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.picker.request_close();
				true
			}
			KeyCode::Enter => {
				if let Some(row) = self.list_state.selected() {
					self.picker.select(row);
				}
				true
			}
			KeyCode::Up => self.move_cursor(-1),
			KeyCode::Down => self.move_cursor(1),
			KeyCode::PageUp => self.move_cursor(-self.page_size()),
			KeyCode::PageDown => self.move_cursor(self.page_size()),
			KeyCode::Home => self.move_cursor(isize::MIN),
			KeyCode::End => self.move_cursor(isize::MAX),
			_ if self.picker.props().show_filter => {
				if self.input.input(key) {
					self.picker.set_filter_text(self.input.text());
					self.reset_cursor();
				}
				true
			}
			_ => false,
		}
	}

	/// Handle a mouse event against the areas of the last frame.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
		if !self.picker.is_visible() {
			return false;
		}
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				if self
					.hit
					.cancel
					.is_some_and(|area| point_in_rect(area, mouse.column, mouse.row))
				{
					self.picker.cancel();
					return true;
				}
				match self.row_at(mouse.column, mouse.row) {
					Some(row) => {
						self.list_state.select(Some(row));
						self.picker.select(row)
					}
					None => false,
				}
			}
			MouseEventKind::ScrollUp => self.move_cursor(-1),
			MouseEventKind::ScrollDown => self.move_cursor(1),
			_ => false,
		}
	}

	/// Visible row drawn at the given cell, if any.
	#[must_use]
	pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
		let area = self.hit.rows?;
		if !point_in_rect(area, column, row) {
			return None;
		}
		let index = self.list_state.offset() + usize::from(row - area.y);
		(index < self.picker.visible_len()).then_some(index)
	}

	/// Draw the overlay over the whole frame.
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		self.draw_in(frame, area);
	}

	/// Draw the overlay into `area`. Nothing is drawn while hidden.
	pub fn draw_in(&mut self, frame: &mut Frame, area: Rect) {
		self.hit = HitAreas::default();
		if !self.picker.is_visible() {
			return;
		}

		let theme = self.styles.apply(&self.theme);
		self.input.set_style(theme.prompt_style());

		frame.render_widget(Clear, area);
		frame.render_widget(Block::new().style(theme.overlay_style()), area);
		let area = area.inner(Margin {
			vertical: 1,
			horizontal: 2,
		});

		let props = self.picker.props();
		let title = props.labels.title.as_deref().filter(|title| !title.is_empty());
		// Title line plus a blank line beneath it.
		let title_height = if title.is_some() { 2 } else { 0 };
		let [title_area, list_area, _gap, cancel_area] = Layout::vertical([
			Constraint::Length(title_height),
			Constraint::Fill(1),
			Constraint::Length(1),
			Constraint::Length(1),
		])
		.areas(area);

		if let Some(title) = title {
			let heading = Paragraph::new(Line::from(title).centered()).style(theme.title_style());
			frame.render_widget(heading, title_area);
		}

		let rows = self
			.picker
			.visible_options()
			.map(|option| OptionRow {
				option,
				selected: self.picker.is_selected(option),
			})
			.collect();
		let filter = props.show_filter.then(|| FilterContext {
			input: &self.input,
			placeholder: props.labels.placeholder_text.as_str(),
			loading: props.is_loading.then_some(&self.throbber),
		});
		let ctx = ListContext {
			area: list_area,
			rows,
			filter,
			no_results_text: props.labels.no_results_text.as_str(),
			list_state: &mut self.list_state,
			theme: &theme,
		};
		let rows_area = self.renderer.render_list(frame, ctx);

		self.renderer.render_cancel_button(
			frame,
			cancel_area,
			&props.labels.cancel_button_text,
			&theme,
		);

		self.hit = HitAreas {
			rows: rows_area,
			cancel: Some(cancel_area),
		};
	}

	fn page_size(&self) -> isize {
		let rows = self
			.hit
			.rows
			.map_or(DEFAULT_PAGE, |area| usize::from(area.height).max(1));
		isize::try_from(rows).unwrap_or(isize::MAX)
	}

	fn move_cursor(&mut self, delta: isize) -> bool {
		let len = self.picker.visible_len();
		if len == 0 {
			self.list_state.select(None);
			return false;
		}
		let current = self.list_state.selected().unwrap_or(0);
		let next = current.saturating_add_signed(delta).min(len - 1);
		self.list_state.select(Some(next));
		true
	}

	fn reset_cursor(&mut self) {
		let first = (self.picker.visible_len() > 0).then_some(0);
		self.list_state = ListState::default().with_selected(first);
	}

	fn place_cursor_on_selection(&mut self) {
		let selected = self
			.picker
			.visible_options()
			.position(|option| self.picker.is_selected(option));
		match selected {
			Some(row) => self.list_state.select(Some(row)),
			None => self.reset_cursor(),
		}
	}

	fn clamp_cursor(&mut self) {
		let len = self.picker.visible_len();
		match self.list_state.selected() {
			_ if len == 0 => self.list_state.select(None),
			Some(row) if row >= len => self.list_state.select(Some(len - 1)),
			None => self.list_state.select(Some(0)),
			Some(_) => {}
		}
	}
}
