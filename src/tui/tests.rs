use std::cell::RefCell;
use std::rc::Rc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::widgets::ListItem;

use super::theme::{SLATE, Theme};
use super::{PickerRenderer, PickerView};
use crate::picker::{FilterablePicker, PickerCallbacks, PickerOption, PickerProps};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
	Selected(String),
	Cancelled,
}

type Events = Rc<RefCell<Vec<Event>>>;

fn fruit() -> Vec<PickerOption> {
	vec![
		PickerOption::new("a", "Apple"),
		PickerOption::new("b", "Banana"),
		PickerOption::new("c", "Cherry"),
	]
}

fn recording_view(props: PickerProps) -> (PickerView, Events) {
	let events: Events = Rc::default();
	let on_select = {
		let events = Rc::clone(&events);
		move |option: &PickerOption| events.borrow_mut().push(Event::Selected(option.key.clone()))
	};
	let on_cancel = {
		let events = Rc::clone(&events);
		move || events.borrow_mut().push(Event::Cancelled)
	};
	let picker = FilterablePicker::new(props, PickerCallbacks::new(on_select, on_cancel));
	(PickerView::new(picker), events)
}

fn draw(view: &mut PickerView) -> Buffer {
	let mut terminal = Terminal::new(TestBackend::new(40, 14)).unwrap();
	terminal.draw(|frame| view.draw(frame)).unwrap();
	terminal.backend().buffer().clone()
}

fn buffer_lines(buf: &Buffer) -> Vec<String> {
	(0..buf.area.height)
		.map(|y| {
			(0..buf.area.width)
				.map(|x| buf[(x, y)].symbol())
				.collect::<String>()
		})
		.collect()
}

/// Cell position of the first character of `needle`.
fn locate(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
	buffer_lines(buf).iter().enumerate().find_map(|(y, line)| {
		let byte = line.find(needle)?;
		let x = line[..byte].chars().count();
		Some((u16::try_from(x).ok()?, u16::try_from(y).ok()?))
	})
}

fn occurrences(buf: &Buffer, needle: &str) -> usize {
	buffer_lines(buf)
		.iter()
		.map(|line| line.matches(needle).count())
		.sum()
}

fn press(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

fn type_text(view: &mut PickerView, text: &str) {
	for ch in text.chars() {
		view.handle_key(press(KeyCode::Char(ch)));
	}
}

#[test]
fn renders_every_option_with_placeholder_and_cancel() {
	let (mut view, _) = recording_view(PickerProps::new(fruit()));
	let buf = draw(&mut view);

	for label in ["Apple", "Banana", "Cherry", "Filter...", "Cancel"] {
		assert_eq!(occurrences(&buf, label), 1, "expected `{label}` once");
	}
	let (_, apple) = locate(&buf, "Apple").unwrap();
	let (_, banana) = locate(&buf, "Banana").unwrap();
	assert_eq!(banana, apple + 1, "rows keep input order");
}

#[test]
fn only_the_selected_option_uses_the_selected_style() {
	let (mut view, _) = recording_view(PickerProps::new(fruit()).with_selected("b"));
	let buf = draw(&mut view);
	let theme: Theme = SLATE;

	let (x, y) = locate(&buf, "Banana").unwrap();
	assert_eq!(buf[(x, y)].fg, theme.selected.fg.unwrap());
	let (x, y) = locate(&buf, "Apple").unwrap();
	assert_eq!(buf[(x, y)].fg, theme.option.fg.unwrap());
	assert_eq!(occurrences(&buf, super::components::SELECTED_MARKER.trim()), 1);
}

#[test]
fn cursor_starts_on_the_selected_option() {
	let (view, _) = recording_view(PickerProps::new(fruit()).with_selected("c"));
	assert_eq!(view.cursor(), Some(2));

	let (view, _) = recording_view(PickerProps::new(fruit()));
	assert_eq!(view.cursor(), Some(0));
}

#[test]
fn typing_filters_the_rows() {
	let (mut view, _) = recording_view(PickerProps::new(fruit()));
	type_text(&mut view, "AN");

	assert_eq!(view.query(), "AN");
	assert_eq!(view.picker().filter_text(), "an");
	let buf = draw(&mut view);
	assert_eq!(occurrences(&buf, "Banana"), 1);
	assert_eq!(occurrences(&buf, "Apple"), 0);
	assert_eq!(occurrences(&buf, "Filter..."), 0);
	assert_eq!(view.cursor(), Some(0));
}

#[test]
fn no_matches_renders_one_inert_placeholder() {
	let (mut view, events) = recording_view(PickerProps::new(fruit()));
	type_text(&mut view, "zzz");
	let buf = draw(&mut view);

	assert_eq!(occurrences(&buf, "No matches"), 1);
	assert_eq!(view.hit_areas().rows, None);
	assert_eq!(view.cursor(), None);

	let (x, y) = locate(&buf, "No matches").unwrap();
	assert!(!view.handle_mouse(click(x, y)));
	view.handle_key(press(KeyCode::Enter));
	assert!(events.borrow().is_empty());
}

#[test]
fn clicking_a_row_selects_that_option() {
	let (mut view, events) = recording_view(PickerProps::new(fruit()));
	let buf = draw(&mut view);

	let (x, y) = locate(&buf, "Banana").unwrap();
	assert_eq!(view.row_at(x, y), Some(1));
	assert!(view.handle_mouse(click(x, y)));
	assert_eq!(*events.borrow(), [Event::Selected("b".into())]);
}

#[test]
fn clicking_cancel_cancels() {
	let (mut view, events) = recording_view(PickerProps::new(fruit()));
	let buf = draw(&mut view);

	let (x, y) = locate(&buf, "Cancel").unwrap();
	assert!(view.handle_mouse(click(x, y)));
	assert_eq!(*events.borrow(), [Event::Cancelled]);
}

#[test]
fn keyboard_moves_the_cursor_and_presses_rows() {
	let (mut view, events) = recording_view(PickerProps::new(fruit()));
	view.handle_key(press(KeyCode::Down));
	view.handle_key(press(KeyCode::Down));
	view.handle_key(press(KeyCode::Down));
	assert_eq!(view.cursor(), Some(2));
	view.handle_key(press(KeyCode::Home));
	assert_eq!(view.cursor(), Some(0));
	view.handle_key(press(KeyCode::End));
	view.handle_key(press(KeyCode::Up));
	view.handle_key(press(KeyCode::Enter));
	assert_eq!(*events.borrow(), [Event::Selected("b".into())]);
}

#[test]
fn escape_requests_close() {
	let (mut view, events) = recording_view(PickerProps::new(fruit()));
	assert!(view.handle_key(press(KeyCode::Esc)));
	assert_eq!(*events.borrow(), [Event::Cancelled]);
}

#[test]
fn hidden_picker_draws_nothing_and_ignores_input() {
	let (mut view, events) = recording_view(PickerProps::new(fruit()).with_visible(false));
	let buf = draw(&mut view);

	assert!(buffer_lines(&buf).iter().all(|line| line.trim().is_empty()));
	assert_eq!(view.hit_areas(), super::HitAreas::default());
	assert!(!view.handle_key(press(KeyCode::Esc)));
	assert!(events.borrow().is_empty());
}

#[test]
fn showing_again_clears_the_typed_filter() {
	let (mut view, _) = recording_view(PickerProps::new(fruit()));
	type_text(&mut view, "an");

	view.configure(PickerProps::new(fruit()).with_visible(false));
	assert_eq!(view.query(), "an");
	view.configure(PickerProps::new(fruit()));
	assert_eq!(view.query(), "");
	assert_eq!(view.picker().visible_len(), 3);
}

#[test]
fn title_is_drawn_above_the_list() {
	let (mut view, _) = recording_view(PickerProps::new(fruit()).with_title("Pick a fruit"));
	let buf = draw(&mut view);

	let (_, title) = locate(&buf, "Pick a fruit").unwrap();
	let (_, apple) = locate(&buf, "Apple").unwrap();
	assert!(title < apple);
}

#[test]
fn hiding_the_filter_drops_the_input_row() {
	let (mut view, _) = recording_view(PickerProps::new(fruit()).with_show_filter(false));
	let buf = draw(&mut view);

	assert_eq!(occurrences(&buf, "Filter..."), 0);
	assert!(!view.handle_key(press(KeyCode::Char('x'))));
	assert_eq!(view.picker().visible_len(), 3);
}

#[test]
fn custom_renderer_replaces_option_rows() {
	struct Shouting;

	impl PickerRenderer for Shouting {
		fn render_option<'a>(&self, option: &'a PickerOption, _selected: bool, _theme: &Theme) -> ListItem<'a> {
			ListItem::new(option.label.to_uppercase())
		}
	}

	let (view, _) = recording_view(PickerProps::new(fruit()));
	let mut view = view.with_renderer(Shouting);
	let buf = draw(&mut view);

	assert_eq!(occurrences(&buf, "BANANA"), 1);
	assert_eq!(occurrences(&buf, "Banana"), 0);
	assert_eq!(occurrences(&buf, "Cancel"), 1);
}

#[test]
fn async_results_replace_rows_through_configure() {
	let (mut view, _) = recording_view(PickerProps::new(fruit()));
	let reason = view.configure(PickerProps::new(vec![PickerOption::new("d", "Date")]));
	assert!(reason.is_some());

	let buf = draw(&mut view);
	assert_eq!(occurrences(&buf, "Date"), 1);
	assert_eq!(occurrences(&buf, "Apple"), 0);
	assert_eq!(view.cursor(), Some(0));
}
