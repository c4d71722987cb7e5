use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::*;

type Calls = Rc<RefCell<Vec<(String, Vec<String>)>>>;

fn fruit() -> Vec<PickerOption> {
	vec![PickerOption::new("a", "Apple"), PickerOption::new("b", "Banana")]
}

fn keys<'a>(options: impl Iterator<Item = &'a PickerOption>) -> Vec<String> {
	options.map(|option| option.key.clone()).collect()
}

fn async_picker(props: PickerProps) -> (FilterablePicker<ManualClock>, ManualClock, Calls) {
	let clock = ManualClock::new();
	let calls: Calls = Rc::default();
	let sink = Rc::clone(&calls);
	let callbacks = PickerCallbacks::noop().on_filter_change_async(move |filter, options| {
		sink.borrow_mut()
			.push((filter.to_owned(), keys(options.iter())));
	});
	let picker = FilterablePicker::with_clock(props, callbacks, clock.clone());
	(picker, clock, calls)
}

#[test]
fn mount_shows_every_option_with_empty_filter() {
	let picker = FilterablePicker::new(PickerProps::new(fruit()), PickerCallbacks::noop());
	assert_eq!(picker.filter_text(), "");
	assert_eq!(keys(picker.visible_options()), ["a", "b"]);
}

#[test]
fn typing_filters_synchronously() {
	let mut picker = FilterablePicker::new(PickerProps::new(fruit()), PickerCallbacks::noop());
	picker.set_filter_text("an");
	assert_eq!(keys(picker.visible_options()), ["b"]);

	picker.set_filter_text("an");
	assert_eq!(keys(picker.visible_options()), ["b"]);

	picker.set_filter_text("");
	assert_eq!(keys(picker.visible_options()), ["a", "b"]);
}

#[test]
fn showing_again_clears_the_filter() {
	let mut picker = FilterablePicker::new(PickerProps::new(fruit()), PickerCallbacks::noop());
	picker.set_filter_text("an");

	picker.configure(PickerProps::new(fruit()).with_visible(false));
	assert_eq!(picker.filter_text(), "an");

	let reason = picker.configure(PickerProps::new(fruit()));
	assert_eq!(reason, Some(ResetReason::Shown));
	assert_eq!(picker.filter_text(), "");
	assert_eq!(keys(picker.visible_options()), ["a", "b"]);
}

#[test]
fn identical_configuration_leaves_state_alone() {
	let mut picker = FilterablePicker::new(PickerProps::new(fruit()), PickerCallbacks::noop());
	picker.set_filter_text("app");

	let reason = picker.configure(PickerProps::new(fruit()).with_selected("a"));
	assert_eq!(reason, None);
	assert_eq!(picker.filter_text(), "app");
	assert_eq!(keys(picker.visible_options()), ["a"]);
}

#[test]
fn replaced_option_list_shows_all_new_rows() {
	let mut picker = FilterablePicker::new(PickerProps::new(fruit()), PickerCallbacks::noop());
	picker.set_filter_text("ban");

	let replacement = vec![PickerOption::new("c", "Cherry"), PickerOption::new("d", "Date")];
	let reason = picker.configure(PickerProps::new(replacement));
	assert_eq!(reason, Some(ResetReason::FirstKeyChanged));
	assert_eq!(picker.filter_text(), "");
	assert_eq!(keys(picker.visible_options()), ["c", "d"]);
}

#[test]
fn in_place_replacement_refilters_without_reset() {
	let options = vec![
		PickerOption::new("a", "Apple"),
		PickerOption::new("b", "Banana"),
		PickerOption::new("c", "Cherry"),
	];
	let mut picker = FilterablePicker::new(PickerProps::new(options), PickerCallbacks::noop());
	picker.set_filter_text("an");
	assert_eq!(keys(picker.visible_options()), ["b"]);

	let replacement = vec![
		PickerOption::new("a", "Apple"),
		PickerOption::new("x", "Xylophone"),
		PickerOption::new("c", "Cherry"),
	];
	let reason = picker.configure(PickerProps::new(replacement));
	assert_eq!(reason, None);
	assert_eq!(picker.filter_text(), "an");
	assert_eq!(picker.visible_len(), 0);
	assert!(!picker.select(0));

	let replacement = vec![
		PickerOption::new("a", "Apple"),
		PickerOption::new("m", "Mango"),
		PickerOption::new("c", "Cherry"),
	];
	picker.configure(PickerProps::new(replacement));
	assert_eq!(keys(picker.visible_options()), ["m"]);
}

#[test]
fn async_in_place_results_are_filtered_without_priming() {
	let (mut picker, _clock, calls) = async_picker(PickerProps::new(fruit()));
	picker.set_filter_text("ban");

	let results = vec![PickerOption::new("a", "Apple"), PickerOption::new("z", "Bandana")];
	assert_eq!(picker.configure(PickerProps::new(results)), None);
	assert_eq!(keys(picker.visible_options()), ["z"]);
	assert!(calls.borrow().is_empty());
}

#[test]
fn debounce_sends_only_latest_filter() {
	let (mut picker, clock, calls) = async_picker(PickerProps::new(fruit()));
	picker.set_filter_text("x");
	clock.advance(Duration::from_millis(300));
	picker.set_filter_text("XY");
	clock.advance(Duration::from_millis(500));
	assert!(!picker.poll_timer());

	clock.advance(Duration::from_millis(200));
	assert!(picker.poll_timer());
	assert!(!picker.poll_timer());

	let calls = calls.borrow();
	assert_eq!(calls.len(), 1);
	assert_eq!(calls[0], ("xy".to_string(), vec!["a".to_string(), "b".to_string()]));
}

#[test]
fn async_mode_still_filters_immediately() {
	let (mut picker, _clock, calls) = async_picker(PickerProps::new(fruit()));
	picker.set_filter_text("an");
	assert_eq!(keys(picker.visible_options()), ["b"]);
	assert!(calls.borrow().is_empty());
	assert!(picker.next_deadline().is_some());
}

#[test]
fn dropping_cancels_the_pending_call() {
	let (mut picker, clock, calls) = async_picker(PickerProps::new(fruit()));
	picker.set_filter_text("x");
	clock.advance(Duration::from_millis(100));
	drop(picker);

	clock.advance(Duration::from_millis(1_000));
	assert!(calls.borrow().is_empty());
}

#[test]
fn disposed_picker_never_fires() {
	let (mut picker, clock, calls) = async_picker(PickerProps::new(fruit()));
	picker.set_filter_text("x");
	picker.dispose();
	clock.advance(Duration::from_millis(1_000));
	assert!(!picker.poll_timer());
	assert!(calls.borrow().is_empty());
	assert!(picker.is_disposed());
}

#[test]
fn async_reset_keeps_filter_and_primes_on_show() {
	let (mut picker, _clock, calls) = async_picker(PickerProps::new(fruit()));
	picker.set_filter_text("ban");

	let results = vec![PickerOption::new("b", "Banana")];
	let reason = picker.configure(PickerProps::new(results.clone()));
	assert_eq!(reason, Some(ResetReason::LengthChanged));
	assert_eq!(picker.filter_text(), "ban");
	assert_eq!(keys(picker.visible_options()), ["b"]);
	assert!(calls.borrow().is_empty());

	picker.configure(PickerProps::new(results.clone()).with_visible(false));
	picker.configure(PickerProps::new(fruit()));
	let calls = calls.borrow();
	assert_eq!(calls.len(), 1);
	assert_eq!(calls[0].0, "");
	assert_eq!(calls[0].1, ["a", "b"]);
	assert_eq!(picker.filter_text(), "ban");
}

#[test]
fn configured_timeout_applies_to_next_schedule() {
	let props = PickerProps::new(fruit()).with_async_timeout(Duration::from_millis(50));
	let (mut picker, clock, calls) = async_picker(props);
	picker.set_filter_text("a");
	clock.advance(Duration::from_millis(50));
	assert!(picker.poll_timer());
	assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn select_passes_the_visible_row_to_the_host() {
	let chosen: Rc<RefCell<Option<PickerOption>>> = Rc::default();
	let cancelled = Rc::new(RefCell::new(0));
	let sink = Rc::clone(&chosen);
	let counter = Rc::clone(&cancelled);
	let callbacks = PickerCallbacks::new(
		move |option| *sink.borrow_mut() = Some(option.clone()),
		move || *counter.borrow_mut() += 1,
	);
	let mut picker = FilterablePicker::new(PickerProps::new(fruit()), callbacks);
	picker.set_filter_text("an");

	assert!(picker.select(0));
	assert_eq!(chosen.borrow().as_ref().map(|o| o.key.as_str()), Some("b"));

	assert!(!picker.select(1));

	picker.request_close();
	picker.cancel();
	assert_eq!(*cancelled.borrow(), 2);
}

#[test]
fn placeholder_row_is_not_selectable() {
	let mut picker = FilterablePicker::new(PickerProps::new(fruit()), PickerCallbacks::noop());
	picker.set_filter_text("zzz");
	assert_eq!(picker.visible_len(), 0);
	assert!(!picker.select(0));
}

#[test]
fn selected_key_is_reported_per_option() {
	let picker = FilterablePicker::new(
		PickerProps::new(fruit()).with_selected("b"),
		PickerCallbacks::noop(),
	);
	let flags: Vec<bool> = picker
		.visible_options()
		.map(|option| picker.is_selected(option))
		.collect();
	assert_eq!(flags, [false, true]);
}
