//! Terminal runtime and event loop.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io::stdout;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::style::PickerStyles;
use super::theme::Theme;
use super::view::PickerView;
use crate::picker::{FilterablePicker, PickerCallbacks, PickerOption, PickerProps};
use crate::source::{InputFormat, LoadError, RunningCommand, run_command_in};

/// How a picker session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickOutcome {
	/// `true` when an option was chosen, `false` when the picker was cancelled.
	pub accepted: bool,
	/// Filter text at the time the picker closed.
	pub query: String,
	pub selection: Option<PickerOption>,
}

/// Shell command that produces a fresh option list for a filter text.
#[derive(Debug, Clone)]
pub struct SourceCommand {
	pub command: String,
	pub format: InputFormat,
}

/// Appearance of the overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct Appearance {
	pub theme: Theme,
	pub styles: PickerStyles,
}

enum Decision {
	Selected(PickerOption),
	Cancelled,
}

type SourceResult = (String, Result<Vec<PickerOption>, LoadError>);

/// Runs source commands off the UI thread, one at a time, in request order.
struct SourceWorker {
	requests: Option<mpsc::Sender<String>>,
	results: mpsc::Receiver<SourceResult>,
	in_flight: Rc<Cell<usize>>,
	running: RunningCommand,
	handle: Option<JoinHandle<()>>,
}

impl SourceWorker {
	fn spawn(source: SourceCommand) -> Self {
		let (request_tx, request_rx) = mpsc::channel::<String>();
		let (result_tx, result_rx) = mpsc::channel();
		let running = RunningCommand::default();
		let slot = running.clone();
		let handle = thread::spawn(move || {
			for query in request_rx {
				let result = run_command_in(&source.command, &query, source.format, &slot);
				if result_tx.send((query, result)).is_err() {
					break;
				}
			}
		});
		Self {
			requests: Some(request_tx),
			results: result_rx,
			in_flight: Rc::new(Cell::new(0)),
			running,
			handle: Some(handle),
		}
	}

	/// Callback handed to the picker as its async filter.
	fn requester(&self) -> impl FnMut(&str, &[PickerOption]) + 'static {
		let requests = self.requests.clone();
		let in_flight = Rc::clone(&self.in_flight);
		move |query: &str, _options: &[PickerOption]| {
			let Some(requests) = &requests else {
				return;
			};
			if requests.send(query.to_owned()).is_ok() {
				in_flight.set(in_flight.get() + 1);
			}
		}
	}

	fn is_busy(&self) -> bool {
		self.in_flight.get() > 0
	}

	/// Newest successful option list among finished commands.
	fn drain(&self) -> Option<Vec<PickerOption>> {
		let mut latest = None;
		for (query, result) in self.results.try_iter() {
			self.in_flight.set(self.in_flight.get().saturating_sub(1));
			match result {
				Ok(options) => {
					debug!(query = %query, options = options.len(), "source command finished");
					latest = Some(options);
				}
				Err(err) => warn!(query = %query, error = %err, "source command failed"),
			}
		}
		latest
	}

	/// Stop taking requests and kill the command in progress. A worker still
	/// blocked on the command's output is left to finish on its own.
	fn shutdown(&mut self) {
		self.requests = None;
		if self.running.kill() {
			debug!("killed running source command");
		}
		let Some(handle) = self.handle.take() else {
			return;
		};
		if !handle.is_finished() {
			debug!("detaching source worker");
			return;
		}
		if handle.join().is_err() {
			warn!("source worker panicked");
		}
	}
}

/// Show the picker full-screen until an option is chosen or it is cancelled.
///
/// With a `source`, filter changes are debounced into runs of the source
/// command and its output replaces the option list.
pub fn run(
	props: PickerProps,
	appearance: Appearance,
	source: Option<SourceCommand>,
) -> Result<PickOutcome> {
	let decision: Rc<RefCell<Option<Decision>>> = Rc::default();
	let on_select = {
		let decision = Rc::clone(&decision);
		move |option: &PickerOption| {
			*decision.borrow_mut() = Some(Decision::Selected(option.clone()));
		}
	};
	let on_cancel = {
		let decision = Rc::clone(&decision);
		move || {
			*decision.borrow_mut() = Some(Decision::Cancelled);
		}
	};
	let mut callbacks = PickerCallbacks::new(on_select, on_cancel);

	let mut worker = source.map(SourceWorker::spawn);
	if let Some(worker) = &worker {
		callbacks = callbacks.on_filter_change_async(worker.requester());
	}

	info!(
		options = props.options.len(),
		async_source = worker.is_some(),
		"starting picker"
	);
	let picker = FilterablePicker::new(props, callbacks);
	let view = PickerView::new(picker)
		.with_theme(appearance.theme)
		.with_styles(appearance.styles);

	// The view owns the callbacks and with them a request sender; it is
	// dropped inside `drive`, so the worker sees a closed channel on shutdown.
	let result = drive(view, &decision, worker.as_ref());

	if let Some(worker) = worker.as_mut() {
		worker.shutdown();
	}
	result
}

fn drive(
	mut view: PickerView,
	decision: &RefCell<Option<Decision>>,
	worker: Option<&SourceWorker>,
) -> Result<PickOutcome> {
	let mut terminal = ratatui::init();
	let restore = OnDrop(restore_terminal);
	terminal.clear()?;
	execute!(stdout(), EnableMouseCapture)?;

	let (event_tx, event_rx) = mpsc::channel();
	let event_loop_running = Arc::new(AtomicBool::new(true));
	let event_loop_flag = Arc::clone(&event_loop_running);

	let event_thread = thread::spawn(move || -> Result<()> {
		while event_loop_flag.load(Ordering::Relaxed) {
			if event::poll(Duration::from_millis(50))? {
				let event = event::read()?;
				if event_tx.send(event).is_err() {
					break;
				}
			}
		}
		Ok(())
	});

	let mut pending_events = VecDeque::new();

	let result: Result<PickOutcome> = 'event_loop: loop {
		loop {
			match event_rx.try_recv() {
				Ok(event) => pending_events.push_back(event),
				Err(mpsc::TryRecvError::Empty) => break,
				Err(mpsc::TryRecvError::Disconnected) => {
					break 'event_loop Err(anyhow!("input event channel disconnected"));
				}
			}
		}

		while let Some(event) = pending_events.pop_front() {
			match event {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					view.handle_key(key);
				}
				Event::Mouse(mouse) => {
					view.handle_mouse(mouse);
				}
				_ => {}
			}
			if decision.borrow().is_some() {
				break;
			}
		}

		if let Some(decided) = decision.borrow_mut().take() {
			let query = view.query().to_owned();
			break Ok(match decided {
				Decision::Selected(option) => PickOutcome {
					accepted: true,
					query,
					selection: Some(option),
				},
				Decision::Cancelled => PickOutcome {
					accepted: false,
					query,
					selection: None,
				},
			});
		}

		view.tick();
		if let Some(worker) = worker {
			pump_source(&mut view, worker);
		}

		if let Err(err) = terminal.draw(|frame| view.draw(frame)) {
			break Err(err.into());
		}

		thread::sleep(Duration::from_millis(16));
	};

	// Disposes the picker and cancels its pending timer.
	drop(view);

	drop(restore);

	event_loop_running.store(false, Ordering::Relaxed);
	match event_thread.join() {
		Ok(join_result) => join_result?,
		Err(err) => std::panic::resume_unwind(err),
	}

	result
}

/// Runs its closure when dropped.
struct OnDrop<F: FnMut()>(F);

impl<F: FnMut()> Drop for OnDrop<F> {
	fn drop(&mut self) {
		(self.0)();
	}
}

fn restore_terminal() {
	ratatui::restore();
	if let Err(err) = execute!(stdout(), DisableMouseCapture) {
		warn!(error = %err, "failed to disable mouse capture");
	}
}

/// Apply finished source commands and keep the loading flag in sync.
fn pump_source(view: &mut PickerView, worker: &SourceWorker) {
	let fresh = worker.drain();
	let busy = worker.is_busy();
	let props = view.picker().props();
	if fresh.is_none() && props.is_loading == busy {
		return;
	}
	let mut next = props.clone().with_loading(busy);
	if let Some(options) = fresh {
		next = next.with_options(options);
	}
	view.configure(next);
}
