//! The filterable picker controller.
//!
//! [`FilterablePicker`] owns the derived state (filter text, visible rows) and
//! the single debounce timer. Hosts feed it configuration through
//! [`FilterablePicker::configure`], text through
//! [`FilterablePicker::set_filter_text`], and poll the timer from their event
//! loop. Row presses and cancellation go straight back to the host callbacks.

pub mod debounce;
pub mod filter;
pub mod option;
pub mod props;
pub mod state;

#[cfg(test)]
mod tests;

use std::time::Instant;

use tracing::{debug, trace};

pub use debounce::{Clock, DEFAULT_ASYNC_TIMEOUT, Debouncer, ManualClock, SystemClock};
pub use filter::{FilterQuery, filter_indices, filter_options};
pub use option::PickerOption;
pub use props::{PickerCallbacks, PickerLabels, PickerProps};
pub use state::{PickerState, ResetReason, Visibility, reset_reason};

/// Modal list picker state machine.
pub struct FilterablePicker<C: Clock = SystemClock> {
	props: PickerProps,
	callbacks: PickerCallbacks,
	state: PickerState,
	timer: Debouncer<String>,
	clock: C,
	disposed: bool,
}

impl FilterablePicker<SystemClock> {
	/// Mount a picker driven by the wall clock.
	#[must_use]
	pub fn new(props: PickerProps, callbacks: PickerCallbacks) -> Self {
		Self::with_clock(props, callbacks, SystemClock)
	}
}

impl<C: Clock> FilterablePicker<C> {
	/// Mount a picker driven by `clock`.
	pub fn with_clock(props: PickerProps, callbacks: PickerCallbacks, clock: C) -> Self {
		let state = PickerState::new(&props.options);
		let timer = Debouncer::new(props.async_timeout);
		Self {
			props,
			callbacks,
			state,
			timer,
			clock,
			disposed: false,
		}
	}

	#[must_use]
	pub fn props(&self) -> &PickerProps {
		&self.props
	}

	#[must_use]
	pub fn state(&self) -> &PickerState {
		&self.state
	}

	/// The full option list from the latest configuration.
	#[must_use]
	pub fn options(&self) -> &[PickerOption] {
		&self.props.options
	}

	#[must_use]
	pub fn filter_text(&self) -> &str {
		self.state.filter_text()
	}

	/// Visible rows in display order.
	pub fn visible_options(&self) -> impl Iterator<Item = &PickerOption> + '_ {
		self.state
			.visible_indices()
			.iter()
			.filter_map(|&idx| self.props.options.get(idx))
	}

	/// The visible row at `row`, counted from the top of the list.
	#[must_use]
	pub fn visible_option(&self, row: usize) -> Option<&PickerOption> {
		let idx = *self.state.visible_indices().get(row)?;
		self.props.options.get(idx)
	}

	#[must_use]
	pub fn visible_len(&self) -> usize {
		self.state.visible_len()
	}

	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.props.visible
	}

	/// Whether the host enabled asynchronous filtering.
	#[must_use]
	pub fn is_async(&self) -> bool {
		self.callbacks.is_async()
	}

	/// Whether `option` is the one the host marked as selected.
	#[must_use]
	pub fn is_selected(&self, option: &PickerOption) -> bool {
		self.props.selected_option.as_deref() == Some(option.key.as_str())
	}

	#[must_use]
	pub fn is_disposed(&self) -> bool {
		self.disposed
	}

	/// Apply a new configuration from the host.
	///
	/// Derived state is rebuilt only when the picker is being shown, or the
	/// option list changed length or first key. Returns the reason when a
	/// rebuild happened. Any other change to the options re-runs the current
	/// filter over the new list.
	pub fn configure(&mut self, next: PickerProps) -> Option<ResetReason> {
		let reason = reset_reason(&self.props, &next);
		let options_changed = self.props.options != next.options;
		self.timer.set_delay(next.async_timeout);
		self.props = next;

		let Some(reason) = reason else {
			if options_changed {
				let filter = self.state.filter_text().to_owned();
				self.state.apply_filter(&self.props.options, &filter);
				trace!(
					filter = %filter,
					visible = self.state.visible_len(),
					"options replaced in place"
				);
			}
			return None;
		};
		let keep_filter = self.is_async();
		self.state.reset(&self.props.options, keep_filter);
		debug!(
			%reason,
			options = self.props.options.len(),
			keep_filter,
			"picker state reset"
		);

		if reason == ResetReason::Shown
			&& let Some(callback) = self.callbacks.on_filter_change_async.as_mut()
		{
			debug!("priming async filter for new session");
			callback("", &self.props.options);
		}
		Some(reason)
	}

	/// Handle a change of the filter input.
	///
	/// Visible rows update immediately. In async mode the host callback is
	/// also scheduled, replacing any call still waiting on the debounce.
	pub fn set_filter_text(&mut self, text: &str) {
		if self.disposed {
			return;
		}
		self.state.apply_filter(&self.props.options, text);
		trace!(
			filter = self.state.filter_text(),
			visible = self.state.visible_len(),
			"filter applied"
		);

		if self.is_async() {
			let now = self.clock.now();
			let filter = self.state.filter_text().to_owned();
			if self.timer.schedule(now, filter) {
				trace!("superseded pending async filter");
			}
		}
	}

	/// Fire the async filter callback if its debounce has elapsed. Returns
	/// `true` when the callback ran.
	pub fn poll_timer(&mut self) -> bool {
		if self.disposed {
			return false;
		}
		let Some(filter) = self.timer.poll(self.clock.now()) else {
			return false;
		};
		let Some(callback) = self.callbacks.on_filter_change_async.as_mut() else {
			return false;
		};
		debug!(filter = %filter, "async filter fired");
		callback(&filter, &self.props.options);
		true
	}

	/// When the pending async filter call is due, if one is waiting.
	#[must_use]
	pub fn next_deadline(&self) -> Option<Instant> {
		self.timer.deadline()
	}

	/// Press the visible row at `row`. Returns `false` when there is no such
	/// row, which includes the "no results" placeholder.
	pub fn select(&mut self, row: usize) -> bool {
		if self.disposed {
			return false;
		}
		let Some(&idx) = self.state.visible_indices().get(row) else {
			return false;
		};
		let Some(option) = self.props.options.get(idx) else {
			return false;
		};
		debug!(key = %option.key, "option selected");
		(self.callbacks.on_select)(option);
		true
	}

	/// Press the cancel action.
	pub fn cancel(&mut self) {
		if self.disposed {
			return;
		}
		debug!("picker cancelled");
		(self.callbacks.on_cancel)();
	}

	/// The overlay asked to close (Esc, back gesture). Treated as a cancel.
	pub fn request_close(&mut self) {
		self.cancel();
	}

	/// Tear the picker down. Any pending async filter call is dropped.
	pub fn dispose(&mut self) {
		if self.disposed {
			return;
		}
		if let Some(filter) = self.timer.cancel() {
			debug!(filter = %filter, "dropped pending async filter on dispose");
		}
		self.disposed = true;
	}
}

impl<C: Clock> Drop for FilterablePicker<C> {
	fn drop(&mut self) {
		self.dispose();
	}
}

impl<C: Clock> std::fmt::Debug for FilterablePicker<C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FilterablePicker")
			.field("props", &self.props)
			.field("state", &self.state)
			.field("callbacks", &self.callbacks)
			.field("timer_pending", &self.timer.is_pending())
			.field("disposed", &self.disposed)
			.finish()
	}
}
