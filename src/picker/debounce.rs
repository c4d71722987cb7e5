//! Deadline-based debounce timer driven by the host event loop.
//!
//! Nothing here spawns threads or sleeps. The owner schedules a payload, then
//! polls with the current time; the payload is released once the deadline has
//! passed without a newer schedule replacing it.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Delay applied before the async filter callback fires.
pub const DEFAULT_ASYNC_TIMEOUT: Duration = Duration::from_millis(700);

/// Source of the current time for timers.
pub trait Clock {
	fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> Instant {
		Instant::now()
	}
}

/// Hand-advanced clock. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
	now: Rc<Cell<Instant>>,
}

impl ManualClock {
	#[must_use]
	pub fn new() -> Self {
		Self {
			now: Rc::new(Cell::new(Instant::now())),
		}
	}

	/// Move the clock forward by `by`.
	pub fn advance(&self, by: Duration) {
		self.now.set(self.now.get() + by);
	}
}

impl Default for ManualClock {
	fn default() -> Self {
		Self::new()
	}
}

impl Clock for ManualClock {
	fn now(&self) -> Instant {
		self.now.get()
	}
}

#[derive(Debug)]
struct Pending<T> {
	deadline: Instant,
	payload: T,
}

/// Holds at most one pending payload and releases it after `delay` of quiet.
#[derive(Debug)]
pub struct Debouncer<T> {
	delay: Duration,
	pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
	#[must_use]
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: None,
		}
	}

	#[must_use]
	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Change the delay used by future schedules. A pending deadline keeps the
	/// delay it was scheduled with.
	pub fn set_delay(&mut self, delay: Duration) {
		self.delay = delay;
	}

	/// Schedule `payload` to fire `delay` after `now`, replacing any pending
	/// payload. Returns `true` when a pending payload was superseded.
	pub fn schedule(&mut self, now: Instant, payload: T) -> bool {
		let superseded = self.pending.is_some();
		self.pending = Some(Pending {
			deadline: now + self.delay,
			payload,
		});
		superseded
	}

	/// Drop the pending payload without firing it.
	pub fn cancel(&mut self) -> Option<T> {
		self.pending.take().map(|pending| pending.payload)
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// When the pending payload will be released, if any.
	#[must_use]
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.deadline)
	}

	/// Release the pending payload if its deadline has been reached.
	pub fn poll(&mut self, now: Instant) -> Option<T> {
		let due = self
			.pending
			.as_ref()
			.is_some_and(|pending| now >= pending.deadline);
		if due { self.cancel() } else { None }
	}
}
