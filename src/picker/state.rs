use std::fmt;

use super::filter::{FilterQuery, filter_indices};
use super::option::PickerOption;
use super::props::PickerProps;

/// Whether the overlay is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
	Hidden,
	Visible,
}

impl From<bool> for Visibility {
	fn from(visible: bool) -> Self {
		if visible { Self::Visible } else { Self::Hidden }
	}
}

/// Why a configuration update rebuilt the derived state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
	/// The picker went from hidden to visible.
	Shown,
	/// The option list grew or shrank.
	LengthChanged,
	/// The list kept its length but its first key changed.
	FirstKeyChanged,
}

impl fmt::Display for ResetReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Shown => f.write_str("shown"),
			Self::LengthChanged => f.write_str("option count changed"),
			Self::FirstKeyChanged => f.write_str("first option changed"),
		}
	}
}

/// Decide whether moving from `prev` to `next` must rebuild derived state.
#[must_use]
pub fn reset_reason(prev: &PickerProps, next: &PickerProps) -> Option<ResetReason> {
	let was = Visibility::from(prev.visible);
	let now = Visibility::from(next.visible);
	if was == Visibility::Hidden && now == Visibility::Visible {
		return Some(ResetReason::Shown);
	}
	if prev.options.len() != next.options.len() {
		return Some(ResetReason::LengthChanged);
	}
	let first_key = |props: &PickerProps| props.options.first().map(|option| option.key.clone());
	if first_key(prev) != first_key(next) {
		return Some(ResetReason::FirstKeyChanged);
	}
	None
}

/// Filter text plus the rows it leaves visible.
///
/// Rows are stored as positions in the option list the state was last built
/// from. The controller rebuilds them whenever that list changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
	filter_text: String,
	visible: Vec<usize>,
}

impl PickerState {
	/// Fresh state showing every option.
	#[must_use]
	pub fn new(options: &[PickerOption]) -> Self {
		Self {
			filter_text: String::new(),
			visible: (0..options.len()).collect(),
		}
	}

	/// Current (lowercased) filter text.
	#[must_use]
	pub fn filter_text(&self) -> &str {
		&self.filter_text
	}

	/// Positions of the visible rows within the option list.
	#[must_use]
	pub fn visible_indices(&self) -> &[usize] {
		&self.visible
	}

	#[must_use]
	pub fn visible_len(&self) -> usize {
		self.visible.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.visible.is_empty()
	}

	/// Replace the filter and recompute the visible rows.
	pub(crate) fn apply_filter(&mut self, options: &[PickerOption], text: &str) {
		let query = FilterQuery::new(text);
		self.visible = filter_indices(options, &query);
		self.filter_text = query.as_str().to_owned();
	}

	/// Show every option again, clearing the filter unless asked to keep it.
	pub(crate) fn reset(&mut self, options: &[PickerOption], keep_filter: bool) {
		self.visible = (0..options.len()).collect();
		if !keep_filter {
			self.filter_text.clear();
		}
	}
}
