//! Case-insensitive substring filtering over the option list.
//!
//! Filtering never reorders: the result is the input list with non-matching
//! entries removed. An empty filter keeps every entry.

use super::option::PickerOption;

/// Lowercased filter text ready to be matched against options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
	needle: String,
}

impl FilterQuery {
	/// Normalize raw input text into a query.
	#[must_use]
	pub fn new(text: &str) -> Self {
		Self {
			needle: text.to_lowercase(),
		}
	}

	/// The lowercased filter text.
	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.needle
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.needle.is_empty()
	}

	/// Whether `option` matches on its label or its search key.
	#[must_use]
	pub fn matches(&self, option: &PickerOption) -> bool {
		if self.needle.is_empty() {
			return true;
		}
		if option.label.to_lowercase().contains(&self.needle) {
			return true;
		}
		option
			.search_key
			.as_deref()
			.is_some_and(|key| key.to_lowercase().contains(&self.needle))
	}
}

/// Positions of the options matching `query`, in input order.
#[must_use]
pub fn filter_indices(options: &[PickerOption], query: &FilterQuery) -> Vec<usize> {
	if query.is_empty() {
		return (0..options.len()).collect();
	}
	options
		.iter()
		.enumerate()
		.filter(|(_, option)| query.matches(option))
		.map(|(idx, _)| idx)
		.collect()
}

/// Borrow the options whose label or search key contains `filter`,
/// ignoring case.
#[must_use]
pub fn filter_options<'a>(options: &'a [PickerOption], filter: &str) -> Vec<&'a PickerOption> {
	let query = FilterQuery::new(filter);
	filter_indices(options, &query)
		.into_iter()
		.map(|idx| &options[idx])
		.collect()
}
