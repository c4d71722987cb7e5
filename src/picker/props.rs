use std::fmt;
use std::time::Duration;

use super::debounce::DEFAULT_ASYNC_TIMEOUT;
use super::option::PickerOption;

/// Display strings rendered by the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerLabels {
	/// Shown in the filter input while it is empty.
	pub placeholder_text: String,
	/// Shown in place of the list when nothing matches.
	pub no_results_text: String,
	/// Optional heading above the list.
	pub title: Option<String>,
	pub cancel_button_text: String,
}

impl Default for PickerLabels {
	fn default() -> Self {
		Self {
			placeholder_text: "Filter...".to_string(),
			no_results_text: "No matches".to_string(),
			title: None,
			cancel_button_text: "Cancel".to_string(),
		}
	}
}

/// Host-supplied configuration for one render of the picker.
///
/// Hosts hand a fresh value to [`FilterablePicker::configure`] whenever any of
/// it changes; the picker decides whether derived state has to be rebuilt.
///
/// [`FilterablePicker::configure`]: super::FilterablePicker::configure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerProps {
	pub options: Vec<PickerOption>,
	pub visible: bool,
	pub show_filter: bool,
	/// Key of the option rendered with the selected style.
	pub selected_option: Option<String>,
	/// Show a spinner beside the filter input.
	pub is_loading: bool,
	/// Debounce applied before the async filter callback fires.
	pub async_timeout: Duration,
	pub labels: PickerLabels,
}

impl Default for PickerProps {
	fn default() -> Self {
		Self {
			options: Vec::new(),
			visible: true,
			show_filter: true,
			selected_option: None,
			is_loading: false,
			async_timeout: DEFAULT_ASYNC_TIMEOUT,
			labels: PickerLabels::default(),
		}
	}
}

impl PickerProps {
	#[must_use]
	pub fn new(options: Vec<PickerOption>) -> Self {
		Self {
			options,
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_options(mut self, options: Vec<PickerOption>) -> Self {
		self.options = options;
		self
	}

	#[must_use]
	pub fn with_visible(mut self, visible: bool) -> Self {
		self.visible = visible;
		self
	}

	#[must_use]
	pub fn with_show_filter(mut self, show_filter: bool) -> Self {
		self.show_filter = show_filter;
		self
	}

	#[must_use]
	pub fn with_selected(mut self, key: impl Into<String>) -> Self {
		self.selected_option = Some(key.into());
		self
	}

	#[must_use]
	pub fn with_loading(mut self, is_loading: bool) -> Self {
		self.is_loading = is_loading;
		self
	}

	#[must_use]
	pub fn with_async_timeout(mut self, timeout: Duration) -> Self {
		self.async_timeout = timeout;
		self
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.labels.title = Some(title.into());
		self
	}

	#[must_use]
	pub fn with_labels(mut self, labels: PickerLabels) -> Self {
		self.labels = labels;
		self
	}
}

pub type SelectCallback = Box<dyn FnMut(&PickerOption)>;
pub type CancelCallback = Box<dyn FnMut()>;
/// Receives the lowercased filter text and the full option list.
pub type FilterChangeCallback = Box<dyn FnMut(&str, &[PickerOption])>;

/// Callbacks through which the picker returns control to its host.
pub struct PickerCallbacks {
	pub(crate) on_select: SelectCallback,
	pub(crate) on_cancel: CancelCallback,
	pub(crate) on_filter_change_async: Option<FilterChangeCallback>,
}

impl PickerCallbacks {
	pub fn new<S, C>(on_select: S, on_cancel: C) -> Self
	where
		S: FnMut(&PickerOption) + 'static,
		C: FnMut() + 'static,
	{
		Self {
			on_select: Box::new(on_select),
			on_cancel: Box::new(on_cancel),
			on_filter_change_async: None,
		}
	}

	/// Enable asynchronous filtering. The callback fires once typing pauses for
	/// the configured timeout, and when the picker is shown again.
	#[must_use]
	pub fn on_filter_change_async<F>(mut self, callback: F) -> Self
	where
		F: FnMut(&str, &[PickerOption]) + 'static,
	{
		self.on_filter_change_async = Some(Box::new(callback));
		self
	}

	/// Callbacks that ignore every event.
	#[must_use]
	pub fn noop() -> Self {
		Self::new(|_| {}, || {})
	}

	#[must_use]
	pub fn is_async(&self) -> bool {
		self.on_filter_change_async.is_some()
	}
}

impl fmt::Debug for PickerCallbacks {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PickerCallbacks")
			.field("async", &self.is_async())
			.finish_non_exhaustive()
	}
}
