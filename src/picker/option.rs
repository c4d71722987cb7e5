use serde::{Deserialize, Serialize};

/// A single selectable entry supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerOption {
	/// Unique identifier of the entry.
	pub key: String,
	/// Text displayed for the entry.
	pub label: String,
	/// Alternate text matched by the filter in addition to the label.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub search_key: Option<String>,
}

impl PickerOption {
	/// Construct an option without a search key.
	#[must_use]
	pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
			search_key: None,
		}
	}

	/// Attach alternate text the filter should also match against.
	#[must_use]
	pub fn with_search_key(mut self, search_key: impl Into<String>) -> Self {
		self.search_key = Some(search_key.into());
		self
	}

	/// Construct an option whose key and label are the same text.
	#[must_use]
	pub fn from_text(text: impl Into<String>) -> Self {
		let text = text.into();
		Self {
			key: text.clone(),
			label: text,
			search_key: None,
		}
	}
}
