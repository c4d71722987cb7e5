//! A modal, filterable list picker for the terminal.
//!
//! The root module re-exports the picker controller and its terminal host so
//! that embedders can mount a picker without digging through the module
//! hierarchy.

pub mod app_dirs;
pub mod logging;
pub mod picker;
pub mod source;
pub mod tui;

pub use picker::{
	FilterablePicker, PickerCallbacks, PickerLabels, PickerOption, PickerProps, ResetReason,
	filter_options,
};
pub use source::{InputFormat, LoadError};
pub use tui::{Appearance, PickOutcome, PickerRenderer, PickerStyles, PickerView, SourceCommand, Theme, run};
