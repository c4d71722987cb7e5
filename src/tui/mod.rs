//! Terminal rendering and hosting for the picker.
//!
//! The submodules here expose the default widgets, the overridable renderer,
//! the [`PickerView`] host and the full-screen [`run`] loop.

pub mod components;
pub mod input;
pub mod render;
pub mod runtime;
pub mod style;
pub mod theme;
pub mod view;

#[cfg(test)]
mod tests;

pub use input::FilterInput;
pub use render::{CURSOR_SYMBOL, DefaultRenderer, ListContext, OptionRow, PickerRenderer};
pub use runtime::{Appearance, PickOutcome, SourceCommand, run};
pub use style::{PickerStyles, StyleSpec};
pub use theme::{Theme, default_theme};
pub use view::{HitAreas, PickerView};
