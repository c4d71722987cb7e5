//! Default building blocks for the picker overlay.

/// Cancel button.
pub mod cancel;
/// Filter input row with placeholder and loading spinner.
pub mod prompt;
/// Option and placeholder rows.
pub mod rows;

use ratatui::layout::Rect;

pub use cancel::render_cancel_button;
pub use prompt::{FilterContext, render_filter};
pub use rows::{SELECTED_MARKER, no_results_item, option_item};

/// Whether the terminal cell at (`column`, `row`) lies inside `area`.
#[must_use]
pub fn point_in_rect(area: Rect, column: u16, row: u16) -> bool {
	column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
