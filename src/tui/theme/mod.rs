mod builtins;
mod registry;
mod types;

pub use builtins::{LIGHT, SLATE, SOLARIZED};
pub use registry::{by_name, names};
pub use types::{Theme, ThemeDefinition};

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = builtins::slate::NAME;

/// Theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
