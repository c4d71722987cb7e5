//! Name lookup over the bundled themes.

use super::builtins::BUILT_IN_DEFINITIONS;
use super::types::{Theme, ThemeDefinition};

fn matches(definition: &ThemeDefinition, wanted: &str) -> bool {
	definition.name.eq_ignore_ascii_case(wanted)
		|| definition
			.aliases
			.iter()
			.any(|alias| alias.eq_ignore_ascii_case(wanted))
}

/// Bundled theme called `name` or one of its aliases, ignoring case and
/// surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = name.trim();
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| matches(definition, wanted))
		.map(|definition| definition.theme)
}

/// Canonical theme names in alphabetical order. Aliases are not listed.
#[must_use]
pub fn names() -> Vec<&'static str> {
	let mut names: Vec<_> = BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect();
	names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
	names
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tui::theme::{LIGHT, SLATE, SOLARIZED};

	#[test]
	fn names_are_sorted_and_exclude_aliases() {
		assert_eq!(names(), ["light", "slate", "solarized"]);
	}

	#[test]
	fn lookup_ignores_case_and_padding() {
		assert_eq!(by_name("Solarized"), Some(SOLARIZED));
		assert_eq!(by_name("  LIGHT "), Some(LIGHT));
	}

	#[test]
	fn aliases_resolve_to_their_theme() {
		assert_eq!(by_name("dark"), Some(SLATE));
		assert_eq!(by_name("Dark"), by_name("slate"));
	}

	#[test]
	fn unknown_names_find_nothing() {
		assert_eq!(by_name("neon"), None);
		assert_eq!(by_name(""), None);
	}
}
