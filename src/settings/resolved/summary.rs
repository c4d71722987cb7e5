use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	match &config.input {
		Some(path) => println!("  Input: {}", path.display()),
		None => println!("  Input: (stdin)"),
	}
	println!("  Input format: {}", config.format.as_str());
	match &config.command {
		Some(command) => println!("  Source command: {command}"),
		None => println!("  Source command: (none)"),
	}
	println!("  Async timeout: {} ms", config.async_timeout.as_millis());
	println!("  Theme: {}", config.theme_name);
	println!("  Show filter: {}", bool_to_word(config.show_filter));
	if let Some(title) = &config.labels.title {
		println!("  Title: {title}");
	}
	println!("  Placeholder: {}", config.labels.placeholder_text);
	println!("  No results text: {}", config.labels.no_results_text);
	println!("  Cancel button: {}", config.labels.cancel_button_text);
	if let Some(key) = &config.selected {
		println!("  Selected key: {key}");
	}
	println!(
		"  Style overrides: {}",
		if config.styles.is_empty() {
			"(none)"
		} else {
			"configured"
		}
	);
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
