use anyhow::Result;
use fpick::PickOutcome;
use serde_json::json;

/// Print the chosen key, or a cancellation note on stderr.
pub(crate) fn print_plain(outcome: &PickOutcome) {
	match &outcome.selection {
		Some(option) if outcome.accepted => println!("{}", option.key),
		_ => eprintln!("Picker cancelled (filter: '{}')", outcome.query),
	}
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(option) => json!({
			"key": option.key,
			"label": option.label,
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &PickOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
