use indexmap::IndexMap;
use serde::Serialize;

/// Choice key meaning "no constraint".
pub const ANY_CHOICE: &str = "any";

/// Single selection from an enumerated set of choices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownFilter {
	pub label: &'static str,
	/// Choice key to display label, excluding the [`ANY_CHOICE`] sentinel.
	pub choices: IndexMap<String, String>,
	/// `None` while [`ANY_CHOICE`] is selected.
	pub selected: Option<String>,
}

impl DropdownFilter {
	#[must_use]
	pub fn new(label: &'static str, choices: IndexMap<String, String>) -> Self {
		Self {
			label,
			choices,
			selected: None,
		}
	}

	/// Select `choice`. Returns `false` when it is not offered.
	pub fn select(&mut self, choice: &str) -> bool {
		if choice == ANY_CHOICE {
			self.selected = None;
			return true;
		}
		if !self.choices.contains_key(choice) {
			return false;
		}
		self.selected = Some(choice.to_string());
		true
	}

	#[must_use]
	pub fn matches(&self, values: &[String]) -> bool {
		match &self.selected {
			None => true,
			Some(selected) => values.iter().any(|value| value == selected),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn cast_time() -> DropdownFilter {
		let choices = ["1", "2", "reaction"]
			.into_iter()
			.map(|key| (key.to_string(), key.to_string()))
			.collect();
		DropdownFilter::new("Casting Time", choices)
	}

	#[test]
	fn any_imposes_no_constraint() {
		let dropdown = cast_time();
		assert!(dropdown.matches(&[]));
		assert!(dropdown.matches(&["2".to_string()]));
	}

	#[test]
	fn selection_requires_exact_match() {
		let mut dropdown = cast_time();
		assert!(dropdown.select("reaction"));
		assert!(dropdown.matches(&["reaction".to_string()]));
		assert!(!dropdown.matches(&["Reaction".to_string()]));
		assert!(!dropdown.matches(&[]));

		assert!(dropdown.select(ANY_CHOICE));
		assert_eq!(dropdown.selected, None);
	}

	#[test]
	fn unknown_choice_keeps_previous_selection() {
		let mut dropdown = cast_time();
		dropdown.select("1");
		assert!(!dropdown.select("10 minutes"));
		assert_eq!(dropdown.selected.as_deref(), Some("1"));
	}
}
