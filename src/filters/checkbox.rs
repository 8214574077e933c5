use indexmap::IndexMap;
use serde::Serialize;

/// One selectable value of a checkbox group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOption {
	pub label: String,
	pub selected: bool,
	/// Entries carrying this value in the unfiltered index.
	pub count: usize,
}

impl FilterOption {
	#[must_use]
	pub fn new(label: impl Into<String>, count: usize) -> Self {
		Self {
			label: label.into(),
			selected: false,
			count,
		}
	}
}

/// A multi-select group: OR within the group, AND across groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckboxGroup {
	pub label: &'static str,
	pub is_expanded: bool,
	pub options: IndexMap<String, FilterOption>,
	/// Selected option keys in the order they were picked.
	pub selected: Vec<String>,
}

impl CheckboxGroup {
	#[must_use]
	pub fn new(label: &'static str, options: IndexMap<String, FilterOption>) -> Self {
		Self {
			label,
			is_expanded: false,
			options,
			selected: Vec::new(),
		}
	}

	#[must_use]
	pub fn is_active(&self) -> bool {
		!self.selected.is_empty()
	}

	/// Select `key`. Returns `false` when the group has no such option.
	pub fn select(&mut self, key: &str) -> bool {
		let Some(option) = self.options.get_mut(key) else {
			return false;
		};
		if !option.selected {
			option.selected = true;
			self.selected.push(key.to_string());
		}
		true
	}

	/// Deselect `key`. Returns `false` when the group has no such option.
	pub fn deselect(&mut self, key: &str) -> bool {
		let Some(option) = self.options.get_mut(key) else {
			return false;
		};
		option.selected = false;
		self.selected.retain(|name| name != key);
		true
	}

	pub fn toggle(&mut self, key: &str) -> bool {
		match self.options.get(key) {
			Some(option) if option.selected => self.deselect(key),
			Some(_) => self.select(key),
			None => false,
		}
	}

	/// Options worth showing: anything with matches, plus current selections.
	pub fn visible_options(&self) -> impl Iterator<Item = (&String, &FilterOption)> {
		self.options
			.iter()
			.filter(|(_, option)| option.count > 0 || option.selected)
	}

	/// Whether an entry carrying `values` passes this group.
	#[must_use]
	pub fn matches(&self, values: &[String]) -> bool {
		!self.is_active() || self.selected.iter().any(|key| values.contains(key))
	}
}
