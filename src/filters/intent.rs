use super::SortDirection;

/// A discrete filter mutation requested by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterIntent {
	SetSearch(String),
	ToggleOption { group: String, option: String },
	SelectOption { group: String, option: String },
	DeselectOption { group: String, option: String },
	/// Expand or collapse a checkbox group or range in the UI.
	ToggleExpanded { filter: String },
	SetRange {
		range: String,
		min: Option<f64>,
		max: Option<f64>,
	},
	SetDropdown { dropdown: String, choice: String },
	SortBy(String),
	SetDirection(SortDirection),
	ToggleDirection,
}

impl FilterIntent {
	pub fn toggle(group: impl Into<String>, option: impl Into<String>) -> Self {
		Self::ToggleOption {
			group: group.into(),
			option: option.into(),
		}
	}

	pub fn select(group: impl Into<String>, option: impl Into<String>) -> Self {
		Self::SelectOption {
			group: group.into(),
			option: option.into(),
		}
	}

	pub fn range(range: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
		Self::SetRange {
			range: range.into(),
			min,
			max,
		}
	}

	pub fn dropdown(dropdown: impl Into<String>, choice: impl Into<String>) -> Self {
		Self::SetDropdown {
			dropdown: dropdown.into(),
			choice: choice.into(),
		}
	}

	/// Whether applying the intent changes which entries match or their order.
	///
	/// Expanding a group only affects presentation.
	#[must_use]
	pub fn affects_results(&self) -> bool {
		!matches!(self, Self::ToggleExpanded { .. })
	}
}
