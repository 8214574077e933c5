use indexmap::IndexMap;
use serde::Serialize;

use super::{
	CheckboxGroup, DropdownFilter, FilterError, FilterIntent, NAME_FIELD, RangeFilter, SortSpec,
};

/// Every predicate and the sort order for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterState {
	pub search: String,
	pub checkboxes: IndexMap<&'static str, CheckboxGroup>,
	pub ranges: IndexMap<&'static str, RangeFilter>,
	pub dropdowns: IndexMap<&'static str, DropdownFilter>,
	pub order: SortSpec,
	/// Fields `order.by` may take.
	pub sortable: &'static [&'static str],
}

impl FilterState {
	#[must_use]
	pub fn new(sortable: &'static [&'static str]) -> Self {
		Self {
			search: String::new(),
			checkboxes: IndexMap::new(),
			ranges: IndexMap::new(),
			dropdowns: IndexMap::new(),
			order: SortSpec::default(),
			sortable,
		}
	}

	/// Apply one mutation.
	///
	/// # Errors
	///
	/// Returns a [`FilterError`] when the intent names a filter, option or
	/// sort field this state does not have. The state is left untouched except
	/// for an unknown sort field, which resets the order to sort by name.
	pub fn apply(&mut self, intent: FilterIntent) -> Result<(), FilterError> {
		match intent {
			FilterIntent::SetSearch(text) => {
				self.search = text;
				Ok(())
			}
			FilterIntent::ToggleOption { group, option } => {
				self.with_option(group, option, CheckboxGroup::toggle)
			}
			FilterIntent::SelectOption { group, option } => {
				self.with_option(group, option, CheckboxGroup::select)
			}
			FilterIntent::DeselectOption { group, option } => {
				self.with_option(group, option, CheckboxGroup::deselect)
			}
			FilterIntent::ToggleExpanded { filter } => {
				if let Some(group) = self.checkboxes.get_mut(filter.as_str()) {
					group.is_expanded = !group.is_expanded;
				} else if let Some(range) = self.ranges.get_mut(filter.as_str()) {
					range.is_expanded = !range.is_expanded;
				} else {
					return Err(FilterError::UnknownFilter { filter });
				}
				Ok(())
			}
			FilterIntent::SetRange { range, min, max } => {
				let Some(filter) = self.ranges.get_mut(range.as_str()) else {
					return Err(FilterError::UnknownRange { range });
				};
				filter.set_bounds(min, max);
				Ok(())
			}
			FilterIntent::SetDropdown { dropdown, choice } => {
				let Some(filter) = self.dropdowns.get_mut(dropdown.as_str()) else {
					return Err(FilterError::UnknownDropdown { dropdown });
				};
				if filter.select(&choice) {
					Ok(())
				} else {
					Err(FilterError::UnknownChoice { dropdown, choice })
				}
			}
			FilterIntent::SortBy(field) => {
				match self.sortable.iter().find(|known| **known == field) {
					Some(known) => {
						self.order.by = *known;
						Ok(())
					}
					None => {
						self.order.by = NAME_FIELD;
						Err(FilterError::UnknownSortField { field })
					}
				}
			}
			FilterIntent::SetDirection(direction) => {
				self.order.direction = direction;
				Ok(())
			}
			FilterIntent::ToggleDirection => {
				self.order.direction = self.order.direction.toggled();
				Ok(())
			}
		}
	}

	/// Select an option and expand its group, as an initial filter does.
	///
	/// # Errors
	///
	/// Fails when the group or the option does not exist.
	pub fn select_initial(&mut self, group: &str, option: &str) -> Result<(), FilterError> {
		let Some(checkbox) = self.checkboxes.get_mut(group) else {
			return Err(FilterError::UnknownCheckbox {
				group: group.to_string(),
			});
		};
		if !checkbox.select(option) {
			return Err(FilterError::UnknownOption {
				group: group.to_string(),
				option: option.to_string(),
			});
		}
		checkbox.is_expanded = true;
		Ok(())
	}

	/// Override the upper bound of `range`, leaving its lower bound alone.
	///
	/// # Errors
	///
	/// Fails when the category has no such range.
	pub fn override_max(&mut self, range: &str, max: f64) -> Result<(), FilterError> {
		let Some(filter) = self.ranges.get_mut(range) else {
			return Err(FilterError::UnknownRange {
				range: range.to_string(),
			});
		};
		filter.set_max(Some(max));
		Ok(())
	}

	/// Whether no predicate constrains the result set.
	#[must_use]
	pub fn is_unconstrained(&self) -> bool {
		self.search.trim().is_empty()
			&& self.checkboxes.values().all(|group| !group.is_active())
			&& self.ranges.values().all(|range| !range.is_active())
			&& self.dropdowns.values().all(|dropdown| dropdown.selected.is_none())
	}

	fn with_option(
		&mut self,
		group: String,
		option: String,
		mutate: fn(&mut CheckboxGroup, &str) -> bool,
	) -> Result<(), FilterError> {
		let Some(checkbox) = self.checkboxes.get_mut(group.as_str()) else {
			return Err(FilterError::UnknownCheckbox { group });
		};
		if mutate(checkbox, &option) {
			Ok(())
		} else {
			Err(FilterError::UnknownOption { group, option })
		}
	}
}
