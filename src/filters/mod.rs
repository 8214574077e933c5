//! Mutable filter predicates for one category.
//!
//! A [`FilterState`] aggregates the free-text search, checkbox groups,
//! numeric ranges, dropdowns and sort order. Renderers never poke at it
//! directly; they send [`FilterIntent`] values that the owning tab applies.

mod checkbox;
mod dropdown;
mod error;
mod intent;
mod range;
mod sort;
mod state;

pub use checkbox::{CheckboxGroup, FilterOption};
pub use dropdown::{ANY_CHOICE, DropdownFilter};
pub use error::FilterError;
pub use intent::FilterIntent;
pub use range::RangeFilter;
pub use sort::{NAME_FIELD, SortDirection, SortSpec};
pub use state::FilterState;

/// Turn an attribute value such as `two-hand` into a display label.
pub(crate) fn humanize(value: &str) -> String {
	let mut label = String::with_capacity(value.len());
	let mut capitalize = true;
	for c in value.chars() {
		if c == '-' || c == '_' || c.is_whitespace() {
			label.push(if c == '_' { ' ' } else { c });
			capitalize = true;
		} else if capitalize {
			label.extend(c.to_uppercase());
			capitalize = false;
		} else {
			label.push(c);
		}
	}
	label
}

#[cfg(test)]
mod tests {
	use super::humanize;

	#[test]
	fn humanizes_attribute_values() {
		assert_eq!(humanize("common"), "Common");
		assert_eq!(humanize("two-hand"), "Two-Hand");
		assert_eq!(humanize("free_action"), "Free Action");
		assert_eq!(humanize("3"), "3");
	}
}
