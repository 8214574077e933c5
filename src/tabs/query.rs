//! Evaluation of a [`FilterState`] against a merged index.

use std::cmp::Ordering;

use super::entry::IndexEntry;
use crate::filters::{FilterState, NAME_FIELD, SortDirection, SortSpec};

/// Whether `entry` passes every clause of `filters`.
///
/// Clauses are checked in order: text, checkbox groups, ranges, dropdowns.
/// `needle` is the lowercased search text, empty when there is none.
pub(super) fn passes(entry: &IndexEntry, filters: &FilterState, needle: &str) -> bool {
	if !needle.is_empty() && !entry.matches_text(needle) {
		return false;
	}
	if !filters
		.checkboxes
		.iter()
		.all(|(key, group)| group.matches(entry.values(key)))
	{
		return false;
	}
	if !filters
		.ranges
		.iter()
		.all(|(key, range)| range.matches(entry.number(key)))
	{
		return false;
	}
	filters
		.dropdowns
		.iter()
		.all(|(key, dropdown)| dropdown.matches(entry.values(key)))
}

/// Entries of `index` passing `filters`, in sort order.
pub(super) fn evaluate<'a, I>(index: I, filters: &FilterState) -> Vec<&'a IndexEntry>
where
	I: IntoIterator<Item = &'a IndexEntry>,
{
	let needle = filters.search.trim().to_lowercase();
	let mut matches: Vec<_> = index
		.into_iter()
		.filter(|entry| passes(entry, filters, &needle))
		.collect();
	matches.sort_by(|a, b| compare(a, b, &filters.order));
	matches
}

/// Order by the sort field with name as tie-break, reversed for descending.
///
/// An entry missing a numeric sort attribute orders before entries that
/// have it.
fn compare(a: &IndexEntry, b: &IndexEntry, order: &SortSpec) -> Ordering {
	let primary = if order.by == NAME_FIELD {
		Ordering::Equal
	} else {
		match (a.number(order.by), b.number(order.by)) {
			(Some(left), Some(right)) => left.total_cmp(&right),
			(None, Some(_)) => Ordering::Less,
			(Some(_), None) => Ordering::Greater,
			(None, None) => Ordering::Equal,
		}
	};
	let ordering = primary.then_with(|| a.cmp_name(b));
	match order.direction {
		SortDirection::Asc => ordering,
		SortDirection::Desc => ordering.reverse(),
	}
}
