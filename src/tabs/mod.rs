//! Per-category tab engines.
//!
//! A [`CategoryTab`] owns the merged index of its category, the filter option
//! universe derived from it, the user's current [`FilterState`] and the scroll
//! window. It starts uninitialized; [`CategoryTab::init`] loads the enabled
//! packs and may be repeated whenever the pack selection changes.

pub mod categories;
mod entry;
mod query;
mod schema;

use std::cmp::Ordering;
use std::iter;
use std::pin::pin;

use compendium_pack_api::ProgressSink;
use futures::StreamExt;
use indexmap::IndexMap;
use log::info;
use thiserror::Error;

pub use entry::{EntryKey, IndexEntry};
pub use schema::{AttributeSpec, CategorySchema, NumberSpec, RangeSpec, SchemaError, Source};

use crate::category::Category;
use crate::filters::{
	CheckboxGroup, DropdownFilter, FilterError, FilterIntent, FilterOption, FilterState,
	RangeFilter, humanize,
};
use crate::loader::PackLoader;

/// Number of entries materialized before the first scroll.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Misuse of a tab's lifecycle by its caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
	#[error("the {category} tab was queried before it was initialized")]
	Uninitialized { category: Category },
}

#[derive(Debug)]
struct TabIndex {
	entries: IndexMap<EntryKey, IndexEntry>,
	packs: Vec<String>,
}

#[derive(Debug)]
pub struct CategoryTab {
	schema: &'static CategorySchema,
	index: Option<TabIndex>,
	filters: FilterState,
	defaults: FilterState,
	scroll_limit: usize,
	page_size: usize,
}

impl CategoryTab {
	/// Create an uninitialized tab for `category`.
	///
	/// # Errors
	///
	/// Fails when the category's declared schema is inconsistent.
	pub fn new(category: Category, page_size: usize) -> Result<Self, SchemaError> {
		let schema = categories::schema(category);
		schema.validate()?;
		let defaults = build_filters(schema, iter::empty());
		Ok(Self {
			schema,
			index: None,
			filters: defaults.clone(),
			defaults,
			scroll_limit: page_size,
			page_size,
		})
	}

	#[must_use]
	pub fn category(&self) -> Category {
		self.schema.category
	}

	#[must_use]
	pub fn schema(&self) -> &'static CategorySchema {
		self.schema
	}

	#[must_use]
	pub fn is_initialized(&self) -> bool {
		self.index.is_some()
	}

	/// Load `pack_ids` and rebuild the merged index, the option universe, the
	/// filters and the scroll window from scratch.
	///
	/// Packs are merged in the order given, entries keyed by pack and id.
	/// Records of types outside the category are left out. The previous index
	/// stays in place until the new one is complete.
	pub async fn init(
		&mut self,
		loader: &mut PackLoader,
		pack_ids: &[String],
		progress: &mut dyn ProgressSink,
	) {
		let schema = self.schema;
		let mut entries = IndexMap::new();
		let mut packs = Vec::new();

		let mut loaded = pin!(loader.load_packs(
			schema.kind,
			pack_ids,
			schema.index_fields,
			progress
		));
		while let Some(pack) = loaded.next().await {
			packs.push(pack.handle.id.clone());
			for record in pack.index.iter().filter(|record| schema.accepts(record)) {
				let entry = IndexEntry::from_record(&pack.handle.id, record, schema);
				entries.entry(entry.key.clone()).or_insert(entry);
			}
		}

		info!(
			"{} tab indexed {} entries from {} packs",
			schema.category,
			entries.len(),
			packs.len()
		);
		self.defaults = build_filters(schema, entries.values());
		self.filters = self.defaults.clone();
		self.index = Some(TabIndex { entries, packs });
		self.scroll_limit = self.page_size;
	}

	/// Restore the category's default filters. The scroll window is left
	/// alone.
	pub fn reset_filters(&mut self) {
		self.filters = self.defaults.clone();
	}

	#[must_use]
	pub fn filters(&self) -> &FilterState {
		&self.filters
	}

	pub(crate) fn filters_mut(&mut self) -> &mut FilterState {
		&mut self.filters
	}

	/// Apply a filter mutation.
	///
	/// # Errors
	///
	/// Reports references to filters or options the category lacks.
	pub fn apply(&mut self, intent: FilterIntent) -> Result<(), FilterError> {
		self.filters.apply(intent)
	}

	/// Matching entries in sort order, capped at the scroll window.
	///
	/// # Errors
	///
	/// Fails when the tab has not been initialized.
	pub fn visible_entries(&self) -> Result<Vec<&IndexEntry>, EngineError> {
		let mut matches = query::evaluate(self.index()?.entries.values(), &self.filters);
		matches.truncate(self.scroll_limit);
		Ok(matches)
	}

	/// Number of entries passing the filters, ignoring the scroll window.
	///
	/// # Errors
	///
	/// Fails when the tab has not been initialized.
	pub fn total_match_count(&self) -> Result<usize, EngineError> {
		let needle = self.filters.search.trim().to_lowercase();
		Ok(self
			.index()?
			.entries
			.values()
			.filter(|entry| query::passes(entry, &self.filters, &needle))
			.count())
	}

	#[must_use]
	pub fn scroll_limit(&self) -> usize {
		self.scroll_limit
	}

	/// Shrink the scroll window back to one page.
	pub fn reset_scroll(&mut self) {
		self.scroll_limit = self.page_size;
	}

	/// Grow the scroll window by `step`, never past the match count.
	///
	/// Returns whether the window grew; a zero step never grows it.
	///
	/// # Errors
	///
	/// Fails when the tab has not been initialized.
	pub fn grow_scroll(&mut self, step: usize) -> Result<bool, EngineError> {
		let total = self.total_match_count()?;
		if step == 0 || self.scroll_limit >= total {
			return Ok(false);
		}
		self.scroll_limit = self.scroll_limit.saturating_add(step).min(total);
		Ok(true)
	}

	/// The merged index in merge order.
	///
	/// # Errors
	///
	/// Fails when the tab has not been initialized.
	pub fn entries(&self) -> Result<impl Iterator<Item = &IndexEntry>, EngineError> {
		Ok(self.index()?.entries.values())
	}

	#[must_use]
	pub fn entry(&self, key: &EntryKey) -> Option<&IndexEntry> {
		self.index.as_ref()?.entries.get(key)
	}

	/// Packs that contributed to the current index.
	#[must_use]
	pub fn loaded_packs(&self) -> &[String] {
		self.index.as_ref().map_or(&[], |index| index.packs.as_slice())
	}

	fn index(&self) -> Result<&TabIndex, EngineError> {
		self.index.as_ref().ok_or(EngineError::Uninitialized {
			category: self.schema.category,
		})
	}
}

/// Derive the default filter state and its option universe from `entries`.
fn build_filters<'a, I>(schema: &'static CategorySchema, entries: I) -> FilterState
where
	I: IntoIterator<Item = &'a IndexEntry>,
	I::IntoIter: Clone,
{
	let entries = entries.into_iter();
	let mut state = FilterState::new(schema.sort_fields);

	for spec in schema.checkboxes {
		let options = count_values(entries.clone(), spec.key)
			.into_iter()
			.map(|(value, count)| {
				let option = FilterOption::new(humanize(&value), count);
				(value, option)
			})
			.collect();
		state
			.checkboxes
			.insert(spec.key, CheckboxGroup::new(spec.label, options));
	}
	for spec in schema.ranges {
		state.ranges.insert(spec.key, RangeFilter::new(spec.label));
	}
	for spec in schema.dropdowns {
		let choices = count_values(entries.clone(), spec.key)
			.into_iter()
			.map(|(value, _)| {
				let label = humanize(&value);
				(value, label)
			})
			.collect();
		state
			.dropdowns
			.insert(spec.key, DropdownFilter::new(spec.label, choices));
	}
	state
}

/// Distinct values of attribute `key` with their entry counts, in option
/// order.
fn count_values<'a>(
	entries: impl Iterator<Item = &'a IndexEntry>,
	key: &str,
) -> Vec<(String, usize)> {
	let mut counts: IndexMap<String, usize> = IndexMap::new();
	for entry in entries {
		for value in entry.values(key) {
			*counts.entry(value.clone()).or_default() += 1;
		}
	}
	let mut counts: Vec<_> = counts.into_iter().collect();
	counts.sort_by(|(a, _), (b, _)| option_order(a, b));
	counts
}

/// Numeric values first in numeric order, then text case-insensitively.
fn option_order(a: &str, b: &str) -> Ordering {
	match (a.parse::<f64>(), b.parse::<f64>()) {
		(Ok(left), Ok(right)) => left.total_cmp(&right),
		(Ok(_), Err(_)) => Ordering::Less,
		(Err(_), Ok(_)) => Ordering::Greater,
		(Err(_), Err(_)) => a
			.to_lowercase()
			.cmp(&b.to_lowercase())
			.then_with(|| a.cmp(b)),
	}
}

#[cfg(test)]
mod tests;
