use std::collections::BTreeSet;

use crate::category::{Category, TabName};
use crate::filters::FilterIntent;

/// Discrete requests a renderer sends back to the browser.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
	Filter(FilterIntent),
	ClearFilters,
	/// The renderer reached the end of the materialized entries.
	ScrollNearEnd,
	SwitchTab(TabName),
	/// The (category, pack id) pairs left checked in the settings form.
	SaveSettings(BTreeSet<(Category, String)>),
}

impl From<FilterIntent> for Intent {
	fn from(intent: FilterIntent) -> Self {
		Self::Filter(intent)
	}
}
