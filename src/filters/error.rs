use thiserror::Error;

/// A filter mutation referenced something the category does not declare.
///
/// These are reported to the caller and otherwise ignored; the filter state is
/// left as it was (apart from the documented sort fallback).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
	#[error("no checkbox filter '{group}'")]
	UnknownCheckbox { group: String },

	#[error("filter '{group}' has no option '{option}'")]
	UnknownOption { group: String, option: String },

	#[error("no range filter '{range}'")]
	UnknownRange { range: String },

	#[error("no dropdown filter '{dropdown}'")]
	UnknownDropdown { dropdown: String },

	#[error("dropdown '{dropdown}' has no choice '{choice}'")]
	UnknownChoice { dropdown: String, choice: String },

	#[error("no expandable filter '{filter}'")]
	UnknownFilter { filter: String },

	#[error("cannot sort by '{field}', falling back to name")]
	UnknownSortField { field: String },
}
