use serde::{Deserialize, Serialize};

/// The sort field every category supports.
pub const NAME_FIELD: &str = "name";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	#[default]
	Asc,
	Desc,
}

impl SortDirection {
	#[must_use]
	pub const fn toggled(self) -> Self {
		match self {
			Self::Asc => Self::Desc,
			Self::Desc => Self::Asc,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortSpec {
	pub by: &'static str,
	pub direction: SortDirection,
}

impl Default for SortSpec {
	fn default() -> Self {
		Self {
			by: NAME_FIELD,
			direction: SortDirection::Asc,
		}
	}
}
