use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The document model a pack stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
	Actor,
	Item,
}

impl DocumentKind {
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Actor => "Actor",
			Self::Item => "Item",
		}
	}
}

impl fmt::Display for DocumentKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Metadata describing one loadable pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackHandle {
	/// Stable collection key, e.g. `pf2e.equipment-srd`.
	pub id: String,
	pub label: String,
	pub kind: DocumentKind,
	/// Distinct `type` values present in the pack's base index.
	pub entry_types: BTreeSet<String>,
}

impl PackHandle {
	/// Create a handle with no known entry types.
	#[must_use]
	pub fn new(id: impl Into<String>, label: impl Into<String>, kind: DocumentKind) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			kind,
			entry_types: BTreeSet::new(),
		}
	}

	/// Replace the entry types advertised by the pack.
	#[must_use]
	pub fn with_entry_types<I, S>(mut self, types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.entry_types = types.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	pub fn has_type(&self, entry_type: &str) -> bool {
		self.entry_types.contains(entry_type)
	}
}
