use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A content category with its own filter schema and merged index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	Action,
	Bestiary,
	Equipment,
	Feat,
	Hazard,
	Spell,
}

impl Category {
	pub const ALL: [Category; 6] = [
		Category::Action,
		Category::Bestiary,
		Category::Equipment,
		Category::Feat,
		Category::Hazard,
		Category::Spell,
	];

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Action => "action",
			Self::Bestiary => "bestiary",
			Self::Equipment => "equipment",
			Self::Feat => "feat",
			Self::Hazard => "hazard",
			Self::Spell => "spell",
		}
	}

	pub(crate) const fn index(self) -> usize {
		self as usize
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown tab '{0}'")]
pub struct UnknownTab(pub String);

impl FromStr for Category {
	type Err = UnknownTab;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized = value.trim().to_ascii_lowercase();
		Category::ALL
			.into_iter()
			.find(|category| category.as_str() == normalized)
			.ok_or_else(|| UnknownTab(value.to_string()))
	}
}

/// Every tab of the browser: one per category plus the pack settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabName {
	Category(Category),
	Settings,
}

impl TabName {
	#[must_use]
	pub const fn category(self) -> Option<Category> {
		match self {
			Self::Category(category) => Some(category),
			Self::Settings => None,
		}
	}
}

impl From<Category> for TabName {
	fn from(category: Category) -> Self {
		Self::Category(category)
	}
}

impl fmt::Display for TabName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Category(category) => category.fmt(f),
			Self::Settings => f.write_str("settings"),
		}
	}
}

impl FromStr for TabName {
	type Err = UnknownTab;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		if value.trim().eq_ignore_ascii_case("settings") {
			return Ok(Self::Settings);
		}
		value.parse().map(Self::Category)
	}
}
