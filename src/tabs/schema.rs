use std::collections::HashSet;

use compendium_pack_api::{DocumentKind, IndexRecord};
use serde_json::Value;
use thiserror::Error;

use crate::category::Category;
use crate::coins::Coins;
use crate::filters::NAME_FIELD;

/// Where an attribute's values come from in an index record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
	/// The record's `type`.
	Kind,
	/// A dotted field path such as `data.traits.value`.
	Field(&'static str),
	/// A coin price at a dotted field path, normalized to gold.
	Price(&'static str),
	/// A boolean field mapped to one of two values.
	Flag {
		path: &'static str,
		on: &'static str,
		off: &'static str,
	},
}

impl Source {
	/// String values for checkbox, dropdown and search matching.
	#[must_use]
	pub fn strings(self, record: &IndexRecord) -> Vec<String> {
		let value = match self {
			Self::Kind => return vec![record.kind.clone()],
			Self::Flag { path, on, off } => {
				let set = record.field(path).and_then(|value| value.as_bool());
				return vec![if set.unwrap_or(false) { on } else { off }.to_string()];
			}
			Self::Field(path) | Self::Price(path) => record.field(path),
		};
		let mut values = Vec::new();
		if let Some(value) = value {
			collect_strings(&value, &mut values);
		}
		values
	}

	/// A numeric value for range filters and sorting.
	#[must_use]
	pub fn number(self, record: &IndexRecord) -> Option<f64> {
		match self {
			Self::Kind | Self::Flag { .. } => None,
			Self::Field(path) => match record.field(path)? {
				Value::Number(number) => number.as_f64(),
				Value::String(text) => text.trim().parse().ok(),
				_ => None,
			},
			Self::Price(path) => record
				.field(path)
				.and_then(|value| Coins::from_value(&value))
				.map(Coins::gold),
		}
	}
}

fn collect_strings(value: &Value, out: &mut Vec<String>) {
	match value {
		Value::String(text) => {
			let text = text.trim();
			if !text.is_empty() && !out.iter().any(|known| known == text) {
				out.push(text.to_string());
			}
		}
		Value::Number(number) => {
			let text = number.to_string();
			if !out.contains(&text) {
				out.push(text);
			}
		}
		Value::Array(items) => items.iter().for_each(|item| collect_strings(item, out)),
		_ => {}
	}
}

#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec {
	pub key: &'static str,
	pub label: &'static str,
	pub source: Source,
}

#[derive(Debug, Clone, Copy)]
pub struct NumberSpec {
	pub key: &'static str,
	pub source: Source,
}

#[derive(Debug, Clone, Copy)]
pub struct RangeSpec {
	/// Must name one of the schema's numeric attributes.
	pub key: &'static str,
	pub label: &'static str,
}

/// The closed filter schema of one category.
#[derive(Debug)]
pub struct CategorySchema {
	pub category: Category,
	pub kind: DocumentKind,
	/// Record types that belong to the category.
	pub entry_types: &'static [&'static str],
	/// Index fields requested from the pack provider.
	pub index_fields: &'static [&'static str],
	pub checkboxes: &'static [AttributeSpec],
	pub numbers: &'static [NumberSpec],
	pub ranges: &'static [RangeSpec],
	pub dropdowns: &'static [AttributeSpec],
	/// `name` or numeric attribute keys.
	pub sort_fields: &'static [&'static str],
	/// Extra text matched by the search box besides the name.
	pub search: &'static [Source],
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
	#[error("{category}: filter key '{key}' is declared twice")]
	DuplicateKey { category: Category, key: &'static str },

	#[error("{category}: range '{key}' has no numeric attribute")]
	RangeWithoutNumber { category: Category, key: &'static str },

	#[error("{category}: cannot sort by '{key}'")]
	UnsortableField { category: Category, key: &'static str },

	#[error("{category}: sort fields must include name")]
	MissingNameSort { category: Category },
}

impl CategorySchema {
	/// Check the schema's internal references.
	///
	/// # Errors
	///
	/// Fails on duplicate filter keys, ranges over undeclared numbers and
	/// sort fields that are neither `name` nor a numeric attribute.
	pub fn validate(&self) -> Result<(), SchemaError> {
		let category = self.category;
		let mut seen = HashSet::new();
		let keys = self
			.checkboxes
			.iter()
			.chain(self.dropdowns)
			.map(|spec| spec.key)
			.chain(self.ranges.iter().map(|spec| spec.key));
		for key in keys {
			if !seen.insert(key) {
				return Err(SchemaError::DuplicateKey { category, key });
			}
		}

		for range in self.ranges {
			if self.number(range.key).is_none() {
				return Err(SchemaError::RangeWithoutNumber {
					category,
					key: range.key,
				});
			}
		}

		if !self.sort_fields.contains(&NAME_FIELD) {
			return Err(SchemaError::MissingNameSort { category });
		}
		for &key in self.sort_fields {
			if key != NAME_FIELD && self.number(key).is_none() {
				return Err(SchemaError::UnsortableField { category, key });
			}
		}
		Ok(())
	}

	#[must_use]
	pub fn number(&self, key: &str) -> Option<&NumberSpec> {
		self.numbers.iter().find(|spec| spec.key == key)
	}

	#[must_use]
	pub fn accepts(&self, record: &IndexRecord) -> bool {
		self.entry_types.contains(&record.kind.as_str())
	}
}
