use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use compendium_pack_api::IndexRecord;
use serde::Serialize;

use super::schema::CategorySchema;

/// Identity of an entry across packs: ids are only unique within a pack.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EntryKey {
	pub pack: String,
	pub id: String,
}

impl EntryKey {
	pub fn new(pack: impl Into<String>, id: impl Into<String>) -> Self {
		Self {
			pack: pack.into(),
			id: id.into(),
		}
	}
}

impl fmt::Display for EntryKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.pack, self.id)
	}
}

/// One entry of a category's merged index, reduced to what filtering and
/// sorting need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexEntry {
	pub key: EntryKey,
	pub name: String,
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub img: Option<String>,
	/// Values per checkbox and dropdown key.
	pub values: BTreeMap<&'static str, Vec<String>>,
	/// Numeric attributes per key; absent when the record lacks them.
	pub numbers: BTreeMap<&'static str, f64>,
	#[serde(skip)]
	search_text: String,
}

impl IndexEntry {
	#[must_use]
	pub fn from_record(pack: &str, record: &IndexRecord, schema: &CategorySchema) -> Self {
		let mut values = BTreeMap::new();
		for spec in schema.checkboxes.iter().chain(schema.dropdowns) {
			values.insert(spec.key, spec.source.strings(record));
		}

		let numbers = schema
			.numbers
			.iter()
			.filter_map(|spec| spec.source.number(record).map(|value| (spec.key, value)))
			.collect();

		let mut search_text = record.name.to_lowercase();
		for source in schema.search {
			for value in source.strings(record) {
				search_text.push('\n');
				search_text.push_str(&value.to_lowercase());
			}
		}

		Self {
			key: EntryKey::new(pack, &record.id),
			name: record.name.clone(),
			kind: record.kind.clone(),
			img: record.img.clone(),
			values,
			numbers,
			search_text,
		}
	}

	#[must_use]
	pub fn values(&self, key: &str) -> &[String] {
		self.values.get(key).map_or(&[], Vec::as_slice)
	}

	#[must_use]
	pub fn number(&self, key: &str) -> Option<f64> {
		self.numbers.get(key).copied()
	}

	/// Case-insensitive substring match; `needle` must already be lowercase.
	pub(crate) fn matches_text(&self, needle: &str) -> bool {
		self.search_text.contains(needle)
	}

	/// Display-name order: case-insensitive first, then exact, then identity.
	pub(crate) fn cmp_name(&self, other: &Self) -> Ordering {
		self.name
			.to_lowercase()
			.cmp(&other.name.to_lowercase())
			.then_with(|| self.name.cmp(&other.name))
			.then_with(|| self.key.cmp(&other.key))
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::tabs::categories;

	#[test]
	fn extracts_declared_attributes() {
		let record = IndexRecord::new("x", "Longsword", "weapon").with_data(json!({
			"level": { "value": 0 },
			"price": { "value": "1 gp" },
			"traits": { "value": ["versatile-p"], "rarity": { "value": "common" } },
			"category": "martial",
		}));
		let entry = IndexEntry::from_record("pf2e.equipment-srd", &record, &categories::EQUIPMENT);

		assert_eq!(entry.key, EntryKey::new("pf2e.equipment-srd", "x"));
		assert_eq!(entry.values("itemtypes"), ["weapon"]);
		assert_eq!(entry.values("weapontype"), ["martial"]);
		assert_eq!(entry.values("rarity"), ["common"]);
		assert!(entry.values("source").is_empty());
		assert_eq!(entry.number("price"), Some(1.0));
		assert_eq!(entry.number("level"), Some(0.0));
	}

	#[test]
	fn search_text_covers_secondary_attributes() {
		let record = IndexRecord::new("s", "Stride", "action")
			.with_data(json!({ "traits": { "value": ["Move"] } }));
		let entry = IndexEntry::from_record("pf2e.actionspf2e", &record, &categories::ACTION);
		assert!(entry.matches_text("stri"));
		assert!(entry.matches_text("move"));
		assert!(!entry.matches_text("attack"));
	}
}
