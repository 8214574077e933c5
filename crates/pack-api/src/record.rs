use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lightweight index metadata for one pack entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexRecord {
	#[serde(rename = "_id")]
	pub id: String,
	pub name: String,
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub img: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<Value>,
}

impl IndexRecord {
	#[must_use]
	pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			kind: kind.into(),
			img: None,
			data: None,
		}
	}

	#[must_use]
	pub fn with_data(mut self, data: Value) -> Self {
		self.data = Some(data);
		self
	}

	/// Whether the record carries a `data` object at all.
	#[must_use]
	pub fn has_data(&self) -> bool {
		matches!(self.data, Some(Value::Object(_)))
	}

	/// Resolve a dotted field path such as `data.traits.value`.
	///
	/// Root segments `name`, `type` and `img` are answered from the record
	/// itself; everything under `data` walks the data object.
	#[must_use]
	pub fn field(&self, path: &str) -> Option<Value> {
		let mut segments = path.split('.');
		match segments.next()? {
			"name" => Some(Value::String(self.name.clone())),
			"type" => Some(Value::String(self.kind.clone())),
			"img" => self.img.clone().map(Value::String),
			"data" => {
				let mut current = self.data.as_ref()?;
				for segment in segments {
					current = current.get(segment)?;
				}
				Some(current.clone())
			}
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn resolves_nested_data_paths() {
		let record = IndexRecord::new("abc", "Dagger", "weapon")
			.with_data(json!({ "level": { "value": 0 }, "traits": { "value": ["agile"] } }));
		assert_eq!(record.field("data.level.value"), Some(json!(0)));
		assert_eq!(record.field("data.traits.value"), Some(json!(["agile"])));
		assert_eq!(record.field("type"), Some(json!("weapon")));
		assert_eq!(record.field("data.price.value"), None);
		assert_eq!(record.field("system.level"), None);
	}

	#[test]
	fn deserializes_host_field_names() {
		let record: IndexRecord = serde_json::from_value(json!({
			"_id": "x1",
			"name": "Goblin Warrior",
			"type": "npc",
			"data": { "details": { "level": { "value": -1 } } }
		}))
		.unwrap();
		assert_eq!(record.id, "x1");
		assert_eq!(record.kind, "npc");
		assert!(record.has_data());
		assert!(!IndexRecord::new("y", "Bare", "npc").has_data());
	}
}
