use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use compendium_pack_api::{DocumentKind, IndexRecord, PackHandle, PackProvider, ProviderError};
use ignore::WalkBuilder;
use indexmap::IndexMap;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

/// On-disk layout of one pack: a JSON document per pack.
#[derive(Debug, Deserialize)]
struct PackFile {
	id: String,
	label: String,
	document: DocumentKind,
	#[serde(default)]
	entries: Vec<IndexRecord>,
}

/// Packs read from `*.json` files below a directory.
///
/// The directory is scanned once for pack metadata; entries are re-read from
/// disk on every fetch so the loader's cache is the only copy kept around.
#[derive(Debug, Default)]
pub struct FsPackProvider {
	root: PathBuf,
	packs: IndexMap<String, (PackHandle, PathBuf)>,
}

impl FsPackProvider {
	/// Scan `root` for pack files. Unparseable files are logged and skipped;
	/// of two files declaring the same pack id the first in path order wins.
	///
	/// # Errors
	///
	/// Fails when `root` is not a directory.
	pub fn scan(root: impl AsRef<Path>) -> Result<Self> {
		let root = root.as_ref();
		if !root.is_dir() {
			bail!("pack directory {} does not exist", root.display());
		}

		let mut paths = Vec::new();
		for entry in WalkBuilder::new(root)
			.hidden(true)
			.git_ignore(true)
			.ignore(true)
			.parents(false)
			.sort_by_file_path(Path::cmp)
			.build()
		{
			let entry = match entry {
				Ok(entry) => entry,
				Err(err) => {
					warn!("skipping unreadable path under {}: {err}", root.display());
					continue;
				}
			};
			if entry.file_type().is_some_and(|kind| kind.is_file())
				&& entry.path().extension().is_some_and(|ext| ext == "json")
			{
				paths.push(entry.into_path());
			}
		}

		let mut packs = IndexMap::new();
		for path in paths {
			let file = match read_pack_file(&path) {
				Ok(file) => file,
				Err(err) => {
					warn!("skipping pack file {}: {err:#}", path.display());
					continue;
				}
			};
			if packs.contains_key(&file.id) {
				warn!(
					"pack '{}' in {} is already defined; ignoring",
					file.id,
					path.display()
				);
				continue;
			}
			let handle = PackHandle::new(&file.id, file.label, file.document)
				.with_entry_types(file.entries.into_iter().map(|record| record.kind));
			debug!("found pack '{}' at {}", handle.id, path.display());
			packs.insert(file.id, (handle, path));
		}

		Ok(Self {
			root: root.to_path_buf(),
			packs,
		})
	}

	#[must_use]
	pub fn root(&self) -> &Path {
		&self.root
	}
}

#[async_trait(?Send)]
impl PackProvider for FsPackProvider {
	fn packs(&self) -> Vec<PackHandle> {
		self.packs.values().map(|(handle, _)| handle.clone()).collect()
	}

	fn resolve(&self, id: &str) -> Option<PackHandle> {
		self.packs.get(id).map(|(handle, _)| handle.clone())
	}

	async fn fetch_index(
		&self,
		pack: &PackHandle,
		fields: &[&'static str],
	) -> Result<Vec<IndexRecord>, ProviderError> {
		let (_, path) = self
			.packs
			.get(&pack.id)
			.ok_or_else(|| ProviderError::UnknownPack {
				id: pack.id.clone(),
			})?;
		let text = fs::read_to_string(path).map_err(|err| ProviderError::unreadable(&pack.id, err))?;
		let file: PackFile =
			serde_json::from_str(&text).map_err(|err| ProviderError::malformed(&pack.id, err))?;
		Ok(file
			.entries
			.into_iter()
			.map(|mut record| {
				record.data = record.data.map(|data| project(&data, fields));
				record
			})
			.collect())
	}
}

fn read_pack_file(path: &Path) -> Result<PackFile> {
	let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
	serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Keep only the `data.*` paths named in `fields`. A record with a data
/// object keeps one, even when none of the fields are present.
fn project(data: &Value, fields: &[&str]) -> Value {
	let Value::Object(_) = data else {
		return data.clone();
	};
	let mut projected = Value::Object(Map::new());
	for field in fields {
		let Some(path) = field.strip_prefix("data.") else {
			continue;
		};
		let segments: Vec<&str> = path.split('.').collect();
		let Some(value) = segments.iter().try_fold(data, |value, segment| value.get(segment))
		else {
			continue;
		};
		insert_path(&mut projected, &segments, value.clone());
	}
	projected
}

fn insert_path(target: &mut Value, segments: &[&str], value: Value) {
	let Some((last, parents)) = segments.split_last() else {
		return;
	};
	let mut current = target;
	for segment in parents {
		let Value::Object(map) = current else {
			return;
		};
		current = map
			.entry(segment.to_string())
			.or_insert_with(|| Value::Object(Map::new()));
	}
	if let Value::Object(map) = current {
		map.insert((*last).to_string(), value);
	}
}

#[cfg(test)]
mod tests {
	use futures::executor::block_on;
	use serde_json::json;
	use tempfile::TempDir;

	use super::*;

	fn write(dir: &Path, name: &str, contents: &Value) {
		fs::write(dir.join(name), contents.to_string()).unwrap();
	}

	fn pack_dir() -> TempDir {
		let dir = TempDir::new().unwrap();
		write(
			dir.path(),
			"equipment.json",
			&json!({
				"id": "pf2e.equipment-srd",
				"label": "Equipment",
				"document": "Item",
				"entries": [
					{
						"_id": "1",
						"name": "Dagger",
						"type": "weapon",
						"data": {
							"level": { "value": 0 },
							"price": { "value": "2 sp" },
							"description": { "value": "<p>A long text</p>" }
						}
					},
					{ "_id": "2", "name": "Rope", "type": "equipment", "data": {} }
				]
			}),
		);
		fs::create_dir(dir.path().join("world")).unwrap();
		write(
			&dir.path().join("world"),
			"monsters.json",
			&json!({
				"id": "world.monsters",
				"label": "Monsters",
				"document": "Actor",
				"entries": [{ "_id": "m", "name": "Goblin", "type": "npc", "data": {} }]
			}),
		);
		fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
		fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
		dir
	}

	#[test]
	fn scan_finds_pack_files_recursively() {
		let dir = pack_dir();
		let provider = FsPackProvider::scan(dir.path()).unwrap();
		let ids: Vec<_> = provider.packs().into_iter().map(|pack| pack.id).collect();
		assert_eq!(ids, vec!["pf2e.equipment-srd", "world.monsters"]);

		let monsters = provider.resolve("world.monsters").unwrap();
		assert_eq!(monsters.kind, DocumentKind::Actor);
		assert!(monsters.has_type("npc"));
		assert!(provider.resolve("broken").is_none());
	}

	#[test]
	fn scan_rejects_missing_directory() {
		let dir = TempDir::new().unwrap();
		assert!(FsPackProvider::scan(dir.path().join("absent")).is_err());
	}

	#[test]
	fn fetch_projects_requested_fields() {
		let dir = pack_dir();
		let provider = FsPackProvider::scan(dir.path()).unwrap();
		let pack = provider.resolve("pf2e.equipment-srd").unwrap();
		let records =
			block_on(provider.fetch_index(&pack, &["data.price.value", "data.traits.value"]))
				.unwrap();

		assert_eq!(records.len(), 2);
		assert_eq!(records[0].data, Some(json!({ "price": { "value": "2 sp" } })));
		assert_eq!(records[1].data, Some(json!({})));
		assert!(records[1].has_data());
	}

	#[test]
	fn fetch_reports_packs_removed_from_disk() {
		let dir = pack_dir();
		let provider = FsPackProvider::scan(dir.path()).unwrap();
		let pack = provider.resolve("world.monsters").unwrap();
		fs::remove_file(dir.path().join("world").join("monsters.json")).unwrap();

		let err = block_on(provider.fetch_index(&pack, &[])).unwrap_err();
		assert!(matches!(err, ProviderError::Unreadable { .. }), "{err}");
	}
}
