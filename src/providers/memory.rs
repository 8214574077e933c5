use std::cell::Cell;

use async_trait::async_trait;
use compendium_pack_api::{IndexRecord, PackHandle, PackProvider, ProviderError};
use indexmap::IndexMap;

/// Packs held in memory, for embedders that already have their index data
/// and for tests.
#[derive(Debug, Default)]
pub struct MemoryPackProvider {
	packs: IndexMap<String, (PackHandle, Vec<IndexRecord>)>,
	fetches: Cell<usize>,
}

impl MemoryPackProvider {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a pack. Entry types are derived from the records when the handle
	/// does not list any.
	#[must_use]
	pub fn with_pack(mut self, mut handle: PackHandle, records: Vec<IndexRecord>) -> Self {
		if handle.entry_types.is_empty() {
			handle.entry_types = records.iter().map(|record| record.kind.clone()).collect();
		}
		self.packs.insert(handle.id.clone(), (handle, records));
		self
	}

	/// Number of `fetch_index` calls served so far.
	#[must_use]
	pub fn fetch_count(&self) -> usize {
		self.fetches.get()
	}
}

#[async_trait(?Send)]
impl PackProvider for MemoryPackProvider {
	fn packs(&self) -> Vec<PackHandle> {
		self.packs.values().map(|(handle, _)| handle.clone()).collect()
	}

	fn resolve(&self, id: &str) -> Option<PackHandle> {
		self.packs.get(id).map(|(handle, _)| handle.clone())
	}

	async fn fetch_index(
		&self,
		pack: &PackHandle,
		_fields: &[&'static str],
	) -> Result<Vec<IndexRecord>, ProviderError> {
		self.fetches.set(self.fetches.get() + 1);
		self.packs
			.get(&pack.id)
			.map(|(_, records)| records.clone())
			.ok_or_else(|| ProviderError::UnknownPack {
				id: pack.id.clone(),
			})
	}
}
