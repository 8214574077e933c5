use std::collections::HashMap;
use std::rc::Rc;

use compendium_pack_api::{DocumentKind, IndexRecord, PackHandle};

/// A pack whose index has been fetched and validated.
#[derive(Debug)]
pub struct LoadedPack {
	pub handle: PackHandle,
	pub index: Vec<IndexRecord>,
}

/// Successfully loaded packs, keyed by document kind and pack id.
///
/// Entries live as long as the owning loader; there is no eviction.
#[derive(Debug, Default)]
pub struct PackCache {
	packs: HashMap<(DocumentKind, String), Rc<LoadedPack>>,
}

impl PackCache {
	#[must_use]
	pub fn get(&self, kind: DocumentKind, id: &str) -> Option<Rc<LoadedPack>> {
		self.packs.get(&(kind, id.to_string())).cloned()
	}

	pub fn insert(&mut self, kind: DocumentKind, pack: Rc<LoadedPack>) {
		self.packs.insert((kind, pack.handle.id.clone()), pack);
	}

	#[must_use]
	pub fn contains(&self, kind: DocumentKind, id: &str) -> bool {
		self.packs.contains_key(&(kind, id.to_string()))
	}

	/// Cached keys in a stable order.
	#[must_use]
	pub fn keys(&self) -> Vec<(DocumentKind, String)> {
		let mut keys: Vec<_> = self.packs.keys().cloned().collect();
		keys.sort();
		keys
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.packs.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.packs.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keys_are_scoped_by_document_kind() {
		let mut cache = PackCache::default();
		let handle = PackHandle::new("pf2e.mixed", "Mixed", DocumentKind::Item);
		cache.insert(
			DocumentKind::Item,
			Rc::new(LoadedPack {
				handle,
				index: Vec::new(),
			}),
		);

		assert!(cache.contains(DocumentKind::Item, "pf2e.mixed"));
		assert!(!cache.contains(DocumentKind::Actor, "pf2e.mixed"));
		assert_eq!(
			cache.keys(),
			vec![(DocumentKind::Item, "pf2e.mixed".to_string())]
		);
	}
}
