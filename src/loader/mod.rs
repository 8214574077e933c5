//! Sequential, memoizing pack index loading.
//!
//! [`PackLoader::load_packs`] walks the requested pack ids one at a time,
//! yielding each usable pack as soon as its index is available and reporting
//! every attempt to a progress sink. Packs that load successfully are cached
//! for the lifetime of the loader.

mod cache;
mod progress;

use std::rc::Rc;
use std::slice;

use compendium_pack_api::{DocumentKind, PackProvider, ProgressSink};
use futures::stream::{self, Stream};
use log::{debug, warn};

pub use cache::{LoadedPack, PackCache};
pub use progress::{LOADING_COMPLETE, LoadProgress};

pub struct PackLoader {
	provider: Rc<dyn PackProvider>,
	cache: PackCache,
}

impl PackLoader {
	#[must_use]
	pub fn new(provider: Rc<dyn PackProvider>) -> Self {
		Self {
			provider,
			cache: PackCache::default(),
		}
	}

	#[must_use]
	pub fn provider(&self) -> &Rc<dyn PackProvider> {
		&self.provider
	}

	#[must_use]
	pub fn cache(&self) -> &PackCache {
		&self.cache
	}

	/// Memoized (kind, pack id) keys, sorted.
	#[must_use]
	pub fn cached_packs(&self) -> Vec<(DocumentKind, String)> {
		self.cache.keys()
	}

	/// Stream the packs among `pack_ids` that hold `kind` documents.
	///
	/// Each call starts a fresh iteration. Unknown ids, packs of another
	/// kind, packs the provider fails to index and packs whose records lack a
	/// `data` object are skipped without failing the load. The last two are
	/// not cached and are fetched again on the next call. `progress` sees one
	/// `advance` per id and a final `close` once the ids are exhausted.
	pub fn load_packs<'a>(
		&'a mut self,
		kind: DocumentKind,
		pack_ids: &'a [String],
		fields: &'a [&'static str],
		progress: &'a mut dyn ProgressSink,
	) -> impl Stream<Item = Rc<LoadedPack>> + 'a {
		let run = LoadRun {
			counter: LoadProgress::new(pack_ids.len()),
			pending: pack_ids.iter(),
			loader: self,
			kind,
			fields,
			progress,
			closed: false,
		};
		stream::unfold(run, |mut run| async move {
			let pack = run.next_pack().await?;
			Some((pack, run))
		})
	}
}

struct LoadRun<'a> {
	loader: &'a mut PackLoader,
	kind: DocumentKind,
	pending: slice::Iter<'a, String>,
	fields: &'a [&'static str],
	progress: &'a mut dyn ProgressSink,
	counter: LoadProgress,
	closed: bool,
}

impl LoadRun<'_> {
	async fn next_pack(&mut self) -> Option<Rc<LoadedPack>> {
		while let Some(id) = self.pending.next() {
			if let Some(pack) = self.attempt(id).await {
				return Some(pack);
			}
		}
		if !self.closed {
			self.closed = true;
			let message = self.counter.close();
			self.progress.close(message);
		}
		None
	}

	async fn attempt(&mut self, id: &str) -> Option<Rc<LoadedPack>> {
		if let Some(pack) = self.loader.cache.get(self.kind, id) {
			self.advance(&pack.handle.label);
			return Some(pack);
		}

		let provider = Rc::clone(&self.loader.provider);
		let Some(handle) = provider.resolve(id) else {
			self.advance("");
			warn!("pack '{id}' does not resolve, skipping");
			return None;
		};
		self.advance(&handle.label);

		if handle.kind != self.kind {
			debug!("pack '{id}' holds {} documents, not {}", handle.kind, self.kind);
			return None;
		}

		let index = match provider.fetch_index(&handle, self.fields).await {
			Ok(index) => index,
			Err(err) => {
				warn!("skipping pack '{id}': {err}");
				return None;
			}
		};
		if index.first().is_some_and(|record| !record.has_data()) {
			warn!("pack '{id}' index lacks the requested fields, skipping");
			return None;
		}

		debug!("loaded pack '{id}' with {} entries", index.len());
		let pack = Rc::new(LoadedPack { handle, index });
		self.loader.cache.insert(self.kind, Rc::clone(&pack));
		Some(pack)
	}

	fn advance(&mut self, label: &str) {
		let message = self.counter.advance(label);
		self.progress.advance(&message);
	}
}

#[cfg(test)]
mod tests;
