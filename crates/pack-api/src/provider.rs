use async_trait::async_trait;

use crate::{IndexRecord, PackHandle, ProviderError};

/// Source of packs and their index records.
///
/// The browser loads packs one at a time from a single task, so the returned
/// futures do not need to be `Send`.
#[async_trait(?Send)]
pub trait PackProvider {
	/// Every pack currently available to the host.
	fn packs(&self) -> Vec<PackHandle>;

	/// Look up a pack by its collection key.
	fn resolve(&self, id: &str) -> Option<PackHandle>;

	/// Fetch the lightweight index of `pack`, including at least `fields`.
	///
	/// Field paths are dotted, e.g. `data.level.value`.
	async fn fetch_index(
		&self,
		pack: &PackHandle,
		fields: &[&'static str],
	) -> Result<Vec<IndexRecord>, ProviderError>;
}
