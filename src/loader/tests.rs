use std::rc::Rc;

use compendium_pack_api::{DocumentKind, IndexRecord, PackHandle, ProgressSink};
use futures::StreamExt;
use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::providers::MemoryPackProvider;

#[derive(Default)]
struct RecordedProgress {
	advanced: Vec<String>,
	closed: Vec<String>,
}

impl ProgressSink for RecordedProgress {
	fn advance(&mut self, message: &str) {
		self.advanced.push(message.to_string());
	}

	fn close(&mut self, message: &str) {
		self.closed.push(message.to_string());
	}
}

fn item(id: &str, name: &str) -> IndexRecord {
	IndexRecord::new(id, name, "weapon").with_data(json!({ "level": { "value": 0 } }))
}

fn provider() -> Rc<MemoryPackProvider> {
	Rc::new(
		MemoryPackProvider::new()
			.with_pack(
				PackHandle::new("pf2e.equipment-srd", "Equipment", DocumentKind::Item),
				vec![item("a", "Dagger"), item("b", "Shield")],
			)
			.with_pack(
				PackHandle::new("pf2e.pathfinder-bestiary", "Bestiary", DocumentKind::Actor),
				vec![
					IndexRecord::new("c", "Goblin", "npc").with_data(json!({})),
				],
			)
			.with_pack(
				PackHandle::new("world.bare", "Bare", DocumentKind::Item),
				vec![IndexRecord::new("d", "Shapeless", "weapon")],
			),
	)
}

fn load(
	loader: &mut PackLoader,
	kind: DocumentKind,
	ids: &[&str],
	progress: &mut RecordedProgress,
) -> Vec<String> {
	let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
	block_on(async {
		let stream = loader.load_packs(kind, &ids, &["data.level.value"], progress);
		stream
			.map(|pack| pack.handle.id.clone())
			.collect::<Vec<_>>()
			.await
	})
}

#[test]
fn unresolvable_ids_still_report_progress() {
	let mut loader = PackLoader::new(provider());
	let mut progress = RecordedProgress::default();

	let loaded = load(
		&mut loader,
		DocumentKind::Item,
		&["missing.pack", "pf2e.equipment-srd"],
		&mut progress,
	);

	assert_eq!(loaded, vec!["pf2e.equipment-srd"]);
	assert_eq!(
		progress.advanced,
		vec!["[1/2]", "[2/2] Loading pack Equipment"]
	);
	assert_eq!(progress.closed, vec![LOADING_COMPLETE]);
}

#[test]
fn packs_of_another_kind_are_skipped() {
	let mut loader = PackLoader::new(provider());
	let mut progress = RecordedProgress::default();

	let loaded = load(
		&mut loader,
		DocumentKind::Actor,
		&["pf2e.equipment-srd", "pf2e.pathfinder-bestiary"],
		&mut progress,
	);

	assert_eq!(loaded, vec!["pf2e.pathfinder-bestiary"]);
	assert_eq!(progress.advanced.len(), 2);
	assert!(!loader.cache().contains(DocumentKind::Actor, "pf2e.equipment-srd"));
}

#[test]
fn repeat_loads_come_from_the_cache() {
	let provider = provider();
	let mut loader = PackLoader::new(provider.clone());
	let mut progress = RecordedProgress::default();

	load(&mut loader, DocumentKind::Item, &["pf2e.equipment-srd"], &mut progress);
	load(&mut loader, DocumentKind::Item, &["pf2e.equipment-srd"], &mut progress);

	assert_eq!(provider.fetch_count(), 1);
	assert_eq!(progress.advanced.len(), 2);
	assert_eq!(progress.closed.len(), 2);
	assert_eq!(
		loader.cache().keys(),
		vec![(DocumentKind::Item, "pf2e.equipment-srd".to_string())]
	);
}

#[test]
fn shapeless_packs_are_not_cached_and_retried() {
	let provider = provider();
	let mut loader = PackLoader::new(provider.clone());
	let mut progress = RecordedProgress::default();

	let first = load(&mut loader, DocumentKind::Item, &["world.bare"], &mut progress);
	let second = load(&mut loader, DocumentKind::Item, &["world.bare"], &mut progress);

	assert!(first.is_empty());
	assert!(second.is_empty());
	assert_eq!(provider.fetch_count(), 2);
	assert!(loader.cache().is_empty());
}

#[test]
fn empty_request_closes_progress_once() {
	let mut loader = PackLoader::new(provider());
	let mut progress = RecordedProgress::default();

	let loaded = load(&mut loader, DocumentKind::Item, &[], &mut progress);

	assert!(loaded.is_empty());
	assert!(progress.advanced.is_empty());
	assert_eq!(progress.closed, vec![LOADING_COMPLETE]);
}
