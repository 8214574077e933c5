use std::rc::Rc;

use compendium_pack_api::{DocumentKind, IndexRecord, NullProgress, PackHandle};
use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::filters::SortDirection;
use crate::providers::MemoryPackProvider;

fn equipment(id: &str, name: &str, kind: &str, price: f64, level: i64, rarity: &str) -> IndexRecord {
	IndexRecord::new(id, name, kind).with_data(json!({
		"level": { "value": level },
		"price": { "value": price },
		"traits": { "value": [], "rarity": { "value": rarity } },
	}))
}

fn armory() -> MemoryPackProvider {
	MemoryPackProvider::new()
		.with_pack(
			PackHandle::new("pf2e.equipment-srd", "Equipment", DocumentKind::Item),
			vec![
				equipment("1", "Dagger", "weapon", 2.0, 0, "common"),
				equipment("2", "Shield", "armor", 10.0, 0, "common"),
			],
		)
		.with_pack(
			PackHandle::new("world.relics", "Relics", DocumentKind::Item),
			vec![
				equipment("1", "Dagger of Venom", "weapon", 150.0, 5, "uncommon"),
				equipment("x", "Aeon Stone", "equipment", 400.0, 7, "rare"),
				IndexRecord::new("f", "Power Attack", "feat").with_data(json!({})),
			],
		)
}

fn ids(packs: &[&str]) -> Vec<String> {
	packs.iter().map(|pack| pack.to_string()).collect()
}

fn tab_with(provider: MemoryPackProvider, packs: &[&str]) -> (CategoryTab, PackLoader) {
	let mut loader = PackLoader::new(Rc::new(provider));
	let mut tab = CategoryTab::new(Category::Equipment, DEFAULT_PAGE_SIZE).unwrap();
	block_on(tab.init(&mut loader, &ids(packs), &mut NullProgress));
	(tab, loader)
}

fn names(tab: &CategoryTab) -> Vec<&str> {
	tab.visible_entries()
		.unwrap()
		.into_iter()
		.map(|entry| entry.name.as_str())
		.collect()
}

#[test]
fn empty_filters_list_everything_by_name() {
	let (tab, _) = tab_with(armory(), &["pf2e.equipment-srd"]);
	assert_eq!(names(&tab), vec!["Dagger", "Shield"]);
	assert_eq!(tab.total_match_count(), Ok(2));
}

#[test]
fn price_ceiling_excludes_expensive_entries() {
	let (mut tab, _) = tab_with(armory(), &["pf2e.equipment-srd"]);
	tab.apply(FilterIntent::range("price", None, Some(5.0))).unwrap();
	assert_eq!(names(&tab), vec!["Dagger"]);
}

#[test]
fn same_id_in_two_packs_stays_distinct() {
	let (tab, _) = tab_with(armory(), &["pf2e.equipment-srd", "world.relics"]);
	let daggers: Vec<_> = tab
		.entries()
		.unwrap()
		.filter(|entry| entry.key.id == "1")
		.map(|entry| entry.key.pack.as_str())
		.collect();
	assert_eq!(daggers, vec!["pf2e.equipment-srd", "world.relics"]);
	assert_eq!(tab.total_match_count(), Ok(4));
}

#[test]
fn records_of_other_types_are_left_out() {
	let (tab, _) = tab_with(armory(), &["world.relics"]);
	assert!(
		tab.entry(&EntryKey::new("world.relics", "f")).is_none(),
		"feats do not belong in the equipment tab"
	);
	assert_eq!(tab.loaded_packs(), ["world.relics"]);
}

#[test]
fn querying_before_init_fails_fast() {
	let tab = CategoryTab::new(Category::Spell, DEFAULT_PAGE_SIZE).unwrap();
	let expected = EngineError::Uninitialized {
		category: Category::Spell,
	};
	assert_eq!(tab.visible_entries().unwrap_err(), expected);
	assert_eq!(tab.total_match_count().unwrap_err(), expected);
	assert!(!tab.is_initialized());
}

#[test]
fn option_universe_counts_the_unfiltered_index() {
	let (mut tab, _) = tab_with(armory(), &["pf2e.equipment-srd", "world.relics"]);
	let rarity = &tab.filters().checkboxes["rarity"];
	let counts: Vec<_> = rarity
		.options
		.iter()
		.map(|(key, option)| (key.as_str(), option.label.as_str(), option.count))
		.collect();
	assert_eq!(
		counts,
		vec![
			("common", "Common", 2),
			("rare", "Rare", 1),
			("uncommon", "Uncommon", 1)
		]
	);

	tab.apply(FilterIntent::SetSearch("shield".into())).unwrap();
	assert_eq!(tab.filters().checkboxes["rarity"].options["common"].count, 2);
}

#[test]
fn visible_entries_are_a_sorted_prefix_of_the_matches() {
	let (mut tab, _) = tab_with(armory(), &["pf2e.equipment-srd", "world.relics"]);
	let all: Vec<String> = names(&tab).into_iter().map(String::from).collect();

	tab.scroll_limit = 2;
	assert_eq!(names(&tab), all[..2]);
	assert_eq!(tab.total_match_count(), Ok(4));
}

#[test]
fn reset_filters_is_idempotent() {
	let (mut tab, _) = tab_with(armory(), &["pf2e.equipment-srd", "world.relics"]);
	tab.apply(FilterIntent::select("rarity", "rare")).unwrap();
	tab.apply(FilterIntent::SortBy("price".into())).unwrap();

	tab.reset_filters();
	let once = tab.filters().clone();
	tab.reset_filters();
	assert_eq!(tab.filters(), &once);
	assert!(once.is_unconstrained());
	assert_eq!(once.order.by, "name");
}

#[test]
fn reinit_with_same_packs_is_deterministic() {
	let (mut tab, mut loader) = tab_with(armory(), &["pf2e.equipment-srd", "world.relics"]);
	let entries: Vec<IndexEntry> = tab.entries().unwrap().cloned().collect();
	let filters = tab.filters().clone();

	block_on(tab.init(
		&mut loader,
		&ids(&["pf2e.equipment-srd", "world.relics"]),
		&mut NullProgress,
	));

	let again: Vec<IndexEntry> = tab.entries().unwrap().cloned().collect();
	assert_eq!(again, entries);
	assert_eq!(tab.filters(), &filters);
}

#[test]
fn reinit_drops_entries_of_disabled_packs() {
	let (mut tab, mut loader) = tab_with(armory(), &["pf2e.equipment-srd", "world.relics"]);
	tab.apply(FilterIntent::select("rarity", "rare")).unwrap();

	block_on(tab.init(&mut loader, &ids(&["pf2e.equipment-srd"]), &mut NullProgress));

	assert_eq!(names(&tab), vec!["Dagger", "Shield"]);
	assert!(!tab.filters().checkboxes["rarity"].options.contains_key("rare"));
	assert_eq!(tab.loaded_packs(), ["pf2e.equipment-srd"]);
}

#[test]
fn raising_a_lower_bound_never_adds_matches() {
	let (mut tab, _) = tab_with(armory(), &["pf2e.equipment-srd", "world.relics"]);
	let mut previous = tab.total_match_count().unwrap();
	for min in [0.0, 1.0, 5.0, 6.0, 8.0] {
		tab.apply(FilterIntent::range("level", Some(min), None)).unwrap();
		let count = tab.total_match_count().unwrap();
		assert!(count <= previous, "min {min}: {count} > {previous}");
		previous = count;
	}
	assert_eq!(previous, 0);
}

#[test]
fn selecting_more_options_never_removes_matches() {
	let (mut tab, _) = tab_with(armory(), &["pf2e.equipment-srd", "world.relics"]);
	tab.apply(FilterIntent::select("rarity", "rare")).unwrap();
	let rare = tab.total_match_count().unwrap();
	tab.apply(FilterIntent::select("rarity", "uncommon")).unwrap();
	let rare_or_uncommon = tab.total_match_count().unwrap();
	assert_eq!((rare, rare_or_uncommon), (1, 2));

	tab.apply(FilterIntent::select("itemtypes", "weapon")).unwrap();
	assert_eq!(names(&tab), vec!["Dagger of Venom"]);
}

#[test]
fn descending_sort_reverses_the_whole_order() {
	let (mut tab, _) = tab_with(armory(), &["pf2e.equipment-srd", "world.relics"]);
	tab.apply(FilterIntent::SortBy("level".into())).unwrap();
	assert_eq!(
		names(&tab),
		vec!["Dagger", "Shield", "Dagger of Venom", "Aeon Stone"]
	);

	tab.apply(FilterIntent::SetDirection(SortDirection::Desc)).unwrap();
	assert_eq!(
		names(&tab),
		vec!["Aeon Stone", "Dagger of Venom", "Shield", "Dagger"]
	);
}

#[test]
fn entries_missing_the_sort_attribute_come_first() {
	let provider = MemoryPackProvider::new().with_pack(
		PackHandle::new("world.loot", "Loot", DocumentKind::Item),
		vec![
			equipment("a", "Gem", "treasure", 50.0, 1, "common"),
			IndexRecord::new("b", "Mystery Box", "equipment").with_data(json!({})),
		],
	);
	let (mut tab, _) = tab_with(provider, &["world.loot"]);
	tab.apply(FilterIntent::SortBy("price".into())).unwrap();
	assert_eq!(names(&tab), vec!["Mystery Box", "Gem"]);

	tab.apply(FilterIntent::range("price", Some(0.0), None)).unwrap();
	assert_eq!(names(&tab), vec!["Gem"]);
}

#[test]
fn search_is_case_insensitive_substring() {
	let (mut tab, _) = tab_with(armory(), &["pf2e.equipment-srd", "world.relics"]);
	tab.apply(FilterIntent::SetSearch("  DAGGER ".into())).unwrap();
	assert_eq!(names(&tab), vec!["Dagger", "Dagger of Venom"]);
}

#[test]
fn scroll_window_grows_up_to_the_match_count() {
	let (mut tab, _) = tab_with(armory(), &["pf2e.equipment-srd", "world.relics"]);
	tab.scroll_limit = 1;
	assert_eq!(tab.grow_scroll(2), Ok(true));
	assert_eq!(tab.scroll_limit(), 3);
	assert_eq!(tab.grow_scroll(100), Ok(true));
	assert_eq!(tab.scroll_limit(), 4);
	assert_eq!(tab.grow_scroll(100), Ok(false));
	assert_eq!(tab.scroll_limit(), 4);

	tab.reset_scroll();
	assert_eq!(tab.scroll_limit(), DEFAULT_PAGE_SIZE);
}

#[test]
fn zero_scroll_step_reports_no_growth() {
	let (mut tab, _) = tab_with(armory(), &["pf2e.equipment-srd", "world.relics"]);
	tab.scroll_limit = 1;
	assert_eq!(tab.grow_scroll(0), Ok(false));
	assert_eq!(tab.scroll_limit(), 1);
}

#[test]
fn spell_dropdown_filters_by_casting_time() {
	let spell = |id: &str, name: &str, time: &str, level: i64| {
		IndexRecord::new(id, name, "spell").with_data(json!({
			"level": { "value": level },
			"time": { "value": time },
		}))
	};
	let provider = MemoryPackProvider::new().with_pack(
		PackHandle::new("pf2e.spells-srd", "Spells", DocumentKind::Item),
		vec![
			spell("a", "Fireball", "2", 3),
			spell("b", "Feather Fall", "reaction", 1),
			spell("c", "Heal", "1", 1),
		],
	);
	let mut loader = PackLoader::new(Rc::new(provider));
	let mut tab = CategoryTab::new(Category::Spell, DEFAULT_PAGE_SIZE).unwrap();
	block_on(tab.init(&mut loader, &ids(&["pf2e.spells-srd"]), &mut NullProgress));

	let levels: Vec<_> = tab.filters().checkboxes["level"].options.keys().cloned().collect();
	assert_eq!(levels, vec!["1", "3"]);

	tab.apply(FilterIntent::dropdown("timefilter", "reaction")).unwrap();
	assert_eq!(tab.total_match_count(), Ok(1));
	assert!(tab.apply(FilterIntent::dropdown("timefilter", "10 minutes")).is_err());
	assert_eq!(tab.total_match_count(), Ok(1));

	tab.apply(FilterIntent::dropdown("timefilter", "any")).unwrap();
	assert_eq!(tab.total_match_count(), Ok(3));
}

#[test]
fn option_order_puts_numbers_first() {
	let mut values = vec!["10", "b", "2", "A"];
	values.sort_by(|a, b| option_order(a, b));
	assert_eq!(values, vec!["2", "10", "A", "b"]);
}
