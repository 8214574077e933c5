//! Which packs feed which category, and whether the user wants them loaded.

use std::collections::{BTreeMap, BTreeSet};

use compendium_pack_api::PackHandle;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::tabs::categories::EQUIPMENT_TYPES;

/// Packs enabled by default when first discovered. Bestiary and hazard packs
/// are always enabled by default.
pub const DEFAULT_ENABLED_PACKS: &[&str] = &[
	"pf2e.actionspf2e",
	"pf2e.equipment-srd",
	"pf2e.ancestryfeatures",
	"pf2e.classfeatures",
	"pf2e.feats-srd",
	"pf2e.spells-srd",
];

/// A pack reference as persisted in the settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackInfo {
	pub load: bool,
	pub name: String,
}

/// Pack references by category, each category's packs ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackSettings(BTreeMap<Category, IndexMap<String, PackInfo>>);

impl PackSettings {
	/// Build the reference set for `packs`, keeping the `load` choice of every
	/// pack already present in `previous`.
	#[must_use]
	pub fn rebuild<S>(previous: &Self, packs: &[PackHandle], default_enabled: &[S]) -> Self
	where
		S: AsRef<str>,
	{
		let mut settings = Self::default();
		for pack in packs {
			for category in classify(pack) {
				let default = matches!(category, Category::Bestiary | Category::Hazard)
					|| default_enabled.iter().any(|id| id.as_ref() == pack.id);
				let load = previous
					.get(category, &pack.id)
					.map_or(default, |known| known.load);
				settings.0.entry(category).or_default().insert(
					pack.id.clone(),
					PackInfo {
						load,
						name: pack.label.clone(),
					},
				);
			}
		}
		for packs in settings.0.values_mut() {
			packs.sort_by(|id_a, a, id_b, b| a.name.cmp(&b.name).then_with(|| id_a.cmp(id_b)));
		}
		settings
	}

	#[must_use]
	pub fn get(&self, category: Category, id: &str) -> Option<&PackInfo> {
		self.0.get(&category)?.get(id)
	}

	/// Every pack referenced for `category`, in display order.
	pub fn packs(&self, category: Category) -> impl Iterator<Item = (&String, &PackInfo)> {
		self.0.get(&category).into_iter().flatten()
	}

	/// Ids of the packs `category` loads.
	#[must_use]
	pub fn enabled(&self, category: Category) -> Vec<String> {
		self.packs(category)
			.filter(|(_, info)| info.load)
			.map(|(id, _)| id.clone())
			.collect()
	}

	/// Set every known pack's `load` flag: on when `(category, id)` is in
	/// `enabled`, off otherwise. Pairs naming unknown packs are ignored.
	pub fn set_enabled(&mut self, enabled: &BTreeSet<(Category, String)>) {
		for (category, packs) in &mut self.0 {
			for (id, info) in packs.iter_mut() {
				info.load = enabled.contains(&(*category, id.clone()));
			}
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.values().all(IndexMap::is_empty)
	}
}

/// Categories a pack contributes to, judged by the record types it holds.
///
/// Creatures and hazards are independent of everything else. Item packs go to
/// exactly one of equipment, feat, spell and action, in that priority order.
#[must_use]
pub fn classify(pack: &PackHandle) -> Vec<Category> {
	let mut categories = Vec::new();
	if pack.has_type("npc") {
		categories.push(Category::Bestiary);
	}
	if pack.has_type("hazard") {
		categories.push(Category::Hazard);
	}
	let item_category = if EQUIPMENT_TYPES.iter().any(|kind| pack.has_type(kind)) {
		Some(Category::Equipment)
	} else if pack.has_type("feat") {
		Some(Category::Feat)
	} else if pack.has_type("spell") {
		Some(Category::Spell)
	} else if pack.has_type("action") {
		Some(Category::Action)
	} else {
		None
	};
	categories.extend(item_category);
	categories
}
