//! Filter schemas for the six browsable categories.

use compendium_pack_api::DocumentKind;

use super::schema::{AttributeSpec, CategorySchema, NumberSpec, RangeSpec, Source};
use crate::category::Category;

/// Record types the equipment tab lists.
pub const EQUIPMENT_TYPES: &[&str] = &[
	"weapon",
	"armor",
	"equipment",
	"consumable",
	"treasure",
	"backpack",
	"kit",
];

const fn attribute(key: &'static str, label: &'static str, source: Source) -> AttributeSpec {
	AttributeSpec { key, label, source }
}

const fn number(key: &'static str, source: Source) -> NumberSpec {
	NumberSpec { key, source }
}

const fn range(key: &'static str, label: &'static str) -> RangeSpec {
	RangeSpec { key, label }
}

const TRAITS: Source = Source::Field("data.traits.value");
const RARITY: Source = Source::Field("data.traits.rarity.value");
const SOURCE: Source = Source::Field("data.source.value");
const LEVEL: Source = Source::Field("data.level.value");
const ACTOR_LEVEL: Source = Source::Field("data.details.level.value");
const ACTOR_SOURCE: Source = Source::Field("data.details.source.value");

pub static ACTION: CategorySchema = CategorySchema {
	category: Category::Action,
	kind: DocumentKind::Item,
	entry_types: &["action"],
	index_fields: &["data.actionType.value", "data.traits.value", "data.source.value"],
	checkboxes: &[
		attribute("actiontype", "Action Type", Source::Field("data.actionType.value")),
		attribute("source", "Source", SOURCE),
		attribute("traits", "Traits", TRAITS),
	],
	numbers: &[],
	ranges: &[],
	dropdowns: &[],
	sort_fields: &["name"],
	search: &[TRAITS],
};

pub static BESTIARY: CategorySchema = CategorySchema {
	category: Category::Bestiary,
	kind: DocumentKind::Actor,
	entry_types: &["npc"],
	index_fields: &[
		"data.details.level.value",
		"data.details.alignment.value",
		"data.details.source.value",
		"data.traits.rarity.value",
		"data.traits.size.value",
		"data.traits.traits.value",
	],
	checkboxes: &[
		attribute("alignment", "Alignment", Source::Field("data.details.alignment.value")),
		attribute("rarity", "Rarity", RARITY),
		attribute("size", "Size", Source::Field("data.traits.size.value")),
		attribute("source", "Source", ACTOR_SOURCE),
		attribute("traits", "Traits", Source::Field("data.traits.traits.value")),
	],
	numbers: &[number("level", ACTOR_LEVEL)],
	ranges: &[range("level", "Level")],
	dropdowns: &[],
	sort_fields: &["name", "level"],
	search: &[],
};

pub static EQUIPMENT: CategorySchema = CategorySchema {
	category: Category::Equipment,
	kind: DocumentKind::Item,
	entry_types: EQUIPMENT_TYPES,
	index_fields: &[
		"data.level.value",
		"data.price.value",
		"data.traits.value",
		"data.traits.rarity.value",
		"data.source.value",
		"data.category",
	],
	checkboxes: &[
		attribute("itemtypes", "Item Types", Source::Kind),
		attribute("rarity", "Rarity", RARITY),
		attribute("source", "Source", SOURCE),
		attribute("traits", "Traits", TRAITS),
		attribute("weapontype", "Weapon Category", Source::Field("data.category")),
	],
	numbers: &[
		number("level", LEVEL),
		number("price", Source::Price("data.price.value")),
	],
	ranges: &[range("level", "Level"), range("price", "Price")],
	dropdowns: &[],
	sort_fields: &["name", "level", "price"],
	search: &[],
};

pub static FEAT: CategorySchema = CategorySchema {
	category: Category::Feat,
	kind: DocumentKind::Item,
	entry_types: &["feat"],
	index_fields: &[
		"data.level.value",
		"data.featType.value",
		"data.traits.value",
		"data.traits.rarity.value",
		"data.source.value",
	],
	checkboxes: &[
		attribute("feattype", "Feat Type", Source::Field("data.featType.value")),
		attribute("rarity", "Rarity", RARITY),
		attribute("source", "Source", SOURCE),
		attribute("traits", "Traits", TRAITS),
	],
	numbers: &[number("level", LEVEL)],
	ranges: &[range("level", "Level")],
	dropdowns: &[],
	sort_fields: &["name", "level"],
	search: &[TRAITS],
};

pub static HAZARD: CategorySchema = CategorySchema {
	category: Category::Hazard,
	kind: DocumentKind::Actor,
	entry_types: &["hazard"],
	index_fields: &[
		"data.details.level.value",
		"data.details.isComplex",
		"data.details.source.value",
		"data.traits.rarity.value",
		"data.traits.value",
	],
	checkboxes: &[
		attribute(
			"complexity",
			"Complexity",
			Source::Flag {
				path: "data.details.isComplex",
				on: "complex",
				off: "simple",
			},
		),
		attribute("rarity", "Rarity", RARITY),
		attribute("source", "Source", ACTOR_SOURCE),
		attribute("traits", "Traits", TRAITS),
	],
	numbers: &[number("level", ACTOR_LEVEL)],
	ranges: &[range("level", "Level")],
	dropdowns: &[],
	sort_fields: &["name", "level"],
	search: &[],
};

pub static SPELL: CategorySchema = CategorySchema {
	category: Category::Spell,
	kind: DocumentKind::Item,
	entry_types: &["spell"],
	index_fields: &[
		"data.level.value",
		"data.category.value",
		"data.school.value",
		"data.traditions.value",
		"data.time.value",
		"data.traits.value",
		"data.traits.rarity.value",
		"data.source.value",
	],
	checkboxes: &[
		attribute("category", "Category", Source::Field("data.category.value")),
		attribute("level", "Level", LEVEL),
		attribute("rarity", "Rarity", RARITY),
		attribute("school", "School", Source::Field("data.school.value")),
		attribute("source", "Source", SOURCE),
		attribute("traditions", "Traditions", Source::Field("data.traditions.value")),
		attribute("traits", "Traits", TRAITS),
	],
	numbers: &[number("level", LEVEL)],
	ranges: &[],
	dropdowns: &[attribute("timefilter", "Casting Time", Source::Field("data.time.value"))],
	sort_fields: &["name", "level"],
	search: &[],
};

/// The schema declared for `category`.
#[must_use]
pub fn schema(category: Category) -> &'static CategorySchema {
	match category {
		Category::Action => &ACTION,
		Category::Bestiary => &BESTIARY,
		Category::Equipment => &EQUIPMENT,
		Category::Feat => &FEAT,
		Category::Hazard => &HAZARD,
		Category::Spell => &SPELL,
	}
}
