//! The browser controller.
//!
//! [`CompendiumBrowser`] owns one [`CategoryTab`] per category, the pack
//! settings that decide which packs each tab merges, and the pointer to the
//! active tab. Renderers talk to it through [`Intent`]s and read it back
//! through [`CompendiumBrowser::view`].

mod acquire;
mod error;
mod intent;
mod packs;
mod store;
mod view;

use std::collections::BTreeSet;
use std::rc::Rc;

use compendium_pack_api::{DocumentKind, PackProvider, ProgressSink};
use log::{debug, warn};
use serde::Serialize;

pub use acquire::{Acquisition, AcquisitionError, ItemAcquirer, Notice, NoticeLevel};
pub use error::BrowserError;
pub use intent::Intent;
pub use packs::{DEFAULT_ENABLED_PACKS, PackInfo, PackSettings, classify};
pub use store::{JsonSettingsStore, MemorySettingsStore, SettingsError, SettingsStore};
pub use view::{BrowserView, Renderer, TabView};

use crate::category::{Category, TabName};
use crate::filters::{FilterError, FilterIntent};
use crate::loader::PackLoader;
use crate::tabs::{CategoryTab, DEFAULT_PAGE_SIZE, EntryKey};

/// Range overridden by an initial maximum level.
const LEVEL_RANGE: &str = "level";

/// Tunables of a browser instance.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserOptions {
	/// Entries materialized when a tab is (re)entered.
	pub page_size: usize,
	/// Entries added each time the renderer scrolls to the end.
	pub scroll_step: usize,
	/// Packs enabled when first discovered.
	pub default_enabled: Vec<String>,
}

impl Default for BrowserOptions {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			scroll_step: DEFAULT_PAGE_SIZE,
			default_enabled: DEFAULT_ENABLED_PACKS.iter().map(ToString::to_string).collect(),
		}
	}
}

/// JSON payload handed to the host when an entry is dragged out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DragData {
	#[serde(rename = "type")]
	pub kind: DocumentKind,
	pub pack: String,
	pub id: String,
}

#[derive(Debug, Default)]
struct InitialFilter {
	tokens: Vec<String>,
	max_level: Option<f64>,
}

pub struct CompendiumBrowser {
	loader: PackLoader,
	store: Box<dyn SettingsStore>,
	settings: PackSettings,
	tabs: Vec<CategoryTab>,
	active: Option<TabName>,
	pending: Option<InitialFilter>,
	options: BrowserOptions,
}

impl CompendiumBrowser {
	/// Create a browser over `provider`, reconciling the stored pack settings
	/// with the packs the provider offers. No tab is loaded yet.
	///
	/// # Errors
	///
	/// Fails when the stored settings cannot be read or a category schema is
	/// inconsistent.
	pub fn new(
		provider: Rc<dyn PackProvider>,
		store: Box<dyn SettingsStore>,
		options: BrowserOptions,
	) -> Result<Self, BrowserError> {
		let stored = store.load()?;
		let settings = PackSettings::rebuild(
			&stored,
			&provider.packs(),
			options.default_enabled.as_slice(),
		);
		let tabs = Category::ALL
			.into_iter()
			.map(|category| CategoryTab::new(category, options.page_size))
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Self {
			loader: PackLoader::new(provider),
			store,
			settings,
			tabs,
			active: None,
			pending: None,
			options,
		})
	}

	#[must_use]
	pub fn active(&self) -> Option<TabName> {
		self.active
	}

	#[must_use]
	pub fn settings(&self) -> &PackSettings {
		&self.settings
	}

	#[must_use]
	pub fn loader(&self) -> &PackLoader {
		&self.loader
	}

	#[must_use]
	pub fn tab(&self, category: Category) -> &CategoryTab {
		&self.tabs[category.index()]
	}

	/// Ids of the packs `category` merges under the current settings.
	#[must_use]
	pub fn loaded_packs(&self, category: Category) -> Vec<String> {
		self.settings.enabled(category)
	}

	/// Open the browser on `tab`, optionally preset with initial filters.
	///
	/// `tokens` name checkbox options as `group-option`; tokens that do not
	/// resolve are logged and skipped. `max_level` overrides the upper bound
	/// of the level range. The preset applies to this load only.
	pub async fn open_tab(
		&mut self,
		tab: TabName,
		tokens: Vec<String>,
		max_level: Option<f64>,
		progress: &mut dyn ProgressSink,
	) {
		self.pending = (!tokens.is_empty() || max_level.is_some())
			.then_some(InitialFilter { tokens, max_level });
		self.switch_tab(tab, progress).await;
	}

	/// [`open_tab`](Self::open_tab) by category name.
	///
	/// # Errors
	///
	/// Fails when `name` does not name a tab.
	pub async fn open_category(
		&mut self,
		name: &str,
		tokens: Vec<String>,
		max_level: Option<f64>,
		progress: &mut dyn ProgressSink,
	) -> Result<(), BrowserError> {
		let tab = name.parse::<TabName>()?;
		self.open_tab(tab, tokens, max_level, progress).await;
		Ok(())
	}

	/// Activate `tab`, initializing its engine on first use. A pending
	/// initial filter is applied and dropped.
	pub async fn switch_tab(&mut self, tab: TabName, progress: &mut dyn ProgressSink) {
		let Some(category) = tab.category() else {
			self.pending = None;
			self.active = Some(TabName::Settings);
			return;
		};
		let index = category.index();
		if !self.tabs[index].is_initialized() {
			let packs = self.settings.enabled(category);
			self.tabs[index]
				.init(&mut self.loader, &packs, progress)
				.await;
		}

		if let Some(initial) = self.pending.take() {
			let engine = &mut self.tabs[index];
			engine.reset_filters();
			let filters = engine.filters_mut();
			for token in &initial.tokens {
				let Some((group, option)) = token.split_once('-') else {
					warn!("ignoring initial filter '{token}': expected group-option");
					continue;
				};
				if let Err(err) = filters.select_initial(group, option) {
					warn!("ignoring initial filter '{token}' for {category}: {err}");
				}
			}
			if let Some(max) = initial.max_level {
				if let Err(err) = filters.override_max(LEVEL_RANGE, max) {
					warn!("ignoring initial level bound for {category}: {err}");
				}
			}
		}

		self.tabs[index].reset_scroll();
		self.active = Some(tab);
		debug!("switched to the {tab} tab");
	}

	/// Close the browser view. Any unconsumed initial filter is dropped.
	pub fn close(&mut self) {
		self.pending = None;
		self.active = None;
	}

	/// Apply a filter mutation to the active tab. References to unknown
	/// filters or options are logged and ignored.
	///
	/// # Errors
	///
	/// Fails when no category tab is active.
	pub fn apply(&mut self, intent: FilterIntent) -> Result<(), BrowserError> {
		let engine = self.active_engine_mut()?;
		let resets_scroll = intent.affects_results();
		match engine.apply(intent) {
			Ok(()) if resets_scroll => engine.reset_scroll(),
			Ok(()) => {}
			Err(err @ FilterError::UnknownSortField { .. }) => {
				// The order still fell back to name.
				warn!("sorting the {} tab by name: {err}", engine.category());
				engine.reset_scroll();
			}
			Err(err) => warn!("ignoring filter change on the {} tab: {err}", engine.category()),
		}
		Ok(())
	}

	/// Restore the active tab's default filters and scroll window.
	///
	/// # Errors
	///
	/// Fails when no category tab is active.
	pub fn clear_filters(&mut self) -> Result<(), BrowserError> {
		let engine = self.active_engine_mut()?;
		engine.reset_filters();
		engine.reset_scroll();
		Ok(())
	}

	/// Grow the active tab's scroll window by one step. Returns whether more
	/// entries became visible.
	///
	/// # Errors
	///
	/// Fails when no category tab is active or it was never loaded.
	pub fn scroll_near_end(&mut self) -> Result<bool, BrowserError> {
		let step = self.options.scroll_step;
		Ok(self.active_engine_mut()?.grow_scroll(step)?)
	}

	/// Persist the settings form and reload every tab that was already
	/// loaded.
	///
	/// `enabled` holds the (category, pack id) pairs left checked; every other
	/// known pack is disabled. When the store fails, the settings and every
	/// tab stay as they were.
	///
	/// # Errors
	///
	/// Fails when the settings cannot be stored or read back.
	pub async fn save_settings(
		&mut self,
		enabled: &BTreeSet<(Category, String)>,
		progress: &mut dyn ProgressSink,
	) -> Result<(), BrowserError> {
		let mut chosen = self.settings.clone();
		chosen.set_enabled(enabled);
		self.store.save(&chosen)?;
		let stored = self.store.load()?;
		self.settings = PackSettings::rebuild(
			&stored,
			&self.loader.provider().packs(),
			self.options.default_enabled.as_slice(),
		);

		for engine in &mut self.tabs {
			if !engine.is_initialized() {
				continue;
			}
			let packs = self.settings.enabled(engine.category());
			engine.init(&mut self.loader, &packs, progress).await;
		}
		Ok(())
	}

	/// Dispatch a renderer intent.
	///
	/// # Errors
	///
	/// Propagates the error of the operation the intent maps to.
	pub async fn handle(
		&mut self,
		intent: Intent,
		progress: &mut dyn ProgressSink,
	) -> Result<(), BrowserError> {
		match intent {
			Intent::Filter(intent) => self.apply(intent),
			Intent::ClearFilters => self.clear_filters(),
			Intent::ScrollNearEnd => self.scroll_near_end().map(drop),
			Intent::SwitchTab(tab) => {
				self.switch_tab(tab, progress).await;
				Ok(())
			}
			Intent::SaveSettings(enabled) => self.save_settings(&enabled, progress).await,
		}
	}

	/// Snapshot of the active tab.
	///
	/// # Errors
	///
	/// Fails when no tab is active or the active tab was never loaded.
	pub fn view(&self) -> Result<BrowserView<'_>, BrowserError> {
		let category = match self.active {
			None => return Err(BrowserError::NoActiveCategory),
			Some(TabName::Settings) => {
				return Ok(BrowserView::Settings {
					packs: &self.settings,
				});
			}
			Some(TabName::Category(category)) => category,
		};
		let engine = self.tab(category);
		Ok(BrowserView::Tab(TabView {
			category,
			filters: engine.filters(),
			entries: engine.visible_entries()?,
			total: engine.total_match_count()?,
			window: engine.scroll_limit(),
		}))
	}

	/// Hand the current [`view`](Self::view) to `renderer`.
	///
	/// # Errors
	///
	/// Same as [`view`](Self::view).
	pub fn render(&self, renderer: &mut dyn Renderer) -> Result<(), BrowserError> {
		renderer.render(&self.view()?);
		Ok(())
	}

	/// Drag payload for an entry of the active tab, if it has one.
	#[must_use]
	pub fn drag_data(&self, key: &EntryKey) -> Option<DragData> {
		let category = self.active?.category()?;
		self.tab(category).entry(key)?;
		let pack = self.loader.provider().resolve(&key.pack)?;
		Some(DragData {
			kind: pack.kind,
			pack: pack.id,
			id: key.id.clone(),
		})
	}

	/// Import an equipment entry through `acquirer`. Failures are reported
	/// as notices and leave the browser untouched.
	pub async fn take_item(&self, key: &EntryKey, acquirer: &mut dyn ItemAcquirer) -> Notice {
		if self.tab(Category::Equipment).entry(key).is_none() {
			return Notice::error(format!("{key} is not a loaded equipment entry"));
		}
		let notice = Notice::from(acquirer.acquire(key).await);
		debug!("take {key}: {notice}");
		notice
	}

	fn active_engine_mut(&mut self) -> Result<&mut CategoryTab, BrowserError> {
		let category = self
			.active
			.and_then(TabName::category)
			.ok_or(BrowserError::NoActiveCategory)?;
		Ok(&mut self.tabs[category.index()])
	}
}
