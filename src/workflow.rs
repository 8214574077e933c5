use std::collections::BTreeSet;
use std::mem;
use std::rc::Rc;

use anyhow::{Context, Result, anyhow};
use compendium_browser::logging::LogProgress;
use compendium_browser::{
	BrowserView, Category, CompendiumBrowser, FilterIntent, FsPackProvider, IndexEntry,
	JsonSettingsStore, PackProvider, PackSettings, SortDirection,
};
use futures::executor::block_on;
use log::warn;
use serde::Serialize;

use crate::cli::{CliArgs, DropdownArg, PackToggle, RangeArg, SortArg};
use crate::settings::ResolvedConfig;

/// What the user asked the browser for, lifted from the command line.
#[derive(Debug, Clone, Default)]
pub(crate) struct BrowseRequest {
	pub(crate) category: Option<String>,
	pub(crate) search: Option<String>,
	pub(crate) filters: Vec<String>,
	pub(crate) max_level: Option<f64>,
	pub(crate) ranges: Vec<RangeArg>,
	pub(crate) dropdowns: Vec<DropdownArg>,
	pub(crate) sort: Option<SortArg>,
	pub(crate) descending: bool,
	pub(crate) pages: usize,
	pub(crate) list_packs: bool,
	pub(crate) enable: Vec<PackToggle>,
	pub(crate) disable: Vec<PackToggle>,
}

impl From<&CliArgs> for BrowseRequest {
	fn from(cli: &CliArgs) -> Self {
		Self {
			category: cli.category.clone(),
			search: cli.search.clone(),
			filters: cli.filters.clone(),
			max_level: cli.max_level,
			ranges: cli.ranges.clone(),
			dropdowns: cli.dropdowns.clone(),
			sort: cli.sort.clone(),
			descending: cli.descending,
			pages: cli.pages,
			list_packs: cli.list_packs,
			enable: cli.enable.clone(),
			disable: cli.disable.clone(),
		}
	}
}

/// Entries of one category after filtering, sorting and scrolling.
#[derive(Debug, Serialize)]
pub(crate) struct EntryListing {
	pub(crate) category: Category,
	pub(crate) total: usize,
	pub(crate) entries: Vec<IndexEntry>,
}

#[derive(Debug)]
pub(crate) enum BrowseOutcome {
	Packs(PackSettings),
	Entries(EntryListing),
}

/// Coordinates a single non-interactive browse: load, filter, print.
pub(crate) struct BrowseWorkflow {
	browser: CompendiumBrowser,
	request: BrowseRequest,
}

impl BrowseWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig, request: BrowseRequest) -> Result<Self> {
		let provider = FsPackProvider::scan(&config.packs_dir)
			.with_context(|| format!("failed to scan packs in {}", config.packs_dir.display()))?;
		let provider: Rc<dyn PackProvider> = Rc::new(provider);
		let store = JsonSettingsStore::new(config.settings_file);
		let browser = CompendiumBrowser::new(provider, Box::new(store), config.browser)
			.context("failed to prepare the compendium browser")?;
		Ok(Self { browser, request })
	}

	pub(crate) fn run(mut self) -> Result<BrowseOutcome> {
		let mut progress = LogProgress;
		self.save_toggles(&mut progress)?;

		if self.request.list_packs {
			return Ok(BrowseOutcome::Packs(self.browser.settings().clone()));
		}

		let name = self.request.category.take().ok_or_else(|| {
			anyhow!("no category given; name one of action, bestiary, equipment, feat, hazard, spell or settings")
		})?;
		let tokens = mem::take(&mut self.request.filters);
		block_on(self.browser.open_category(
			&name,
			tokens,
			self.request.max_level,
			&mut progress,
		))?;

		if self.browser.active().and_then(|tab| tab.category()).is_some() {
			for intent in self.intents() {
				self.browser.apply(intent)?;
			}
			for _ in 0..self.request.pages {
				if !self.browser.scroll_near_end()? {
					break;
				}
			}
		}

		Ok(match self.browser.view()? {
			BrowserView::Settings { packs } => BrowseOutcome::Packs(packs.clone()),
			BrowserView::Tab(view) => BrowseOutcome::Entries(EntryListing {
				category: view.category,
				total: view.total,
				entries: view.entries.into_iter().cloned().collect(),
			}),
		})
	}

	fn intents(&self) -> Vec<FilterIntent> {
		let request = &self.request;
		let mut intents = Vec::new();
		if let Some(search) = &request.search {
			intents.push(FilterIntent::SetSearch(search.clone()));
		}
		for range in &request.ranges {
			intents.push(FilterIntent::range(&range.key, range.min, range.max));
		}
		for dropdown in &request.dropdowns {
			intents.push(FilterIntent::dropdown(&dropdown.key, &dropdown.choice));
		}
		let mut descending = request.descending;
		if let Some(sort) = &request.sort {
			intents.push(FilterIntent::SortBy(sort.field.clone()));
			descending |= sort.descending;
		}
		if descending {
			intents.push(FilterIntent::SetDirection(SortDirection::Desc));
		}
		intents
	}

	/// Apply `--enable`/`--disable` to the current settings and persist them.
	fn save_toggles(&mut self, progress: &mut LogProgress) -> Result<()> {
		if self.request.enable.is_empty() && self.request.disable.is_empty() {
			return Ok(());
		}

		let settings = self.browser.settings();
		let mut enabled: BTreeSet<(Category, String)> = Category::ALL
			.into_iter()
			.flat_map(|category| {
				settings
					.enabled(category)
					.into_iter()
					.map(move |id| (category, id))
			})
			.collect();
		for toggle in &self.request.enable {
			if settings.get(toggle.category, &toggle.pack).is_none() {
				warn!(
					"pack '{}' holds no {} entries; ignoring",
					toggle.pack, toggle.category
				);
				continue;
			}
			enabled.insert((toggle.category, toggle.pack.clone()));
		}
		for toggle in &self.request.disable {
			enabled.remove(&(toggle.category, toggle.pack.clone()));
		}

		block_on(self.browser.save_settings(&enabled, progress))
			.context("failed to save pack settings")
	}
}
