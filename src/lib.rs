//! Filtering and query engine for browsing compendium packs.
//!
//! Packs are streamed in through a [`PackLoader`], merged per category by a
//! [`CategoryTab`], and queried through the [`FilterState`] the user mutates.
//! [`CompendiumBrowser`] ties the tabs together with the pack settings and
//! the active-tab pointer. Pack storage itself is abstracted behind
//! [`PackProvider`].

pub mod app_dirs;
pub mod browser;
pub mod category;
pub mod coins;
pub mod filters;
pub mod loader;
pub mod logging;
pub mod providers;
pub mod tabs;

pub use browser::{
	BrowserError, BrowserOptions, BrowserView, CompendiumBrowser, DragData, Intent, JsonSettingsStore,
	MemorySettingsStore, Notice, PackSettings, Renderer, SettingsStore, TabView,
};
pub use category::{Category, TabName};
pub use compendium_pack_api::{
	DocumentKind, IndexRecord, NullProgress, PackHandle, PackProvider, ProgressSink, ProviderError,
};
pub use filters::{FilterIntent, FilterState, SortDirection};
pub use loader::PackLoader;
pub use providers::{FsPackProvider, MemoryPackProvider};
pub use tabs::{CategoryTab, EngineError, EntryKey, IndexEntry};
