use serde::Serialize;

use super::packs::PackSettings;
use crate::category::Category;
use crate::filters::FilterState;
use crate::tabs::IndexEntry;

/// Snapshot of one category tab for rendering.
#[derive(Debug, Serialize)]
pub struct TabView<'a> {
	pub category: Category,
	pub filters: &'a FilterState,
	pub entries: Vec<&'a IndexEntry>,
	/// Matches before the scroll window is applied.
	pub total: usize,
	pub window: usize,
}

impl TabView<'_> {
	/// Whether scrolling can reveal more entries.
	#[must_use]
	pub fn has_more(&self) -> bool {
		self.entries.len() < self.total
	}
}

/// What the browser currently shows.
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum BrowserView<'a> {
	Settings { packs: &'a PackSettings },
	Tab(TabView<'a>),
}

/// Produces the user-facing view from browser snapshots.
pub trait Renderer {
	fn render(&mut self, view: &BrowserView<'_>);
}
