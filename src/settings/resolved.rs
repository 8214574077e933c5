use std::path::PathBuf;

use compendium_browser::BrowserOptions;

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
	pub packs_dir: PathBuf,
	pub settings_file: PathBuf,
	pub browser: BrowserOptions,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Packs directory: {}", self.packs_dir.display());
		println!("  Settings file: {}", self.settings_file.display());
		println!("  Page size: {}", self.browser.page_size);
		println!("  Scroll step: {}", self.browser.scroll_step);
		if self.browser.default_enabled.is_empty() {
			println!("  Enabled by default: (none)");
		} else {
			println!(
				"  Enabled by default: {}",
				self.browser.default_enabled.join(", ")
			);
		}
	}
}
