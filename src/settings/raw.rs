use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use compendium_browser::{BrowserOptions, app_dirs};
use serde::Deserialize;

use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	packs: PacksSection,
	browser: BrowserSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PacksSection {
	dir: Option<PathBuf>,
	settings_file: Option<PathBuf>,
	default_enabled: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct BrowserSection {
	page_size: Option<usize>,
	scroll_step: Option<usize>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(dir) = cli.packs_dir.clone() {
			self.packs.dir = Some(dir);
		}
		if let Some(file) = cli.settings_file.clone() {
			self.packs.settings_file = Some(file);
		}
		if let Some(value) = cli.page_size {
			self.browser.page_size = Some(value);
		}
		if let Some(value) = cli.scroll_step {
			self.browser.scroll_step = Some(value);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let packs_dir = match self.packs.dir {
			Some(dir) => absolute(dir)?,
			None => app_dirs::default_packs_dir()?,
		};
		let settings_file = match self.packs.settings_file {
			Some(file) => absolute(file)?,
			None => app_dirs::default_settings_file()?,
		};

		let defaults = BrowserOptions::default();
		let page_size = self.browser.page_size.unwrap_or(defaults.page_size);
		let scroll_step = self.browser.scroll_step.unwrap_or(defaults.scroll_step);
		ensure!(page_size > 0, "browser.page_size must be positive");
		ensure!(scroll_step > 0, "browser.scroll_step must be positive");

		let default_enabled = match self.packs.default_enabled {
			Some(ids) => ids
				.into_iter()
				.map(|id| id.trim().to_string())
				.filter(|id| !id.is_empty())
				.collect(),
			None => defaults.default_enabled,
		};

		Ok(ResolvedConfig {
			packs_dir,
			settings_file,
			browser: BrowserOptions {
				page_size,
				scroll_step,
				default_enabled,
			},
		})
	}
}

fn absolute(path: PathBuf) -> Result<PathBuf> {
	if path.is_absolute() {
		return Ok(path);
	}
	Ok(env::current_dir()
		.context("failed to resolve current directory")?
		.join(path))
}
