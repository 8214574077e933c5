//! Where `compendium-browser` keeps its configuration, pack files and pack
//! settings.
//!
//! `COMPENDIUM_CONFIG_DIR` and `COMPENDIUM_DATA_DIR` relocate the two roots;
//! everything else hangs off them.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "COMPENDIUM_CONFIG_DIR";
const DATA_DIR_ENV: &str = "COMPENDIUM_DATA_DIR";

const PACKS_DIR: &str = "packs";
const SETTINGS_FILE: &str = "packs.json";

fn resolve(env_name: &str, platform: fn(&ProjectDirs) -> &Path) -> Result<PathBuf> {
	match env::var_os(env_name) {
		Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
		_ => {
			let dirs = ProjectDirs::from("io", "albo", env!("CARGO_PKG_NAME"))
				.context("no home directory to place compendium-browser files under")?;
			Ok(platform(&dirs).to_path_buf())
		}
	}
}

/// Root of `config.toml`.
pub fn config_dir() -> Result<PathBuf> {
	resolve(CONFIG_DIR_ENV, ProjectDirs::config_local_dir)
}

pub fn data_dir() -> Result<PathBuf> {
	resolve(DATA_DIR_ENV, ProjectDirs::data_local_dir)
}

/// Pack files scanned when neither the CLI nor the config names a directory.
pub fn default_packs_dir() -> Result<PathBuf> {
	Ok(data_dir()?.join(PACKS_DIR))
}

/// Which packs each category loads, as last saved.
pub fn default_settings_file() -> Result<PathBuf> {
	Ok(data_dir()?.join(SETTINGS_FILE))
}
