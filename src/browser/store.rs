use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use super::packs::PackSettings;

#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("failed to access pack settings at {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("pack settings at {path} are malformed")]
	Malformed {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

/// Persistence of the pack settings.
pub trait SettingsStore {
	fn load(&self) -> Result<PackSettings, SettingsError>;

	fn save(&mut self, settings: &PackSettings) -> Result<(), SettingsError>;
}

/// Settings kept as a JSON file; a missing file reads as empty settings.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
	path: PathBuf,
}

impl JsonSettingsStore {
	#[must_use]
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn io_error(&self, source: io::Error) -> SettingsError {
		SettingsError::Io {
			path: self.path.clone(),
			source,
		}
	}
}

impl SettingsStore for JsonSettingsStore {
	fn load(&self) -> Result<PackSettings, SettingsError> {
		let text = match fs::read_to_string(&self.path) {
			Ok(text) => text,
			Err(err) if err.kind() == io::ErrorKind::NotFound => {
				debug!("no pack settings at {}", self.path.display());
				return Ok(PackSettings::default());
			}
			Err(err) => return Err(self.io_error(err)),
		};
		serde_json::from_str(&text).map_err(|source| SettingsError::Malformed {
			path: self.path.clone(),
			source,
		})
	}

	fn save(&mut self, settings: &PackSettings) -> Result<(), SettingsError> {
		if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
			fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
		}
		let text = serde_json::to_string_pretty(settings).map_err(|source| SettingsError::Malformed {
			path: self.path.clone(),
			source,
		})?;
		fs::write(&self.path, text).map_err(|err| self.io_error(err))?;
		debug!("saved pack settings to {}", self.path.display());
		Ok(())
	}
}

/// Settings held in memory for the lifetime of the store.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
	settings: PackSettings,
	saves: usize,
}

impl MemorySettingsStore {
	#[must_use]
	pub fn new(settings: PackSettings) -> Self {
		Self { settings, saves: 0 }
	}

	#[must_use]
	pub fn saves(&self) -> usize {
		self.saves
	}
}

impl SettingsStore for MemorySettingsStore {
	fn load(&self) -> Result<PackSettings, SettingsError> {
		Ok(self.settings.clone())
	}

	fn save(&mut self, settings: &PackSettings) -> Result<(), SettingsError> {
		self.settings = settings.clone();
		self.saves += 1;
		Ok(())
	}
}
