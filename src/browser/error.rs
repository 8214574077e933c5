use thiserror::Error;

use super::store::SettingsError;
use crate::category::UnknownTab;
use crate::tabs::{EngineError, SchemaError};

#[derive(Debug, Error)]
pub enum BrowserError {
	#[error(transparent)]
	UnknownTab(#[from] UnknownTab),
	#[error("no category tab is active")]
	NoActiveCategory,
	#[error(transparent)]
	Engine(#[from] EngineError),
	#[error("category schema is inconsistent")]
	Schema(#[from] SchemaError),
	#[error(transparent)]
	Settings(#[from] SettingsError),
}
