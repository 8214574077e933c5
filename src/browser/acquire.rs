use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::tabs::EntryKey;

/// Outcome of a successful import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acquisition {
	/// Display name of the imported item.
	pub item: String,
	/// The user's own character when it was the only recipient.
	pub character: Option<String>,
}

#[derive(Debug, Error)]
pub enum AcquisitionError {
	#[error("no token is selected")]
	NoRecipient,
	#[error("{key} is not a physical item")]
	NotPhysical { key: EntryKey },
	#[error("{0}")]
	Failed(String),
}

/// Imports an entry's full document into the session's actors.
#[async_trait(?Send)]
pub trait ItemAcquirer {
	async fn acquire(&mut self, key: &EntryKey) -> Result<Acquisition, AcquisitionError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
	Info,
	Error,
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
	pub level: NoticeLevel,
	pub message: String,
}

impl Notice {
	pub fn info(message: impl Into<String>) -> Self {
		Self {
			level: NoticeLevel::Info,
			message: message.into(),
		}
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self {
			level: NoticeLevel::Error,
			message: message.into(),
		}
	}
}

impl From<Result<Acquisition, AcquisitionError>> for Notice {
	fn from(outcome: Result<Acquisition, AcquisitionError>) -> Self {
		match outcome {
			Ok(Acquisition {
				item,
				character: Some(character),
			}) => Self::info(format!("Added {item} to {character}")),
			Ok(Acquisition { item, .. }) => Self::info(format!("Added {item}")),
			Err(err) => Self::error(err.to_string()),
		}
	}
}

impl fmt::Display for Notice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn outcomes_become_notices() {
		let to_character = Notice::from(Ok(Acquisition {
			item: "Rope".into(),
			character: Some("Valeros".into()),
		}));
		assert_eq!(to_character, Notice::info("Added Rope to Valeros"));

		let to_tokens = Notice::from(Ok(Acquisition {
			item: "Rope".into(),
			character: None,
		}));
		assert_eq!(to_tokens.message, "Added Rope");

		let failed = Notice::from(Err(AcquisitionError::NoRecipient));
		assert_eq!(failed.level, NoticeLevel::Error);
		assert_eq!(failed.to_string(), "no token is selected");
	}
}
