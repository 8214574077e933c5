use thiserror::Error;

/// Failures reported by a [`PackProvider`](crate::PackProvider).
#[derive(Debug, Error)]
pub enum ProviderError {
	/// The identifier does not name a pack known to the provider.
	#[error("pack '{id}' is not known to the provider")]
	UnknownPack { id: String },

	/// The pack exists but its index could not be read.
	#[error("failed to read index of pack '{id}': {reason}")]
	Unreadable { id: String, reason: String },

	/// The pack index was read but does not have the expected layout.
	#[error("pack '{id}' is malformed: {reason}")]
	Malformed { id: String, reason: String },
}

impl ProviderError {
	pub fn unreadable(id: impl Into<String>, reason: impl ToString) -> Self {
		Self::Unreadable {
			id: id.into(),
			reason: reason.to_string(),
		}
	}

	pub fn malformed(id: impl Into<String>, reason: impl ToString) -> Self {
		Self::Malformed {
			id: id.into(),
			reason: reason.to_string(),
		}
	}
}
