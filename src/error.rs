/* src/error.rs */

/// Core error type for a load cycle.
///
/// Both kinds are caught at the feed boundary and stored in
/// [`LoadState::Failed`](crate::state::LoadState); they never escape to a
/// reactive consumer as a panic or raw `Err`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
	/// The resource body could not be retrieved.
	#[error("Failed to fetch CSV: {0}")]
	Fetch(String),

	/// The retrieved text could not be read as CSV records.
	#[error("Failed to parse CSV: {0}")]
	Parse(String),
}

impl LoadError {
	/// Wraps an underlying transport message as a fetch error.
	pub fn fetch(message: impl Into<String>) -> Self {
		Self::Fetch(message.into())
	}

	/// Wraps an underlying reader message as a parse error.
	pub fn parse(message: impl Into<String>) -> Self {
		Self::Parse(message.into())
	}

	/// Returns true for transport-layer failures.
	pub fn is_fetch(&self) -> bool {
		matches!(self, Self::Fetch(_))
	}

	/// Returns true for malformed-data failures.
	pub fn is_parse(&self) -> bool {
		matches!(self, Self::Parse(_))
	}
}
