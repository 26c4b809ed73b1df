/* src/loader/mod.rs */

mod records;
pub mod source;

pub use records::parse_records;
pub use source::{FileSource, HttpSource, MemorySource};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::LoadError;

/// Abstract transport that retrieves a full resource body by locator.
///
/// One call per load cycle; no streaming, no partial reads. Implementations
/// report every failure mode as [`LoadError::Fetch`] with the underlying
/// message.
#[async_trait]
pub trait Source: Send + Sync {
	/// Fetch the complete resource body as text.
	async fn fetch_text(&self, locator: &str) -> Result<String, LoadError>;
}

/// Runs the fetch and parse halves of one load cycle.
///
/// Straight-line pipeline: retrieve the body, hand it to the CSV reader.
/// No retry, no caching, no partial results.
pub async fn load_records<T>(source: &dyn Source, locator: &str) -> Result<Vec<T>, LoadError>
where
	T: DeserializeOwned,
{
	let text = source.fetch_text(locator).await?;
	records::parse_records(&text)
}
