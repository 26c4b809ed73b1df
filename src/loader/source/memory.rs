/* src/loader/source/memory.rs */

use async_trait::async_trait;
use std::collections::BTreeMap;

use super::super::Source;
use crate::error::LoadError;

/// A simple in-memory source useful for testing and embedded datasets.
#[derive(Default)]
pub struct MemorySource {
	data: BTreeMap<String, String>,
}

impl MemorySource {
	/// Creates a new empty MemorySource.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a resource body under the given locator.
	pub fn insert(&mut self, locator: &str, body: impl Into<String>) {
		self.data.insert(locator.to_string(), body.into());
	}
}

#[async_trait]
impl Source for MemorySource {
	async fn fetch_text(&self, locator: &str) -> Result<String, LoadError> {
		self.data
			.get(locator)
			.cloned()
			.ok_or_else(|| LoadError::fetch(format!("no resource at {locator}")))
	}
}
