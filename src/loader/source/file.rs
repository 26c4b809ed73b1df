/* src/loader/source/file.rs */

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use super::super::Source;
use crate::error::LoadError;

/// A file system source backed by tokio::fs.
///
/// Locators are resolved relative to the root directory and must stay
/// inside it.
pub struct FileSource {
	root: PathBuf,
}

impl FileSource {
	/// Create a new FileSource rooted at the given path.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	/// Resolves the locator safely, ensuring it is within the root directory.
	async fn resolve_secure(&self, locator: &str) -> Result<PathBuf, LoadError> {
		// Basic path traversal check
		for component in std::path::Path::new(locator).components() {
			if matches!(component, std::path::Component::ParentDir) {
				return Err(LoadError::fetch(format!("{locator} escapes the source root")));
			}
		}

		let path = self.root.join(locator.trim_start_matches('/'));

		let canonical_root = fs::canonicalize(&self.root)
			.await
			.map_err(|e| LoadError::fetch(e.to_string()))?;

		match fs::canonicalize(&path).await {
			Ok(canonical_path) if canonical_path.starts_with(&canonical_root) => Ok(canonical_path),
			Ok(_) => Err(LoadError::fetch(format!("{locator} escapes the source root"))),
			Err(e) => Err(LoadError::fetch(e.to_string())),
		}
	}
}

#[async_trait]
impl Source for FileSource {
	async fn fetch_text(&self, locator: &str) -> Result<String, LoadError> {
		let path = self.resolve_secure(locator).await?;
		fs::read_to_string(path)
			.await
			.map_err(|e| LoadError::fetch(e.to_string()))
	}
}
