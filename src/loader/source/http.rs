/* src/loader/source/http.rs */

use async_trait::async_trait;

use super::super::Source;
use crate::error::LoadError;

/// An HTTP source backed by reqwest.
///
/// With a base URL configured, locators are joined onto it (the dashboard
/// case, where locators look like `/data/hyacine.csv`); without one, each
/// locator must be a full URL.
pub struct HttpSource {
	client: reqwest::Client,
	base: Option<String>,
}

impl HttpSource {
	/// Creates a source that treats every locator as a full URL.
	pub fn new() -> Self {
		Self {
			client: reqwest::Client::new(),
			base: None,
		}
	}

	/// Creates a source that resolves locators against a base URL.
	pub fn with_base(base: impl Into<String>) -> Self {
		Self {
			client: reqwest::Client::new(),
			base: Some(base.into()),
		}
	}

	fn url_for(&self, locator: &str) -> String {
		match &self.base {
			Some(base) => format!(
				"{}/{}",
				base.trim_end_matches('/'),
				locator.trim_start_matches('/')
			),
			None => locator.to_string(),
		}
	}
}

impl Default for HttpSource {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Source for HttpSource {
	async fn fetch_text(&self, locator: &str) -> Result<String, LoadError> {
		let url = self.url_for(locator);
		let response = self
			.client
			.get(&url)
			.send()
			.await
			.map_err(|e| LoadError::fetch(e.to_string()))?
			.error_for_status()
			.map_err(|e| LoadError::fetch(e.to_string()))?;

		response.text().await.map_err(|e| LoadError::fetch(e.to_string()))
	}
}
