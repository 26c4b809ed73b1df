/* src/feed/mod.rs */

//!
//! The [`Feed`] controller: one source, one locator, repeatable load cycles.

use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::de::DeserializeOwned;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::loader::{self, Source};
use crate::state::{FeedEvent, LoadState, StateCell};

/// Hook invoked once per committed successful load with the loaded rows.
pub type OnLoaded<T> = Arc<dyn Fn(&[T]) + Send + Sync>;

/// A reactive data feed for one CSV resource.
///
/// A feed owns a [`StateCell`], a [`Source`] and the current locator.
/// [`load`](Feed::load) runs one full cycle (begin, fetch, parse, commit);
/// swapping the locator and loading again starts a fresh cycle that
/// supersedes anything still in flight. Consumers read
/// [`state`](Feed::state) or [`subscribe`](Feed::subscribe) and branch on
/// the loading/rows/error triple; cycle failures never surface as `Err`.
pub struct Feed<T> {
	cell: Arc<StateCell<T>>,
	source: Arc<dyn Source>,
	locator: Arc<ArcSwap<String>>,
	on_loaded: Option<OnLoaded<T>>,
}

impl<T> Clone for Feed<T> {
	fn clone(&self) -> Self {
		Self {
			cell: self.cell.clone(),
			source: self.source.clone(),
			locator: self.locator.clone(),
			on_loaded: self.on_loaded.clone(),
		}
	}
}

/// Builder for a [`Feed`].
pub struct FeedBuilder<T> {
	source: Option<Arc<dyn Source>>,
	locator: Option<String>,
	on_loaded: Option<OnLoaded<T>>,
	event_capacity: usize,
}

impl<T> FeedBuilder<T>
where
	T: DeserializeOwned + Send + Sync + 'static,
{
	pub fn new() -> Self {
		Self {
			source: None,
			locator: None,
			on_loaded: None,
			event_capacity: crate::state::DEFAULT_EVENT_CAPACITY,
		}
	}

	pub fn source(mut self, source: impl Source + 'static) -> Self {
		self.source = Some(Arc::new(source));
		self
	}

	pub fn locator(mut self, locator: impl Into<String>) -> Self {
		self.locator = Some(locator.into());
		self
	}

	/// Registers a post-processing hook, run once per committed successful
	/// load with exactly the rows the state exposes.
	pub fn on_loaded(mut self, hook: impl Fn(&[T]) + Send + Sync + 'static) -> Self {
		self.on_loaded = Some(Arc::new(hook));
		self
	}

	pub fn event_capacity(mut self, capacity: usize) -> Self {
		self.event_capacity = capacity;
		self
	}

	pub fn build(self) -> Result<Feed<T>, &'static str> {
		let source = self.source.ok_or("source is required")?;
		let locator = self.locator.ok_or("locator is required")?;
		if locator.is_empty() {
			return Err("locator must be non-empty");
		}

		Ok(Feed {
			cell: Arc::new(StateCell::with_event_capacity(self.event_capacity)),
			source,
			locator: Arc::new(ArcSwap::from_pointee(locator)),
			on_loaded: self.on_loaded,
		})
	}
}

impl<T> Default for FeedBuilder<T>
where
	T: DeserializeOwned + Send + Sync + 'static,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Feed<T>
where
	T: DeserializeOwned + Send + Sync + 'static,
{
	pub fn builder() -> FeedBuilder<T> {
		FeedBuilder::new()
	}

	/// Creates a feed without a post-processing hook.
	pub fn new(source: impl Source + 'static, locator: impl Into<String>) -> Self {
		Self {
			cell: Arc::new(StateCell::new()),
			source: Arc::new(source),
			locator: Arc::new(ArcSwap::from_pointee(locator.into())),
			on_loaded: None,
		}
	}

	/// Runs one full load cycle and returns the state observed after it.
	///
	/// The cycle captures the locator at begin time. If a newer cycle began
	/// while this one was in flight, its terminal commit is dropped, the
	/// hook does not run, and the newer cycle's state is returned instead.
	pub async fn load(&self) -> LoadState<T> {
		let locator = self.locator.load_full();
		let cycle = self.cell.begin(&locator);

		let state = match loader::load_records::<T>(self.source.as_ref(), &locator).await {
			Ok(rows) => {
				log::debug!("loaded {} rows from {locator}", rows.len());
				LoadState::Ready(Arc::new(rows))
			}
			Err(error) => {
				log::warn!("load cycle for {locator} failed: {error}");
				LoadState::Failed(error)
			}
		};

		if !self.cell.commit(cycle, &locator, state.clone()) {
			return self.cell.state();
		}

		if let (Some(hook), LoadState::Ready(rows)) = (&self.on_loaded, &state) {
			hook(rows);
		}
		state
	}

	/// Runs a load cycle on a spawned task (reactive usage).
	pub fn spawn_load(&self) -> JoinHandle<()> {
		let feed = self.clone();
		tokio::spawn(async move {
			let _ = feed.load().await;
		})
	}

	/// Swaps the feed to a new locator.
	///
	/// The next [`load`](Feed::load) starts a fresh cycle for it; an
	/// in-flight cycle for the old locator loses the commit race.
	pub fn set_locator(&self, locator: impl Into<String>) {
		self.locator.store(Arc::new(locator.into()));
	}

	/// The locator the next cycle will load.
	pub fn locator(&self) -> Arc<String> {
		self.locator.load_full()
	}

	/// Current state snapshot. Wait-free.
	pub fn state(&self) -> LoadState<T> {
		self.cell.state()
	}

	/// Subscribes to committed state transitions.
	pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent<T>> {
		self.cell.subscribe()
	}
}

impl<T> std::fmt::Debug for Feed<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let locator = self.locator.load_full();
		f.debug_struct("Feed")
			.field("locator", &locator)
			.field("has_hook", &self.on_loaded.is_some())
			.finish_non_exhaustive()
	}
}
