/* src/state/cell.rs */

use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwap;
use tokio::sync::broadcast;

use super::{FeedEvent, LoadState};

/// Default event channel capacity.
pub const DEFAULT_EVENT_CAPACITY: usize = 100;

/// One committed observation: which cycle wrote it and what it holds.
struct Versioned<T> {
	cycle: u64,
	state: LoadState<T>,
}

/// Atomic load-state holder with stale-cycle rejection.
///
/// Uses RCU (Read-Copy-Update) for wait-free reads and atomic replacement,
/// so rows are never observable half-written. Every cycle is tagged with a
/// monotonic id at [`begin`](StateCell::begin); a terminal commit carrying
/// an id older than the current one is dropped instead of applied, which
/// gives last-locator-wins semantics when cycles race.
pub struct StateCell<T> {
	inner: ArcSwap<Versioned<T>>,
	cycles: AtomicU64,
	events: broadcast::Sender<FeedEvent<T>>,
}

impl<T> StateCell<T>
where
	T: Send + Sync,
{
	/// Creates a cell in the initial `Loading` state with default event
	/// channel capacity.
	pub fn new() -> Self {
		Self::with_event_capacity(DEFAULT_EVENT_CAPACITY)
	}

	/// Creates a cell with custom event channel capacity.
	///
	/// Note: Events may be dropped if subscribers process slower than
	/// cycles commit and the channel fills up.
	pub fn with_event_capacity(capacity: usize) -> Self {
		Self {
			inner: ArcSwap::from_pointee(Versioned {
				cycle: 0,
				state: LoadState::Loading,
			}),
			cycles: AtomicU64::new(0),
			events: broadcast::channel(capacity).0,
		}
	}

	/// Starts a new load cycle: supersedes anything in flight and commits
	/// `Loading`. Returns the cycle id to commit the terminal state with.
	pub fn begin(&self, locator: &str) -> u64 {
		let cycle = self.cycles.fetch_add(1, Ordering::SeqCst) + 1;

		self.inner.rcu(|current| {
			if current.cycle > cycle {
				Arc::clone(current)
			} else {
				Arc::new(Versioned {
					cycle,
					state: LoadState::Loading,
				})
			}
		});

		let _ = self.events.send(FeedEvent::Loading {
			locator: locator.to_string(),
		});
		cycle
	}

	/// Commits a terminal state for the given cycle.
	///
	/// Returns false when a newer cycle has superseded it and the write was
	/// dropped; the corresponding event is suppressed as well.
	pub fn commit(&self, cycle: u64, locator: &str, state: LoadState<T>) -> bool {
		let committed = Cell::new(false);

		self.inner.rcu(|current| {
			if current.cycle > cycle {
				committed.set(false);
				Arc::clone(current)
			} else {
				committed.set(true);
				Arc::new(Versioned {
					cycle,
					state: state.clone(),
				})
			}
		});

		if !committed.get() {
			log::debug!("dropping stale commit for {locator} (cycle {cycle})");
			return false;
		}

		let event = match &state {
			LoadState::Ready(rows) => FeedEvent::Loaded {
				locator: locator.to_string(),
				records: Arc::clone(rows),
			},
			LoadState::Failed(error) => FeedEvent::Failed {
				locator: locator.to_string(),
				error: error.clone(),
			},
			LoadState::Loading => FeedEvent::Loading {
				locator: locator.to_string(),
			},
		};
		let _ = self.events.send(event);
		true
	}

	/// Current state snapshot. Wait-free.
	pub fn state(&self) -> LoadState<T> {
		self.inner.load().state.clone()
	}

	/// Id of the cycle that wrote the current state.
	pub fn cycle(&self) -> u64 {
		self.inner.load().cycle
	}

	/// Subscribes to committed state transitions.
	pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent<T>> {
		self.events.subscribe()
	}
}

impl<T> Default for StateCell<T>
where
	T: Send + Sync,
{
	fn default() -> Self {
		Self::new()
	}
}
