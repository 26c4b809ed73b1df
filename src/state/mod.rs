/* src/state/mod.rs */

mod cell;
mod event;

pub use cell::{DEFAULT_EVENT_CAPACITY, StateCell};
pub use event::FeedEvent;

use std::sync::Arc;

use crate::error::LoadError;

/// Progress of the current load cycle.
///
/// Exactly one variant describes the state at any observation point. The
/// `data`/`is_loading`/`error` accessors reproduce the triple a rendering
/// consumer branches on: `Loading` and `Failed` expose an empty row slice,
/// `Ready` and `Failed` are the two terminal, non-loading outcomes.
#[derive(Debug)]
pub enum LoadState<T> {
	/// A cycle is in flight; no terminal transition has committed yet.
	Loading,
	/// The last committed cycle parsed successfully. An empty row set is
	/// still a success.
	Ready(Arc<Vec<T>>),
	/// The last committed cycle failed; stale rows are dropped.
	Failed(LoadError),
}

impl<T> LoadState<T> {
	/// The loaded rows. Empty unless the state is `Ready`.
	pub fn data(&self) -> &[T] {
		match self {
			Self::Ready(rows) => rows,
			_ => &[],
		}
	}

	/// True while no terminal transition has committed.
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}

	/// True once rows have committed, even zero of them.
	pub fn is_ready(&self) -> bool {
		matches!(self, Self::Ready(_))
	}

	/// The failure, if the cycle ended in one.
	pub fn error(&self) -> Option<&LoadError> {
		match self {
			Self::Failed(error) => Some(error),
			_ => None,
		}
	}
}

// Manual impl: cloning shares the row Arc, so no `T: Clone` bound is needed.
impl<T> Clone for LoadState<T> {
	fn clone(&self) -> Self {
		match self {
			Self::Loading => Self::Loading,
			Self::Ready(rows) => Self::Ready(Arc::clone(rows)),
			Self::Failed(error) => Self::Failed(error.clone()),
		}
	}
}
