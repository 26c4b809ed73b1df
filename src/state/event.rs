/* src/state/event.rs */

use std::sync::Arc;

use crate::error::LoadError;

/// Events emitted by a state cell as load cycles progress.
///
/// Only committed transitions are broadcast; a superseded cycle's late
/// completion emits nothing.
#[derive(Debug)]
pub enum FeedEvent<T> {
	/// A new cycle began for the locator.
	Loading { locator: String },
	/// A cycle committed parsed rows.
	Loaded {
		locator: String,
		records: Arc<Vec<T>>,
	},
	/// A cycle committed a failure.
	Failed {
		locator: String,
		error: LoadError,
	},
}

// Manual impl: events share the row Arc, so no `T: Clone` bound is needed.
impl<T> Clone for FeedEvent<T> {
	fn clone(&self) -> Self {
		match self {
			Self::Loading { locator } => Self::Loading {
				locator: locator.clone(),
			},
			Self::Loaded { locator, records } => Self::Loaded {
				locator: locator.clone(),
				records: Arc::clone(records),
			},
			Self::Failed { locator, error } => Self::Failed {
				locator: locator.clone(),
				error: error.clone(),
			},
		}
	}
}
