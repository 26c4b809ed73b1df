/* src/lib.rs */

//!
//! Typed, reactive CSV data feeds for chart dashboards.
//!
//! This crate integrates three components:
//!
//! - **loader**: Fetching a raw CSV body by locator and parsing it into
//!   typed records.
//! - **state**: Atomic load-state tracking (`Loading` / `Ready` / `Failed`)
//!   with event subscription and stale-cycle rejection.
//! - **feed**: The [`Feed`] controller tying a source, a locator and a
//!   state cell into repeatable load cycles.
//!
//! A fourth module, **metrics**, holds the derived-metric helpers the
//! dashboard computes over loaded character rows.
//!
//! ## Basic Usage
//!
//! See `demos/basic.rs` for a complete example.

pub mod error;
pub mod feed;
pub mod loader;
pub mod metrics;
pub mod state;

pub use error::LoadError;
pub use feed::{Feed, FeedBuilder};
pub use loader::{FileSource, HttpSource, MemorySource, Source, load_records};
pub use state::{FeedEvent, LoadState, StateCell};
