/* src/metrics/mod.rs */

//!
//! Derived-metric helpers over loaded character rows.
//!
//! All functions are pure arithmetic over already-loaded data; they fit
//! naturally inside a feed's `on_loaded` hook or directly over
//! `state().data()`.

pub mod castorice;
pub mod hyacine;
pub mod ruanmei;
