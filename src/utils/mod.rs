//! Browser and network utilities.
//!
//! Provides:
//! - [`dom`] - Window access, alerts, location and navigation helpers
//! - [`fetch_json`], [`post_json`] - JSON requests against the admin API

pub mod dom;
mod fetch;

pub use fetch::{RaceResult, fetch_json, post_json, race_with_timeout};
