//! Record sidebar for the static-site admin UI.
//!
//! Renders the page actions panel (edit, delete, preview, browse in
//! filesystem, add page, add attachment) for the record named in the page
//! URL, and talks to the admin API to load record info and reveal files.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::{AdminContext, App};
