//! Data models and types for the admin sidebar.
//!
//! Contains domain types for:
//! - [`RecordPathDetails`], [`RecordInfo`], [`BrowseFsResponse`] - Record identity and capabilities
//! - [`PageAction`] - Actions offered for a record and their ordering
//! - [`AdminPage`], [`admin_path`] - Admin page URLs
//! - [`Shortcut`], [`KeyCombo`] - Keyboard shortcuts
//! - [`AdminConfig`] - Runtime config injected by the server

mod admin_config;
mod admin_url;
mod page_action;
mod record;
mod shortcut;

pub use admin_config::AdminConfig;
pub use admin_url::{AdminPage, admin_path};
pub use page_action::{PageAction, browse_button_title_key, page_actions, section_title_key};
pub use record::{BrowseFsResponse, RecordInfo, RecordPathDetails};
pub use shortcut::{KeyCombo, Modifiers, Shortcut};
