//! UI components built with Leptos.
//!
//! - [`sidebar`] - Record sidebar with the page actions list
//! - [`AdminLink`] - Link to an admin page for a record
//! - [`LinkWithHotkey`] - Link that also follows a keyboard shortcut
//! - [`error_dialog`] - Shared error dialog overlay
//! - [`icons`] - Centralized icon definitions (change theme here)

mod admin_link;
pub mod error_dialog;
pub mod icons;
mod link_with_hotkey;
pub mod sidebar;

pub use admin_link::AdminLink;
pub use error_dialog::{ErrorDialog, ErrorDialogState};
pub use link_with_hotkey::LinkWithHotkey;
pub use sidebar::{PageActions, Sidebar};
