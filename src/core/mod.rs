//! Core logic behind the sidebar.
//!
//! - [`api`] - Admin API seam and its HTTP implementation
//! - [`browse`] - Browse-filesystem request and outcome reporting
//! - [`error`] - Error types
//! - [`i18n`] - Translation lookup
//! - [`platform`] - Host platform detection

pub mod api;
pub mod browse;
pub mod error;
pub mod i18n;
pub mod platform;

pub use api::{AdminApi, HttpAdminApi};
pub use browse::{BrowseFeedback, BrowseOutcome, open_in_file_browser, report_outcome};
pub use error::{ConfigError, FetchError};
pub use platform::Platform;
