//! Application configuration.
//!
//! Centralizes the constants used throughout the admin sidebar.
//! Translation tables are loaded at compile time using `include_str!`.

// =============================================================================
// Translation Assets (loaded at compile time)
// =============================================================================

/// English translation table (also the fallback table).
pub const TRANSLATIONS_EN: &str = include_str!("../assets/i18n/en.json");

/// German translation table.
pub const TRANSLATIONS_DE: &str = include_str!("../assets/i18n/de.json");

/// Language used when neither the server nor the browser names a supported one.
pub const DEFAULT_LANGUAGE: &str = "en";

// =============================================================================
// Admin Routing
// =============================================================================

/// Root of the admin UI pages when the server injects no config.
pub const DEFAULT_ADMIN_ROOT: &str = "/admin";

/// Admin API prefix, relative to the admin root.
pub const API_PREFIX: &str = "/api";

/// Name of the global object the server page injects with runtime config.
pub const INJECTED_CONFIG_GLOBAL: &str = "$LEKTOR_CONFIG";

/// Alt identifier of the primary (untranslated) record variant.
pub const PRIMARY_ALT: &str = "_primary";

/// Record path used when the page URL names none.
pub const ROOT_RECORD_PATH: &str = "/";

// =============================================================================
// API Endpoints
// =============================================================================

/// Endpoint revealing a record in the host file manager (POST).
pub const BROWSE_FS_ENDPOINT: &str = "/browsefs";

/// Endpoint describing a record's capabilities (GET).
pub const RECORD_INFO_ENDPOINT: &str = "/recordinfo";

// =============================================================================
// Network Configuration
// =============================================================================

/// Timeout for the record info request in milliseconds.
///
/// The browse request is deliberately not raced against this.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the sidebar.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

/// Keyboard shortcut for the edit action.
pub mod shortcuts {
    /// Shortcut on non-mac platforms.
    pub const EDIT: &str = "Control+e";
    /// Shortcut on mac.
    pub const EDIT_MAC: &str = "Meta+e";
}
