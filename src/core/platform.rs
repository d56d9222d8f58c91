//! Host platform detection.
//!
//! Used to pick platform-specific labels and keyboard shortcuts.

/// Operating system family of the browser's host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    Mac,
    Windows,
    Linux,
    #[default]
    Other,
}

impl Platform {
    /// Classify a navigator user agent / app version string.
    pub fn from_user_agent(ua: &str) -> Self {
        if ua.contains("Win") {
            Self::Windows
        } else if ua.contains("Mac") {
            Self::Mac
        } else if ua.contains("X11") || ua.contains("Linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// Detect the platform of the running browser.
    ///
    /// Falls back to [`Platform::Other`] outside a browser window.
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .map(|ua| Self::from_user_agent(&ua))
            .unwrap_or_default()
    }

    pub fn is_mac(self) -> bool {
        self == Self::Mac
    }
}
