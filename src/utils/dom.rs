//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Show a blocking alert with `message`.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// Get the current URL query string (including the leading `?`).
pub fn location_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Navigate the page to `url`.
pub fn navigate(url: &str) {
    if let Some(window) = window()
        && window.location().set_href(url).is_err()
    {
        web_sys::console::error_1(&format!("navigation to {} failed", url).into());
    }
}

/// Language tag preferred by the browser, if any.
pub fn browser_language() -> Option<String> {
    window()?.navigator().language()
}
