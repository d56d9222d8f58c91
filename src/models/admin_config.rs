//! Runtime configuration injected by the admin page.

use serde::Deserialize;

use crate::config::{API_PREFIX, DEFAULT_ADMIN_ROOT, DEFAULT_LANGUAGE, INJECTED_CONFIG_GLOBAL};
use crate::core::error::ConfigError;
use crate::utils::dom;

/// Server-provided settings for the admin UI.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// URL prefix of the admin pages (e.g. `/admin`).
    pub admin_root: String,
    /// UI language requested by the server.
    pub lang: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            admin_root: DEFAULT_ADMIN_ROOT.to_string(),
            lang: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl AdminConfig {
    /// Read the config object the server page defines on `window`.
    pub fn from_global() -> Result<Self, ConfigError> {
        let window = web_sys::window().ok_or(ConfigError::Missing(INJECTED_CONFIG_GLOBAL))?;
        let value = js_sys::Reflect::get(&window, &INJECTED_CONFIG_GLOBAL.into())
            .map_err(|_| ConfigError::Missing(INJECTED_CONFIG_GLOBAL))?;
        if value.is_undefined() || value.is_null() {
            return Err(ConfigError::Missing(INJECTED_CONFIG_GLOBAL));
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Load the injected config, falling back to defaults with a warning.
    ///
    /// Without server config the browser's preferred language is used.
    pub fn load() -> Self {
        Self::from_global().unwrap_or_else(|e| {
            web_sys::console::warn_1(&format!("{}; using defaults", e).into());
            Self {
                lang: dom::browser_language().unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
                ..Self::default()
            }
        })
    }

    /// Full URL of an admin API endpoint.
    pub fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}{}{}",
            self.admin_root.trim_end_matches('/'),
            API_PREFIX,
            endpoint
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let config = AdminConfig::default();
        assert_eq!(config.api_url("/browsefs"), "/admin/api/browsefs");

        let config = AdminConfig {
            admin_root: "/cms/admin/".to_string(),
            ..AdminConfig::default()
        };
        assert_eq!(config.api_url("/recordinfo"), "/cms/admin/api/recordinfo");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AdminConfig = serde_json::from_str(r#"{"lang": "de"}"#).unwrap();
        assert_eq!(config.lang, "de");
        assert_eq!(config.admin_root, "/admin");
    }
}
