//! Translation lookup.
//!
//! Tables are embedded JSON objects mapping message keys to strings.
//! Lookups fall back to English and then to the key itself, so a missing
//! translation never breaks rendering.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::{DEFAULT_LANGUAGE, TRANSLATIONS_DE, TRANSLATIONS_EN};

type Table = HashMap<String, String>;

static TABLES: LazyLock<HashMap<&'static str, Table>> = LazyLock::new(|| {
    [("en", TRANSLATIONS_EN), ("de", TRANSLATIONS_DE)]
        .into_iter()
        .map(|(lang, json)| {
            let table = serde_json::from_str::<Table>(json).unwrap_or_else(|e| {
                web_sys::console::error_1(
                    &format!("translation table '{}' is invalid: {}", lang, e).into(),
                );
                Table::new()
            });
            (lang, table)
        })
        .collect()
});

/// Normalize a language tag (`de-AT`, `DE`) to a supported table name.
///
/// Unsupported languages map to [`DEFAULT_LANGUAGE`].
pub fn normalize_language(tag: &str) -> &'static str {
    let primary = tag
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    TABLES
        .keys()
        .copied()
        .find(|lang| *lang == primary)
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Translate `key` into `lang`.
pub fn trans(lang: &str, key: &str) -> String {
    [lang, DEFAULT_LANGUAGE]
        .iter()
        .filter_map(|l| TABLES.get(*l))
        .find_map(|table| table.get(key))
        .cloned()
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tables_parse() {
        assert!(TABLES.contains_key("en"));
        assert!(TABLES.contains_key("de"));
        assert!(!TABLES["en"].is_empty());
        assert!(!TABLES["de"].is_empty());
    }

    #[test]
    fn test_trans_lookup() {
        assert_eq!(trans("en", "PAGE_ACTIONS"), "Page Actions");
        assert_eq!(trans("de", "PAGE_ACTIONS"), "Seitenaktionen");
    }

    #[test]
    fn test_trans_falls_back_to_english() {
        assert_eq!(trans("de", "NOT_IN_ANY_TABLE"), "NOT_IN_ANY_TABLE");
        assert_eq!(trans("fr", "EDIT"), "Edit");
    }

    #[test]
    fn test_trans_falls_back_to_key() {
        assert_eq!(trans("en", "NO_SUCH_KEY"), "NO_SUCH_KEY");
    }

    #[test]
    fn test_normalize_language() {
        assert_eq!(normalize_language("de-AT"), "de");
        assert_eq!(normalize_language("DE"), "de");
        assert_eq!(normalize_language("en_US"), "en");
        assert_eq!(normalize_language("ja"), "en");
        assert_eq!(normalize_language(""), "en");
    }

    #[test]
    fn test_every_english_key_is_translated_to_german() {
        let missing: Vec<_> = TABLES["en"]
            .keys()
            .filter(|k| !TABLES["de"].contains_key(*k))
            .collect();
        assert!(missing.is_empty(), "untranslated keys: {:?}", missing);
    }
}
