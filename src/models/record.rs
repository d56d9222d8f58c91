//! Record identity and capability flags.

use serde::{Deserialize, Serialize};

use crate::config::{PRIMARY_ALT, ROOT_RECORD_PATH};

/// Identifies a content node and its localization variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPathDetails {
    /// Record path in the content tree (e.g. `/blog/first-post`).
    pub path: String,
    /// Alternative-locale identifier (`_primary` for the main variant).
    pub alt: String,
}

impl RecordPathDetails {
    pub fn new(path: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alt: alt.into(),
        }
    }

    /// Parse `path` and `alt` from an admin page query string.
    ///
    /// Accepts the string with or without the leading `?`. Missing or empty
    /// values fall back to the root record and the primary alt; undecodable
    /// values are kept verbatim.
    pub fn from_query(query: &str) -> Self {
        let mut path = None;
        let mut alt = None;

        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = value.replace('+', " ");
            let value = urlencoding::decode(&value)
                .map(|v| v.into_owned())
                .unwrap_or(value);
            match key {
                "path" if !value.is_empty() => path = Some(value),
                "alt" if !value.is_empty() => alt = Some(value),
                _ => {}
            }
        }

        Self {
            path: path.unwrap_or_else(|| ROOT_RECORD_PATH.to_string()),
            alt: alt.unwrap_or_else(|| PRIMARY_ALT.to_string()),
        }
    }

    /// Whether this is the primary (untranslated) variant.
    pub fn is_primary_alt(&self) -> bool {
        self.alt == PRIMARY_ALT
    }

    /// Encode as a query string (without the leading `?`).
    ///
    /// The alt is omitted for the primary variant, which the server
    /// assumes when none is given.
    pub fn to_query(&self) -> String {
        let mut query = format!("path={}", urlencoding::encode(&self.path));
        if !self.is_primary_alt() {
            query.push_str("&alt=");
            query.push_str(&urlencoding::encode(&self.alt));
        }
        query
    }
}

impl Default for RecordPathDetails {
    fn default() -> Self {
        Self::new(ROOT_RECORD_PATH, PRIMARY_ALT)
    }
}

/// Capability flags describing which actions are valid for a record.
///
/// Deserialized from the record info endpoint; absent flags read as
/// `false`, which hides the corresponding action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordInfo {
    pub is_attachment: bool,
    pub can_be_deleted: bool,
    pub exists: bool,
    pub can_have_children: bool,
    pub can_have_attachments: bool,
}

/// Server reply to a browse-filesystem request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BrowseFsResponse {
    #[serde(default)]
    pub okay: bool,
}
