//! Admin API client.
//!
//! [`AdminApi`] is the seam between components and the server; the
//! browser implementation is [`HttpAdminApi`].

use serde::Serialize;

use crate::config::{BROWSE_FS_ENDPOINT, RECORD_INFO_ENDPOINT};
use crate::core::error::FetchError;
use crate::models::{AdminConfig, BrowseFsResponse, RecordInfo, RecordPathDetails};
use crate::utils::{fetch_json, post_json};

/// Requests the sidebar makes against the admin server.
#[allow(async_fn_in_trait)]
pub trait AdminApi {
    /// Load the capability flags of a record.
    async fn record_info(&self, record: &RecordPathDetails) -> Result<RecordInfo, FetchError>;

    /// Ask the server to reveal a record in the host file manager.
    async fn browse_fs(&self, record: &RecordPathDetails) -> Result<BrowseFsResponse, FetchError>;
}

#[derive(Serialize)]
struct BrowseFsRequest<'a> {
    path: &'a str,
    alt: &'a str,
}

/// [`AdminApi`] over the browser Fetch API.
#[derive(Clone, Debug)]
pub struct HttpAdminApi {
    config: AdminConfig,
}

impl HttpAdminApi {
    pub fn new(config: AdminConfig) -> Self {
        Self { config }
    }
}

impl AdminApi for HttpAdminApi {
    async fn record_info(&self, record: &RecordPathDetails) -> Result<RecordInfo, FetchError> {
        let url = format!(
            "{}?{}",
            self.config.api_url(RECORD_INFO_ENDPOINT),
            record.to_query()
        );
        fetch_json(&url).await
    }

    async fn browse_fs(&self, record: &RecordPathDetails) -> Result<BrowseFsResponse, FetchError> {
        let body = BrowseFsRequest {
            path: &record.path,
            alt: &record.alt,
        };
        post_json(&self.config.api_url(BROWSE_FS_ENDPOINT), &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_request_body() {
        let body = BrowseFsRequest {
            path: "/blog",
            alt: "de",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"path": "/blog", "alt": "de"})
        );
    }
}
