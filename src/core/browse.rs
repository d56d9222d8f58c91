//! Browse-filesystem request handling.
//!
//! Each call sends exactly one request; repeated clicks are neither
//! de-duplicated nor ordered against each other.

use crate::core::api::AdminApi;
use crate::core::error::FetchError;
use crate::models::RecordPathDetails;

/// Translation key of the alert shown when the server declines.
pub const CANNOT_BROWSE_KEY: &str = "ERROR_CANNOT_BROWSE_FS";

/// How a browse request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseOutcome {
    /// The server opened the file manager.
    Opened,
    /// The server answered but could not open it (e.g. file missing).
    Declined,
    /// The request itself failed.
    Failed(FetchError),
}

/// User-facing reporting of a browse outcome.
pub trait BrowseFeedback {
    /// Blocking alert with a translated message.
    fn alert(&self, message: &str);
    /// Hand a request failure to the shared error dialog.
    fn show_error(&self, error: &FetchError);
}

/// Send one browse request for `record`.
pub async fn open_in_file_browser<A: AdminApi>(api: &A, record: &RecordPathDetails) -> BrowseOutcome {
    match api.browse_fs(record).await {
        Ok(resp) if resp.okay => BrowseOutcome::Opened,
        Ok(_) => BrowseOutcome::Declined,
        Err(e) => BrowseOutcome::Failed(e),
    }
}

/// Report `outcome` through `feedback`; successful opens are silent.
pub fn report_outcome<F: BrowseFeedback>(outcome: &BrowseOutcome, lang: &str, feedback: &F) {
    match outcome {
        BrowseOutcome::Opened => {}
        BrowseOutcome::Declined => {
            feedback.alert(&crate::core::i18n::trans(lang, CANNOT_BROWSE_KEY))
        }
        BrowseOutcome::Failed(e) => feedback.show_error(e),
    }
}
