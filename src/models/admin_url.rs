//! Admin page URL construction.

use super::record::RecordPathDetails;

/// Admin pages a record can be opened in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminPage {
    Edit,
    Delete,
    Preview,
    AddChild,
    Upload,
}

impl AdminPage {
    /// URL segment of the page under the admin root.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Preview => "preview",
            Self::AddChild => "add-child",
            Self::Upload => "upload",
        }
    }
}

/// Build the URL of an admin page for a record.
///
/// Format: `{admin_root}/{page}?{record query}`, see
/// [`RecordPathDetails::to_query`].
pub fn admin_path(admin_root: &str, page: AdminPage, record: &RecordPathDetails) -> String {
    format!(
        "{}/{}?{}",
        admin_root.trim_end_matches('/'),
        page.slug(),
        record.to_query()
    )
}
