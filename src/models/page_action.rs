//! Sidebar actions available for a record.
//!
//! The set and order of actions is a pure function of [`RecordInfo`];
//! components only decide how each action is rendered.

use super::admin_url::AdminPage;
use super::record::RecordInfo;
use crate::core::platform::Platform;

/// A single entry in the page actions list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    /// Edit the record (or its metadata, for attachments).
    Edit,
    Delete,
    Preview,
    /// Reveal the record's file in the host file manager.
    BrowseFs,
    AddChild,
    AddAttachment,
}

impl PageAction {
    /// Translation key of the action label.
    ///
    /// The edit label depends on whether the record is an attachment, and
    /// the browse label on the host platform.
    pub fn label_key(self, info: &RecordInfo, platform: Platform) -> &'static str {
        match self {
            Self::Edit if info.is_attachment => "EDIT_METADATA",
            Self::Edit => "EDIT",
            Self::Delete => "DELETE",
            Self::Preview => "PREVIEW",
            Self::BrowseFs => browse_button_title_key(platform),
            Self::AddChild => "ADD_CHILD_PAGE",
            Self::AddAttachment => "ADD_ATTACHMENT",
        }
    }

    /// Admin page the action links to, or `None` for in-place actions.
    pub fn admin_page(self) -> Option<AdminPage> {
        match self {
            Self::Edit => Some(AdminPage::Edit),
            Self::Delete => Some(AdminPage::Delete),
            Self::Preview => Some(AdminPage::Preview),
            Self::BrowseFs => None,
            Self::AddChild => Some(AdminPage::AddChild),
            Self::AddAttachment => Some(AdminPage::Upload),
        }
    }

    /// Stable identifier, used as list key and DOM class suffix.
    pub fn id(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Preview => "preview",
            Self::BrowseFs => "fs-open",
            Self::AddChild => "add-child",
            Self::AddAttachment => "add-attachment",
        }
    }
}

/// Actions shown for a record, in display order.
///
/// Edit and preview are always present; every other action is gated by
/// exactly one capability flag.
pub fn page_actions(info: &RecordInfo) -> Vec<PageAction> {
    [
        (PageAction::Edit, true),
        (PageAction::Delete, info.can_be_deleted),
        (PageAction::Preview, true),
        (PageAction::BrowseFs, info.exists),
        (PageAction::AddChild, info.can_have_children),
        (PageAction::AddAttachment, info.can_have_attachments),
    ]
    .into_iter()
    .filter_map(|(action, shown)| shown.then_some(action))
    .collect()
}

/// Translation key of the actions section heading.
pub fn section_title_key(info: &RecordInfo) -> &'static str {
    if info.is_attachment {
        "ATTACHMENT_ACTIONS"
    } else {
        "PAGE_ACTIONS"
    }
}

/// Translation key of the browse-filesystem link for a platform.
pub fn browse_button_title_key(platform: Platform) -> &'static str {
    match platform {
        Platform::Mac => "BROWSE_FS_MAC",
        Platform::Windows => "BROWSE_FS_WINDOWS",
        _ => "BROWSE_FS",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info_from_bits(bits: u8) -> RecordInfo {
        RecordInfo {
            is_attachment: bits & 1 != 0,
            can_be_deleted: bits & 2 != 0,
            exists: bits & 4 != 0,
            can_have_children: bits & 8 != 0,
            can_have_attachments: bits & 16 != 0,
        }
    }

    #[test]
    fn test_all_flags_set() {
        let info = info_from_bits(0b11110);
        assert_eq!(
            page_actions(&info),
            vec![
                PageAction::Edit,
                PageAction::Delete,
                PageAction::Preview,
                PageAction::BrowseFs,
                PageAction::AddChild,
                PageAction::AddAttachment,
            ]
        );
    }

    #[test]
    fn test_no_flags_set() {
        assert_eq!(
            page_actions(&RecordInfo::default()),
            vec![PageAction::Edit, PageAction::Preview]
        );
    }

    #[test]
    fn test_each_flag_gates_exactly_one_action() {
        for bits in 0..32u8 {
            let info = info_from_bits(bits);
            let actions = page_actions(&info);
            assert!(actions.contains(&PageAction::Edit));
            assert!(actions.contains(&PageAction::Preview));
            assert_eq!(actions.contains(&PageAction::Delete), info.can_be_deleted);
            assert_eq!(actions.contains(&PageAction::BrowseFs), info.exists);
            assert_eq!(
                actions.contains(&PageAction::AddChild),
                info.can_have_children
            );
            assert_eq!(
                actions.contains(&PageAction::AddAttachment),
                info.can_have_attachments
            );
        }
    }

    #[test]
    fn test_title_and_edit_label_follow_attachment_flag() {
        let page = RecordInfo::default();
        let attachment = RecordInfo {
            is_attachment: true,
            ..RecordInfo::default()
        };

        assert_eq!(section_title_key(&page), "PAGE_ACTIONS");
        assert_eq!(section_title_key(&attachment), "ATTACHMENT_ACTIONS");
        assert_eq!(PageAction::Edit.label_key(&page, Platform::Other), "EDIT");
        assert_eq!(
            PageAction::Edit.label_key(&attachment, Platform::Other),
            "EDIT_METADATA"
        );
    }

    #[test]
    fn test_browse_title_by_platform() {
        assert_eq!(browse_button_title_key(Platform::Mac), "BROWSE_FS_MAC");
        assert_eq!(browse_button_title_key(Platform::Windows), "BROWSE_FS_WINDOWS");
        assert_eq!(browse_button_title_key(Platform::Linux), "BROWSE_FS");
        assert_eq!(browse_button_title_key(Platform::Other), "BROWSE_FS");
    }

    #[test]
    fn test_link_targets() {
        assert_eq!(PageAction::BrowseFs.admin_page(), None);
        assert_eq!(
            PageAction::AddAttachment.admin_page(),
            Some(AdminPage::Upload)
        );
        assert_eq!(PageAction::AddChild.admin_page(), Some(AdminPage::AddChild));
    }
}
