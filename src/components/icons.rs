//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuEye as Preview, LuFolderOpen as BrowseFs, LuPaperclip as Attachment,
        LuPencil as Edit, LuPlus as AddChild, LuTrash2 as Delete, LuTriangleAlert as Warning,
    };
}

mod bootstrap {
    pub use icondata::{
        BsExclamationTriangle as Warning, BsEye as Preview, BsFolder2Open as BrowseFs,
        BsPaperclip as Attachment, BsPencil as Edit, BsPlusLg as AddChild, BsTrash as Delete,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(EDIT, Edit);
themed_icon!(DELETE, Delete);
themed_icon!(PREVIEW, Preview);
themed_icon!(BROWSE_FS, BrowseFs);
themed_icon!(ADD_CHILD, AddChild);
themed_icon!(ATTACHMENT, Attachment);
themed_icon!(WARNING, Warning);
