//! Record sidebar.
//!
//! - [`PageActions`] - Conditional list of actions for the current record
//! - [`BrowseFsLink`] - Reveal the record in the host file manager

mod browse_fs_link;
mod page_actions;

pub use browse_fs_link::{BrowseFsLink, browse_button_title};
pub use page_actions::PageActions;

use leptos::prelude::*;

use crate::models::{RecordInfo, RecordPathDetails};

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

/// Sidebar panel for a single record.
#[component]
pub fn Sidebar(
    #[prop(into)] record: Signal<RecordPathDetails>,
    #[prop(into)] record_info: Signal<RecordInfo>,
) -> impl IntoView {
    view! {
        <nav class=css::sidebar>
            <PageActions record=record record_info=record_info />
        </nav>
    }
}
