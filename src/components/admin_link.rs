//! Links to admin pages.

use leptos::prelude::*;

use crate::app::AdminContext;
use crate::models::{AdminPage, RecordPathDetails};

/// Anchor opening `page` for a record.
#[component]
pub fn AdminLink(
    page: AdminPage,
    #[prop(into)] record: Signal<RecordPathDetails>,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext must be provided");
    let href = move || record.with(|r| ctx.admin_path(page, r));

    view! {
        <a href=href>
            {children()}
        </a>
    }
}
