//! Page actions section of the sidebar.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::browse_fs_link::BrowseFsLink;
use crate::app::AdminContext;
use crate::components::icons as ic;
use crate::components::{AdminLink, LinkWithHotkey};
use crate::config::shortcuts;
use crate::models::{
    PageAction, RecordInfo, RecordPathDetails, Shortcut, page_actions, section_title_key,
};

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

fn action_icon(action: PageAction) -> IconData {
    match action {
        PageAction::Edit => ic::EDIT,
        PageAction::Delete => ic::DELETE,
        PageAction::Preview => ic::PREVIEW,
        PageAction::BrowseFs => ic::BROWSE_FS,
        PageAction::AddChild => ic::ADD_CHILD,
        PageAction::AddAttachment => ic::ATTACHMENT,
    }
}

fn edit_shortcut() -> Option<Shortcut> {
    Shortcut::new(shortcuts::EDIT, Some(shortcuts::EDIT_MAC), true)
}

/// Titled list of the actions available for a record.
///
/// Inputs are memoized, so the list only changes when the record or its
/// flags actually differ from the previous render.
#[component]
pub fn PageActions(
    #[prop(into)] record: Signal<RecordPathDetails>,
    #[prop(into)] record_info: Signal<RecordInfo>,
) -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext must be provided");

    let record = Memo::new(move |_| record.get());
    let info = Memo::new(move |_| record_info.get());
    let actions = Memo::new(move |_| info.with(page_actions));
    let title = move || ctx.trans(info.with(section_title_key));

    let render_action = move |action: PageAction| {
        let label = Signal::derive(move || {
            ctx.trans(info.with(|i| action.label_key(i, ctx.platform)))
        });
        let content = move || {
            view! {
                <Icon icon=action_icon(action) />
                <span class=css::label>{label}</span>
            }
        };

        let link = match (action, action.admin_page()) {
            (PageAction::BrowseFs, _) => {
                view! { <BrowseFsLink record=record>{content()}</BrowseFsLink> }.into_any()
            }
            (PageAction::Edit, Some(page)) => match edit_shortcut() {
                Some(shortcut) => {
                    let href = Signal::derive(move || record.with(|r| ctx.admin_path(page, r)));
                    view! {
                        <LinkWithHotkey href=href shortcut=shortcut>
                            {content()}
                        </LinkWithHotkey>
                    }
                    .into_any()
                }
                None => view! { <AdminLink page=page record=record>{content()}</AdminLink> }
                    .into_any(),
            },
            (_, Some(page)) => {
                view! { <AdminLink page=page record=record>{content()}</AdminLink> }.into_any()
            }
            (_, None) => ().into_any(),
        };

        view! { <li class=css::item data-action=action.id()>{link}</li> }
    };

    view! {
        <div class=css::section>
            <h3 class=css::title>{title}</h3>
            <ul class=css::nav>
                <For each=move || actions.get() key=|action| action.id() children=render_action />
            </ul>
        </div>
    }
}
