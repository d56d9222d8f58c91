//! Browser tests for the rendered page actions list.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use lektor_dash::AdminContext;
use lektor_dash::components::PageActions;
use lektor_dash::core::Platform;
use lektor_dash::models::{AdminConfig, RecordInfo, RecordPathDetails};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn render(info: RecordInfo, platform: Platform) -> web_sys::HtmlElement {
    let container = document()
        .create_element("div")
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>();
    document().body().unwrap().append_child(&container).unwrap();

    let record = RecordPathDetails::new("/blog", "de");
    mount_to(container.clone(), move || {
        provide_context(AdminContext::new(AdminConfig::default(), platform));
        view! { <PageActions record=record record_info=info /> }
    })
    .forget();

    container
}

fn action_ids(container: &web_sys::HtmlElement) -> Vec<String> {
    let items = container.query_selector_all("li[data-action]").unwrap();
    (0..items.length())
        .filter_map(|i| items.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|el| el.get_attribute("data-action"))
        .collect()
}

fn text_of(container: &web_sys::HtmlElement, selector: &str) -> String {
    container
        .query_selector(selector)
        .unwrap()
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn renders_only_always_present_actions_without_flags() {
    let container = render(RecordInfo::default(), Platform::Other);
    assert_eq!(action_ids(&container), vec!["edit", "preview"]);
    assert_eq!(text_of(&container, "h3"), "Page Actions");
    assert_eq!(text_of(&container, "li[data-action=edit] a"), "Edit");
}

#[wasm_bindgen_test]
fn renders_every_action_when_all_flags_set() {
    let info = RecordInfo {
        is_attachment: false,
        can_be_deleted: true,
        exists: true,
        can_have_children: true,
        can_have_attachments: true,
    };
    let container = render(info, Platform::Mac);
    assert_eq!(
        action_ids(&container),
        vec!["edit", "delete", "preview", "fs-open", "add-child", "add-attachment"]
    );
    assert_eq!(
        text_of(&container, "li[data-action=fs-open] a"),
        "Reveal in Finder"
    );
}

#[wasm_bindgen_test]
fn attachment_uses_metadata_labels() {
    let info = RecordInfo {
        is_attachment: true,
        ..RecordInfo::default()
    };
    let container = render(info, Platform::Windows);
    assert_eq!(text_of(&container, "h3"), "Attachment Actions");
    assert_eq!(text_of(&container, "li[data-action=edit] a"), "Edit Metadata");
}

#[wasm_bindgen_test]
fn links_point_at_admin_pages_for_the_record() {
    let info = RecordInfo {
        can_have_attachments: true,
        ..RecordInfo::default()
    };
    let container = render(info, Platform::Linux);
    let href = container
        .query_selector("li[data-action=add-attachment] a")
        .unwrap()
        .and_then(|el| el.get_attribute("href"))
        .unwrap_or_default();
    assert_eq!(href, "/admin/upload?path=%2Fblog&alt=de");
}

#[wasm_bindgen_test]
fn browse_link_click_prevents_navigation() {
    let info = RecordInfo {
        exists: true,
        ..RecordInfo::default()
    };
    let container = render(info, Platform::Linux);
    let link = container
        .query_selector("li[data-action=fs-open] a")
        .unwrap()
        .expect("browse link rendered");

    let init = web_sys::MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let click = web_sys::MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();

    let not_canceled = link.dispatch_event(&click).unwrap();

    assert!(!not_canceled);
    assert!(click.default_prevented());
    assert_eq!(link.get_attribute("href").as_deref(), Some("#"));
}
