//! Link bound to a keyboard shortcut.

use leptos::{ev, prelude::*};

use crate::app::AdminContext;
use crate::models::{Modifiers, Shortcut};
use crate::utils::dom;

/// Anchor that also follows its target when `shortcut` is pressed.
///
/// The window-level key listener lives as long as the link is mounted.
#[component]
pub fn LinkWithHotkey(
    #[prop(into)] href: Signal<String>,
    shortcut: Shortcut,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext must be provided");
    let title = shortcut.display(ctx.platform);
    let combo = shortcut.for_platform(ctx.platform).clone();
    let prevent_default = shortcut.prevent_default;

    let handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        let modifiers = Modifiers {
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            alt: ev.alt_key(),
            shift: ev.shift_key(),
        };
        if combo.matches(&ev.key(), modifiers) {
            if prevent_default {
                ev.prevent_default();
            }
            dom::navigate(&href.get_untracked());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <a href=href title=title>
            {children()}
        </a>
    }
}
