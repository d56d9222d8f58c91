//! Shared error dialog.
//!
//! Any component can report a failed request through
//! [`ErrorDialogState::show`]; the [`ErrorDialog`] overlay mounted at the
//! root displays it until the user closes it.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AdminContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/error_dialog/error_dialog.module.css");

/// Message currently shown by the error dialog, if any.
#[derive(Clone, Copy)]
pub struct ErrorDialogState {
    pub message: RwSignal<Option<String>>,
}

impl ErrorDialogState {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
        }
    }

    /// Open the dialog for `error`, replacing any message already shown.
    pub fn show(&self, error: &impl std::fmt::Display) {
        let message = error.to_string();
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1(&message.clone().into());
        self.message.set(Some(message));
    }

    pub fn close(&self) {
        self.message.set(None);
    }

    pub fn is_open(&self) -> bool {
        self.message.with(Option::is_some)
    }
}

impl Default for ErrorDialogState {
    fn default() -> Self {
        Self::new()
    }
}

/// Modal overlay showing the current error message.
#[component]
pub fn ErrorDialog() -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext must be provided");
    let dialog = ctx.error_dialog;

    view! {
        <Show when=move || dialog.is_open()>
            <div class=css::overlay role="alertdialog">
                <div class=css::dialog>
                    <h2 class=css::title>
                        <Icon icon=ic::WARNING />
                        {move || ctx.trans("ERROR_OCCURRED")}
                    </h2>
                    <p class=css::message>{move || dialog.message.get().unwrap_or_default()}</p>
                    <div class=css::actions>
                        <button class=css::button on:click=move |_| dialog.close()>
                            {move || ctx.trans("CLOSE")}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_close() {
        let dialog = ErrorDialogState::new();
        assert!(!dialog.is_open());

        dialog.show(&"first");
        dialog.show(&"second");
        assert!(dialog.is_open());
        assert_eq!(dialog.message.get_untracked(), Some("second".to_string()));

        dialog.close();
        assert!(!dialog.is_open());
    }
}
