//! Link revealing a record in the host file manager.

use leptos::{ev, prelude::*};
use wasm_bindgen_futures::spawn_local;

use crate::app::AdminContext;
use crate::components::error_dialog::ErrorDialogState;
use crate::core::{BrowseFeedback, FetchError, open_in_file_browser, report_outcome};
use crate::models::{RecordPathDetails, browse_button_title_key};
use crate::utils::dom;

/// Reports browse outcomes with a native alert and the shared error dialog.
struct DialogFeedback {
    dialog: ErrorDialogState,
}

impl BrowseFeedback for DialogFeedback {
    fn alert(&self, message: &str) {
        dom::alert(message);
    }

    fn show_error(&self, error: &FetchError) {
        self.dialog.show(error);
    }
}

/// Platform-specific label of the browse link.
pub fn browse_button_title(ctx: &AdminContext) -> String {
    ctx.trans(browse_button_title_key(ctx.platform))
}

/// Anchor that asks the server to open the record's file.
///
/// Every click sends its own request; responses are handled in whatever
/// order they arrive.
#[component]
pub fn BrowseFsLink(
    #[prop(into)] record: Signal<RecordPathDetails>,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext must be provided");

    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();

        let record = record.get_untracked();
        let api = ctx.api();
        let lang = ctx.lang.get_untracked();
        let feedback = DialogFeedback {
            dialog: ctx.error_dialog,
        };

        spawn_local(async move {
            let outcome = open_in_file_browser(&api, &record).await;
            report_outcome(&outcome, &lang, &feedback);
        });
    };

    view! {
        <a href="#" title=move || browse_button_title(&ctx) on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BrowseOutcome;

    #[test]
    fn test_request_failure_opens_error_dialog() {
        let dialog = ErrorDialogState::new();
        let feedback = DialogFeedback { dialog };

        report_outcome(
            &BrowseOutcome::Failed(FetchError::HttpError(500)),
            "en",
            &feedback,
        );

        assert!(dialog.is_open());
        assert_eq!(
            dialog.message.get_untracked(),
            Some("HTTP error: 500".to_string())
        );
    }

    #[test]
    fn test_success_leaves_error_dialog_closed() {
        let dialog = ErrorDialogState::new();
        report_outcome(&BrowseOutcome::Opened, "en", &DialogFeedback { dialog });
        assert!(!dialog.is_open());
    }
}
