//! Root application module.
//!
//! Contains the main App component, the AdminContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::{ErrorDialog, ErrorDialogState, Sidebar};
use crate::core::{AdminApi, HttpAdminApi, Platform, i18n};
use crate::models::{AdminConfig, AdminPage, RecordInfo, RecordPathDetails, admin_path};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AdminContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read by child
/// components with `use_context::<AdminContext>()`.
///
/// This struct is `Copy` because all fields are signals, stored values,
/// or plain enums.
#[derive(Clone, Copy)]
pub struct AdminContext {
    /// Server-injected runtime config.
    pub config: StoredValue<AdminConfig>,
    /// Active UI language (a supported table name).
    pub lang: RwSignal<String>,
    /// Host platform, detected once at startup.
    pub platform: Platform,
    /// Shared error dialog.
    pub error_dialog: ErrorDialogState,
}

impl AdminContext {
    pub fn new(config: AdminConfig, platform: Platform) -> Self {
        let lang = i18n::normalize_language(&config.lang).to_string();
        Self {
            config: StoredValue::new(config),
            lang: RwSignal::new(lang),
            platform,
            error_dialog: ErrorDialogState::new(),
        }
    }

    /// Translate `key` into the active language.
    ///
    /// Tracks the language signal when called inside a reactive scope.
    pub fn trans(&self, key: &str) -> String {
        self.lang.with(|lang| i18n::trans(lang, key))
    }

    /// URL of an admin page for `record`.
    pub fn admin_path(&self, page: AdminPage, record: &RecordPathDetails) -> String {
        self.config.with_value(|c| admin_path(&c.admin_root, page, record))
    }

    /// Admin API client for the current config.
    pub fn api(&self) -> HttpAdminApi {
        HttpAdminApi::new(self.config.get_value())
    }
}

/// Load state of the current record's capability flags.
#[derive(Clone, Debug, PartialEq)]
enum RecordInfoState {
    Loading,
    Loaded(RecordInfo),
    Failed(String),
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AdminContext
/// - Reads the current record from the page URL and loads its info
/// - Renders the sidebar and the shared error dialog
#[component]
pub fn App() -> impl IntoView {
    let ctx = AdminContext::new(AdminConfig::load(), Platform::current());
    provide_context(ctx);

    let requested = RecordPathDetails::from_query(&dom::location_search());
    let state = RwSignal::new(RecordInfoState::Loading);

    let api = ctx.api();
    let record = Signal::stored(requested.clone());
    spawn_local(async move {
        match api.record_info(&requested).await {
            Ok(info) => state.set(RecordInfoState::Loaded(info)),
            Err(e) => {
                ctx.error_dialog.show(&e);
                state.set(RecordInfoState::Failed(e.to_string()));
            }
        }
    });

    let record_info = Signal::derive(move || match state.get() {
        RecordInfoState::Loaded(info) => info,
        _ => RecordInfo::default(),
    });
    let is_loaded = move || matches!(state.get(), RecordInfoState::Loaded(_));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::error>
                    <p>"Something went wrong"</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <Show
                when=is_loaded
                fallback=move || match state.get() {
                    RecordInfoState::Failed(msg) => {
                        view! { <p class=css::error>{msg}</p> }.into_any()
                    }
                    _ => view! { <p class=css::status>{ctx.trans("LOADING")}</p> }.into_any(),
                }
            >
                <Sidebar record=record record_info=record_info />
            </Show>
            <ErrorDialog />
        </ErrorBoundary>
    }
}
