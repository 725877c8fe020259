//! Invoice Processor - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading PDF invoices to the invoice
//! processing service and downloading the condensed versions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (title, backend status)                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Error banner                                            │
//! │  ├── FileUpload (no session yet)                             │
//! │  └── ProcessingResults + reset (session active)              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Backend records and display helpers
//! - [`error`] - Frontend error type
//! - [`selection`] - PDF filtering and the pending file list
//! - [`state`] - Upload lifecycle
//! - [`components`] - UI components (Header, FileUpload, ProcessingResults, Footer)
//! - [`services`] - Backend communication (upload, download, session)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod types;
pub mod selection;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Errors
pub use error::{AppError, AppResult};

// Types
pub use types::{
    // API
    UploadResponse, ProcessingResult, HealthResponse, CleanupResponse,
    // Status
    ApiStatus,
    // Display
    summary_line, error_detail,
};

// Selection and state
pub use selection::{format_megabytes, is_pdf, FileSelection, PickedFile};
pub use state::{AppState, Phase};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <Routes>
                <Route path="/" view=MainContent/>
            </Routes>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application
    let (state, set_state) = create_signal(AppState::default());

    // Back to selection; the previous session's files are released in the background
    let on_reset = move |_| {
        let mut previous = None;
        set_state.update(|s| previous = s.reset());

        if let Some(session_id) = previous {
            log::info!("🔄 Starting over, releasing session {}", session_id);
            spawn_local(async move {
                if let Err(e) = cleanup_session(API_URL, &session_id).await {
                    log::warn!("Could not clean up session {}: {}", session_id, e);
                }
            });
        }
    };

    view! {
        <div class="app">
            <Header/>

            <main class="app-main">
                <Show
                    when=move || state.with(|s| s.error().is_some())
                    fallback=|| view! { }
                >
                    <div class="error-message">
                        {move || state.with(|s| s.error().unwrap_or_default().to_string())}
                    </div>
                </Show>

                // Selection until the backend hands out a session
                <Show
                    when=move || state.with(|s| s.session_id().is_none())
                    fallback=move || view! {
                        <ProcessingResults state=state set_state=set_state/>
                        <button class="reset-button" on:click=on_reset>
                            "Process More Files"
                        </button>
                    }
                >
                    <FileUpload state=state set_state=set_state/>
                </Show>
            </main>

            <Footer/>
        </div>
    }
}
