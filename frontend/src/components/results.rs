//! Per-file processing results with download actions.

use leptos::*;

use crate::services::download_output;
use crate::{summary_line, AppError, AppState, API_URL};

#[component]
pub fn ProcessingResults(
    state: ReadSignal<AppState>,
    set_state: WriteSignal<AppState>,
) -> impl IntoView {
    let on_download = move |filename: String| {
        let session_id = state.with_untracked(|s| {
            s.session_id()
                .map(str::to_string)
                .ok_or(AppError::NoSession)
        });
        let session_id = match session_id {
            Ok(id) => id,
            Err(e) => {
                log::debug!("Ignoring download of {}: {}", filename, e);
                return;
            }
        };

        spawn_local(async move {
            if let Err(e) = download_output(API_URL, &session_id, &filename).await {
                log::error!("❌ {}: {}", filename, e);
                set_state.update(|s| s.fail(&e));
            }
        });
    };

    view! {
        <div class="processing-results">
            <div class="results-summary">
                <h2>"Processing Complete"</h2>
                <p>{move || state.with(|s| summary_line(s.results()))}</p>
            </div>

            <div class="results-list">
                <For
                    each=move || state.with(|s| s.results().to_vec()).into_iter().enumerate()
                    key=|(idx, _)| *idx
                    children=move |(_, result)| {
                        let details_class = if result.is_success() { "result-details" } else { "result-error" };
                        let download = result.output_file().map(|output| {
                            let output = output.to_string();
                            view! {
                                <button
                                    class="download-btn"
                                    on:click=move |_| on_download(output.clone())
                                >
                                    "⬇ Download"
                                </button>
                            }
                        });

                        view! {
                            <div class=result.css_class()>
                                <div class="result-header">
                                    <span class="result-status-icon">{result.status_icon()}</span>
                                    <div class="result-info">
                                        <h3>{result.original_file().to_string()}</h3>
                                        <p class=details_class>{result.details_line()}</p>
                                    </div>
                                </div>
                                {download}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
