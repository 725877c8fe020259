//! PDF selection component with drag & drop support.
//!
//! Handles file selection, removal before submission and the upload
//! request itself.

use leptos::*;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

use crate::services::upload_invoices;
use crate::{format_megabytes, AppState, FileSelection, PickedFile, API_URL};

#[component]
pub fn FileUpload(
    state: ReadSignal<AppState>,
    set_state: WriteSignal<AppState>,
) -> impl IntoView {
    let (drag_active, set_drag_active) = create_signal(false);
    let (selection, set_selection) = create_signal(FileSelection::<File>::new());
    let file_input = create_node_ref::<html::Input>();

    let is_processing = move || state.with(|s| s.is_processing());

    let offer_files = move |list: Option<FileList>| {
        let Some(list) = list else { return };
        let files: Vec<File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
        let offered = files.len();

        set_selection.update(|sel| {
            let accepted = sel.offer(files);
            if accepted < offered {
                log::warn!("Ignored {} non-PDF file(s)", offered - accepted);
            }
            log::debug!("{} file(s) selected", sel.len());
        });
    };

    // dragenter and dragover both keep the zone highlighted
    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);
        offer_files(ev.data_transfer().and_then(|dt| dt.files()));
    };

    let on_zone_click = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        offer_files(input.files());
        // Allow picking the same file again after removing it
        input.set_value("");
    };

    let on_submit = move |_| {
        if selection.with(|sel| sel.is_empty()) {
            return;
        }

        let mut started = false;
        set_state.update(|s| started = s.begin_upload());
        if !started {
            log::warn!("An upload is already in progress");
            return;
        }

        let mut files = Vec::new();
        set_selection.update(|sel| files = sel.take());

        spawn_local(async move {
            let outcome = upload_invoices(&files, API_URL).await;
            if let Err(e) = &outcome {
                log::error!("❌ Upload failed: {}", e);
            }
            set_state.update(|s| s.finish_upload(outcome));
        });
    };

    view! {
        <div class="file-upload">
            <input
                type="file"
                multiple=true
                accept=".pdf"
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />
            <div
                class="drop-zone"
                class:active=move || drag_active.get()
                on:dragenter=on_drag_over
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
                on:click=on_zone_click
            >
                <div class="drop-zone-content">
                    <div class="upload-icon">"📄"</div>
                    <h2>
                        {move || if is_processing() {
                            "⏳ Uploading and processing..."
                        } else {
                            "Drop PDF files here"
                        }}
                    </h2>
                    <Show
                        when=move || !is_processing()
                        fallback=|| view! { }
                    >
                        <p>"or click to select files"</p>
                        <p class="file-types">"Supported: PDF"</p>
                    </Show>
                </div>
            </div>

            <Show
                when=move || !selection.with(|sel| sel.is_empty())
                fallback=|| view! { }
            >
                <div class="file-list">
                    <h3>"Selected Files (" {move || selection.with(|sel| sel.len())} ")"</h3>
                    <ul>
                        <For
                            each=move || selection.with(|sel| {
                                let generation = sel.generation();
                                sel.iter()
                                    .cloned()
                                    .enumerate()
                                    .map(|(idx, file)| (generation, idx, file))
                                    .collect::<Vec<_>>()
                            })
                            key=|(generation, idx, _)| (*generation, *idx)
                            children=move |(_, idx, file)| {
                                view! {
                                    <li>
                                        <span class="file-name">{file.file_name()}</span>
                                        <span class="file-size">{format_megabytes(file.size_bytes())}</span>
                                        <button
                                            class="remove-btn"
                                            on:click=move |_| set_selection.update(|sel| {
                                                sel.remove(idx);
                                            })
                                            disabled=is_processing
                                        >
                                            "✕"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <button
                        class="submit-button"
                        on:click=on_submit
                        disabled=is_processing
                    >
                        {move || if is_processing() { "Processing..." } else { "Process Files" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
