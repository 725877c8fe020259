//! Footer component

use chrono::Datelike;
use leptos::*;

use crate::APP_TITLE;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="app-footer">
            <p>"© " {year} " " {APP_TITLE} " • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></p>
        </footer>
    }
}
