//! Header with title and backend status badge.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::services::check_health;
use crate::{ApiStatus, API_URL, APP_TAGLINE, APP_TITLE, HEALTH_POLL_INTERVAL_MS};

#[component]
pub fn Header() -> impl IntoView {
    let (api_status, set_api_status) = create_signal(ApiStatus::Checking);

    // Poll /health for as long as the header is mounted
    spawn_local(async move {
        loop {
            let health = check_health(API_URL).await;
            match &health {
                Ok(response) if !response.is_ok() => {
                    log::warn!("Backend reported status {:?}", response.status);
                }
                Err(e) => log::warn!("Backend health check failed: {}", e),
                _ => {}
            }
            let status = ApiStatus::from_health(&health);

            if api_status.try_get_untracked() != Some(status) {
                log::info!("🔌 Backend {}", status.label());
            }
            if set_api_status.try_set(status).is_some() {
                break;
            }

            TimeoutFuture::new(HEALTH_POLL_INTERVAL_MS).await;
        }
    });

    view! {
        <header class="app-header">
            <div class="header-left">
                <h1>{APP_TITLE}</h1>
                <p>{APP_TAGLINE}</p>
            </div>
            <div class="header-right">
                <span class=move || api_status.get().css_class()>
                    <span class="status-dot"></span>
                    {move || api_status.get().label()}
                </span>
            </div>
        </header>
    }
}
