//! Backend session housekeeping: health probe and session cleanup.

use gloo_net::http::Request;

use crate::{api_base, AppError, AppResult, CleanupResponse, HealthResponse};

pub fn health_url(api_url: &str) -> String {
    format!("{}/health", api_base(api_url))
}

pub fn cleanup_url(api_url: &str, session_id: &str) -> String {
    format!("{}/cleanup/{}", api_base(api_url), urlencoding::encode(session_id))
}

/// Probe `GET /health`.
pub async fn check_health(api_url: &str) -> AppResult<HealthResponse> {
    let response = Request::get(&health_url(api_url)).send().await?;
    if !response.ok() {
        return Err(AppError::Network(format!("health check returned HTTP {}", response.status())));
    }
    Ok(response.json::<HealthResponse>().await?)
}

/// Ask the backend to delete the files of a finished session.
pub async fn cleanup_session(api_url: &str, session_id: &str) -> AppResult<CleanupResponse> {
    let response = Request::delete(&cleanup_url(api_url, session_id)).send().await?;
    if !response.ok() {
        return Err(AppError::Network(format!("cleanup returned HTTP {}", response.status())));
    }
    let cleaned = response.json::<CleanupResponse>().await?;
    log::debug!("🧹 Session {} {}", cleaned.session_id, cleaned.status);
    Ok(cleaned)
}
