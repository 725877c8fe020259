//! Application configuration.
//!
//! Centralized configuration for the invoice processor frontend.
//! The backend URL can be overridden at build time with the
//! `INVOICE_API_URL` environment variable, e.g.
//! `INVOICE_API_URL=https://invoices.example.com trunk build --release`.

/// Backend URL used when `INVOICE_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Backend API base URL.
///
/// The invoice processing service exposing `/upload`, `/download`,
/// `/health` and `/cleanup`.
pub const API_URL: &str = match option_env!("INVOICE_API_URL") {
    Some(url) => url,
    None => DEFAULT_API_URL,
};

/// The only MIME type accepted by the selection surface.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Multipart field name, repeated once per uploaded file.
pub const UPLOAD_FIELD: &str = "files";

/// Delay between two backend health checks (in milliseconds).
pub const HEALTH_POLL_INTERVAL_MS: u32 = 30_000;

/// Application title, shown in the header and the browser tab.
pub const APP_TITLE: &str = "LCBO Invoice Processor";

/// Subtitle under the header title.
pub const APP_TAGLINE: &str = "Upload PDF invoices to process and download condensed versions";

/// Strip a trailing slash so paths can be appended with `format!("{}/...")`.
pub fn api_base(url: &str) -> &str {
    url.trim_end_matches('/')
}
