//! Error types for the invoice processor frontend.
//!
//! - [`AppError`] - Unified error for backend calls and browser APIs
//!
//! Every error that reaches the UI is displayed verbatim in the
//! error banner, so the `Display` strings are user-facing.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Frontend application errors.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// The request could not be sent or no response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered the upload with a non-success status.
    #[error("Upload failed: {reason}")]
    UploadRejected { status: u16, reason: String },

    /// The backend answered the download with a non-success status.
    #[error("Download failed")]
    DownloadFailed { status: u16 },

    /// The response body did not match the expected record.
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    /// A browser API call failed (FormData, Blob, object URL, DOM).
    #[error("Browser error: {0}")]
    Browser(String),

    /// A download was requested before any upload completed.
    #[error("No active session")]
    NoSession,
}

impl AppError {
    /// Build an [`AppError::UploadRejected`] from the failed response.
    ///
    /// Prefers the backend's `detail` message, then the HTTP status
    /// text, then the bare status code.
    pub fn upload_rejected(status: u16, status_text: &str, detail: Option<String>) -> Self {
        let reason = match detail {
            Some(detail) => detail,
            None if !status_text.trim().is_empty() => status_text.trim().to_string(),
            None => format!("HTTP {}", status),
        };
        AppError::UploadRejected { status, reason }
    }

    /// Wrap a JavaScript exception raised by a Web API.
    pub fn browser(context: &str, err: JsValue) -> Self {
        let message = err
            .as_string()
            .unwrap_or_else(|| format!("{:?}", err));
        AppError::Browser(format!("{}: {}", context, message))
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AppError::Decode(e.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_rejected_prefers_detail() {
        let err = AppError::upload_rejected(400, "Bad Request", Some("File a.txt is not a PDF".into()));
        assert_eq!(err.to_string(), "Upload failed: File a.txt is not a PDF");
    }

    #[test]
    fn test_upload_rejected_falls_back_to_status_text() {
        let err = AppError::upload_rejected(500, "Internal Server Error", None);
        assert_eq!(err.to_string(), "Upload failed: Internal Server Error");
    }

    #[test]
    fn test_upload_rejected_without_status_text() {
        // HTTP/2 responses carry an empty status text
        let err = AppError::upload_rejected(502, "", None);
        assert_eq!(err.to_string(), "Upload failed: HTTP 502");
        assert_eq!(
            err,
            AppError::UploadRejected { status: 502, reason: "HTTP 502".into() }
        );
    }

    #[test]
    fn test_download_failed_message() {
        assert_eq!(AppError::DownloadFailed { status: 404 }.to_string(), "Download failed");
    }

    #[test]
    fn test_decode_error_from_gloo() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = gloo_net::Error::SerdeError(serde_err).into();
        assert!(matches!(err, AppError::Decode(_)));
    }
}
