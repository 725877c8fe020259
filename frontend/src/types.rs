//! Common types used across the frontend application.
//!
//! This module centralizes the records exchanged with the invoice
//! backend and the small display helpers built on top of them.
//!
//! # Categories
//!
//! - **API Types** - Backend request/response structures
//! - **Status Types** - Backend availability shown in the header
//! - **Display Helpers** - Summary and error message formatting

use serde::{Deserialize, Serialize};

use crate::AppResult;

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the backend upload endpoint (`POST /upload`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Opaque token scoping later downloads
    pub session_id: String,
    /// Number of files the backend stored
    pub files_uploaded: usize,
    /// One entry per uploaded file, in upload order
    pub processing_results: Vec<ProcessingResult>,
}

/// Outcome of converting one uploaded PDF.
///
/// The backend tags each record with a `status` field of
/// `"success"` or `"error"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProcessingResult {
    /// The invoice was parsed and a condensed PDF was generated.
    Success {
        /// Name of the uploaded file
        original_file: String,
        /// Name to request from `/download`
        output_file: String,
        /// Order number read from the invoice
        #[serde(default)]
        order_number: Option<String>,
        /// Customer name read from the invoice
        #[serde(default)]
        customer_name: Option<String>,
        /// Number of product lines
        #[serde(default)]
        item_count: usize,
    },
    /// The backend could not process this file.
    Error {
        /// Name of the uploaded file
        original_file: String,
        /// Message reported by the backend
        error: String,
    },
}

impl ProcessingResult {
    /// Name of the file as it was uploaded.
    pub fn original_file(&self) -> &str {
        match self {
            ProcessingResult::Success { original_file, .. }
            | ProcessingResult::Error { original_file, .. } => original_file,
        }
    }

    /// Downloadable output, if processing succeeded.
    pub fn output_file(&self) -> Option<&str> {
        match self {
            ProcessingResult::Success { output_file, .. } => Some(output_file),
            ProcessingResult::Error { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProcessingResult::Success { .. })
    }

    /// Metadata line for a success row, or the error message otherwise.
    pub fn details_line(&self) -> String {
        match self {
            ProcessingResult::Success {
                order_number,
                customer_name,
                item_count,
                ..
            } => format!(
                "Order #{} • {} • {} {}",
                order_number.as_deref().unwrap_or("?"),
                customer_name.as_deref().unwrap_or("Unknown customer"),
                item_count,
                plural(*item_count, "item"),
            ),
            ProcessingResult::Error { error, .. } => error.clone(),
        }
    }

    /// Get status icon for display.
    pub fn status_icon(&self) -> &'static str {
        if self.is_success() {
            "✓"
        } else {
            "✕"
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        if self.is_success() {
            "result-item success"
        } else {
            "result-item error"
        }
    }
}

/// Response from `GET /health`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when the service is up
    pub status: String,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Response from `DELETE /cleanup/{session_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CleanupResponse {
    pub status: String,
    pub session_id: String,
}

// =============================================================================
// Status Types
// =============================================================================

/// Backend availability, as last observed by the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApiStatus {
    /// No answer yet
    #[default]
    Checking,
    /// `/health` answered `ok`
    Online,
    /// `/health` failed or answered something else
    Offline,
}

impl ApiStatus {
    /// Status after a `/health` probe: online only on an `ok` answer.
    pub fn from_health(health: &AppResult<HealthResponse>) -> Self {
        match health {
            Ok(response) if response.is_ok() => ApiStatus::Online,
            _ => ApiStatus::Offline,
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ApiStatus::Checking => "api-status checking",
            ApiStatus::Online => "api-status online",
            ApiStatus::Offline => "api-status offline",
        }
    }

    /// Get badge text for display.
    pub fn label(&self) -> &'static str {
        match self {
            ApiStatus::Checking => "Connecting…",
            ApiStatus::Online => "Service online",
            ApiStatus::Offline => "Service unavailable",
        }
    }
}

// =============================================================================
// Display Helpers
// =============================================================================

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Summary shown above the result list,
/// e.g. `"2 files processed successfully, 1 error"`.
pub fn summary_line(results: &[ProcessingResult]) -> String {
    let successes = results.iter().filter(|r| r.is_success()).count();
    let errors = results.len() - successes;

    let mut line = format!(
        "{} {} processed successfully",
        successes,
        plural(successes, "file")
    );
    if errors > 0 {
        line.push_str(&format!(", {} {}", errors, plural(errors, "error")));
    }
    line
}

/// Extract the `detail` message from a JSON error body.
///
/// The backend reports failures as `{"detail": "..."}`. Validation
/// failures carry a list instead of a string and are ignored here.
pub fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?.as_str()?.trim();
    if detail.is_empty() {
        None
    } else {
        Some(detail.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(name: &str) -> ProcessingResult {
        ProcessingResult::Success {
            original_file: name.to_string(),
            output_file: name.replace(".pdf", "_condensed.pdf"),
            order_number: Some("123456".to_string()),
            customer_name: Some("Corner Store".to_string()),
            item_count: 12,
        }
    }

    fn failure(name: &str) -> ProcessingResult {
        ProcessingResult::Error {
            original_file: name.to_string(),
            error: "Could not find order number".to_string(),
        }
    }

    #[test]
    fn test_upload_response_deserialization() {
        let json = r#"{
            "session_id": "2f1c9a4e-5b7d-4e0a-9f1e-1a2b3c4d5e6f",
            "files_uploaded": 2,
            "processing_results": [
                {
                    "original_file": "invoice_a.pdf",
                    "output_file": "invoice_a_condensed.pdf",
                    "order_number": "8812345",
                    "customer_name": "Bar Centrale",
                    "item_count": 4,
                    "status": "success"
                },
                {
                    "original_file": "invoice_b.pdf",
                    "status": "error",
                    "error": "No products found"
                }
            ]
        }"#;

        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.files_uploaded, 2);
        assert_eq!(response.processing_results.len(), 2);

        let first = &response.processing_results[0];
        assert!(first.is_success());
        assert_eq!(first.original_file(), "invoice_a.pdf");
        assert_eq!(first.output_file(), Some("invoice_a_condensed.pdf"));
        assert_eq!(first.details_line(), "Order #8812345 • Bar Centrale • 4 items");

        let second = &response.processing_results[1];
        assert!(!second.is_success());
        assert_eq!(second.output_file(), None);
        assert_eq!(second.details_line(), "No products found");
    }

    #[test]
    fn test_success_with_missing_metadata() {
        let json = r#"{
            "original_file": "scan.pdf",
            "output_file": "scan_condensed.pdf",
            "order_number": null,
            "customer_name": null,
            "item_count": 1,
            "status": "success"
        }"#;

        let result: ProcessingResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.details_line(), "Order #? • Unknown customer • 1 item");
        assert_eq!(result.status_icon(), "✓");
        assert_eq!(result.css_class(), "result-item success");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"original_file": "a.pdf", "status": "pending"}"#;
        assert!(serde_json::from_str::<ProcessingResult>(json).is_err());
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(summary_line(&[]), "0 files processed successfully");
        assert_eq!(summary_line(&[success("a.pdf")]), "1 file processed successfully");
        assert_eq!(
            summary_line(&[success("a.pdf"), success("b.pdf"), failure("c.pdf")]),
            "2 files processed successfully, 1 error"
        );
        assert_eq!(
            summary_line(&[failure("a.pdf"), failure("b.pdf")]),
            "0 files processed successfully, 2 errors"
        );
    }

    #[test]
    fn test_error_detail() {
        assert_eq!(
            error_detail(r#"{"detail": "File notes.txt is not a PDF"}"#),
            Some("File notes.txt is not a PDF".to_string())
        );
        assert_eq!(error_detail(r#"{"detail": [{"loc": ["body"], "msg": "field required"}]}"#), None);
        assert_eq!(error_detail(r#"{"detail": "  "}"#), None);
        assert_eq!(error_detail("Internal Server Error"), None);
    }

    #[test]
    fn test_health_response() {
        let health: HealthResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(health.is_ok());
        assert_eq!(ApiStatus::default(), ApiStatus::Checking);
        assert_eq!(ApiStatus::Offline.css_class(), "api-status offline");
    }

    #[test]
    fn test_api_status_from_health() {
        let ok: HealthResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert_eq!(ApiStatus::from_health(&Ok(ok)), ApiStatus::Online);

        let degraded: HealthResponse = serde_json::from_str(r#"{"status": "degraded"}"#).unwrap();
        assert!(!degraded.is_ok());
        assert_eq!(ApiStatus::from_health(&Ok(degraded)), ApiStatus::Offline);

        let unreachable = Err(crate::AppError::Network("connection refused".into()));
        assert_eq!(ApiStatus::from_health(&unreachable), ApiStatus::Offline);
    }
}
