//! Upload lifecycle.
//!
//! ```text
//!   Selecting ──begin_upload──▶ Processing ──Ok──▶ Results
//!       ▲                           │                 │
//!       └────────────Err────────────┘                 │
//!       └──────────────────reset──────────────────────┘
//! ```
//!
//! Only one upload can be in flight at a time.

use crate::{AppError, ProcessingResult, UploadResponse};

/// Where the user is in the select → upload → results flow.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Phase {
    /// Picking files; no session yet.
    #[default]
    Selecting,
    /// Upload request in flight.
    Processing,
    /// Backend answered; outputs can be downloaded.
    Results {
        session_id: String,
        results: Vec<ProcessingResult>,
    },
}

/// Application state shared by the main view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub phase: Phase,
    /// Message shown in the error banner
    pub error: Option<String>,
}

impl AppState {
    /// Enter [`Phase::Processing`].
    ///
    /// Returns `false` and changes nothing if an upload is already running.
    pub fn begin_upload(&mut self) -> bool {
        if self.is_processing() {
            return false;
        }
        self.phase = Phase::Processing;
        self.error = None;
        true
    }

    /// Apply the outcome of the upload request.
    pub fn finish_upload(&mut self, outcome: Result<UploadResponse, AppError>) {
        match outcome {
            Ok(response) => {
                self.phase = Phase::Results {
                    session_id: response.session_id,
                    results: response.processing_results,
                };
                self.error = None;
            }
            Err(err) => {
                self.phase = Phase::Selecting;
                self.error = Some(err.to_string());
            }
        }
    }

    /// Show an error without leaving the current phase.
    pub fn fail(&mut self, err: &AppError) {
        self.error = Some(err.to_string());
    }

    /// Go back to file selection.
    ///
    /// Returns the session that was active, so it can be released.
    pub fn reset(&mut self) -> Option<String> {
        let previous = std::mem::take(&mut self.phase);
        self.error = None;
        match previous {
            Phase::Results { session_id, .. } => Some(session_id),
            _ => None,
        }
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.phase, Phase::Processing)
    }

    pub fn session_id(&self) -> Option<&str> {
        match &self.phase {
            Phase::Results { session_id, .. } => Some(session_id),
            _ => None,
        }
    }

    pub fn results(&self) -> &[ProcessingResult] {
        match &self.phase {
            Phase::Results { results, .. } => results,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response() -> UploadResponse {
        UploadResponse {
            session_id: "session-1".to_string(),
            files_uploaded: 1,
            processing_results: vec![ProcessingResult::Success {
                original_file: "a.pdf".to_string(),
                output_file: "a_condensed.pdf".to_string(),
                order_number: Some("42".to_string()),
                customer_name: Some("Store".to_string()),
                item_count: 3,
            }],
        }
    }

    #[test]
    fn test_successful_upload_flow() {
        let mut state = AppState::default();
        assert_eq!(state.phase, Phase::Selecting);

        assert!(state.begin_upload());
        assert!(state.is_processing());
        assert_eq!(state.session_id(), None);

        state.finish_upload(Ok(response()));
        assert!(!state.is_processing());
        assert_eq!(state.session_id(), Some("session-1"));
        assert_eq!(state.results().len(), 1);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failed_upload_returns_to_selection() {
        let mut state = AppState::default();
        state.begin_upload();
        state.finish_upload(Err(AppError::Network("connection refused".into())));

        assert_eq!(state.phase, Phase::Selecting);
        assert_eq!(state.error(), Some("Network error: connection refused"));
    }

    #[test]
    fn test_single_upload_in_flight() {
        let mut state = AppState::default();
        assert!(state.begin_upload());
        assert!(!state.begin_upload());
        assert!(state.is_processing());
    }

    #[test]
    fn test_begin_upload_clears_previous_error() {
        let mut state = AppState::default();
        state.fail(&AppError::Network("offline".into()));
        state.begin_upload();
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_download_failure_keeps_results() {
        let mut state = AppState::default();
        state.begin_upload();
        state.finish_upload(Ok(response()));

        state.fail(&AppError::DownloadFailed { status: 404 });
        assert_eq!(state.error(), Some("Download failed"));
        assert_eq!(state.session_id(), Some("session-1"));
        assert_eq!(state.results().len(), 1);
    }

    #[test]
    fn test_reset_returns_session() {
        let mut state = AppState::default();
        state.begin_upload();
        state.finish_upload(Ok(response()));
        state.fail(&AppError::DownloadFailed { status: 500 });

        assert_eq!(state.reset(), Some("session-1".to_string()));
        assert_eq!(state, AppState::default());
        assert_eq!(state.reset(), None);
    }
}
