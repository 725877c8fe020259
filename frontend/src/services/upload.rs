//! HTTP service uploading PDF invoices to the backend.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::{api_base, error_detail, AppError, AppResult, UploadResponse, UPLOAD_FIELD};

/// `POST` endpoint receiving the multipart upload.
pub fn upload_url(api_url: &str) -> String {
    format!("{}/upload", api_base(api_url))
}

/// Upload every file in one multipart request and return the
/// per-file processing results.
pub async fn upload_invoices(files: &[File], api_url: &str) -> AppResult<UploadResponse> {
    let form_data =
        FormData::new().map_err(|e| AppError::browser("Failed to create FormData", e))?;

    for file in files {
        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(|e| AppError::browser("Failed to append file", e))?;
    }

    let url = upload_url(api_url);
    log::info!("📤 Uploading {} file(s) to {}", files.len(), url);

    let response = Request::post(&url).body(form_data)?.send().await?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        let err = AppError::upload_rejected(response.status(), &response.status_text(), error_detail(&body));
        log::error!("❌ {}", err);
        return Err(err);
    }

    let parsed = response.json::<UploadResponse>().await?;
    log::info!(
        "✅ Upload accepted: session {} ({} file(s))",
        parsed.session_id,
        parsed.files_uploaded
    );
    Ok(parsed)
}
