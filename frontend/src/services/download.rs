//! Download of processed PDFs.
//!
//! The file is fetched into memory, wrapped in a `Blob` and saved
//! through a temporary `<a download>` element, so the saved file keeps
//! its backend name even across origins.

use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::{api_base, AppError, AppResult, PDF_MIME_TYPE};

/// Build `{api}/download/{session_id}/{filename}` with both path
/// segments percent-encoded.
pub fn download_url(api_url: &str, session_id: &str, filename: &str) -> String {
    format!(
        "{}/download/{}/{}",
        api_base(api_url),
        urlencoding::encode(session_id),
        urlencoding::encode(filename)
    )
}

/// Fetch one processed file and hand it to the browser as a download.
pub async fn download_output(api_url: &str, session_id: &str, filename: &str) -> AppResult<()> {
    let url = download_url(api_url, session_id, filename);
    log::info!("📥 Downloading {}", filename);

    let response = Request::get(&url).send().await?;
    if !response.ok() {
        log::error!("❌ Download of {} failed with HTTP {}", filename, response.status());
        return Err(AppError::DownloadFailed { status: response.status() });
    }

    let bytes = response.binary().await?;
    save_bytes(&bytes, filename)?;

    log::info!("✅ Saved {} ({} bytes)", filename, bytes.len());
    Ok(())
}

/// Trigger a browser download of `bytes` under `filename`.
fn save_bytes(bytes: &[u8], filename: &str) -> AppResult<()> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(PDF_MIME_TYPE);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| AppError::browser("Failed to create Blob", e))?;
    let object_url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| AppError::browser("Failed to create object URL", e))?;

    let anchor = gloo_utils::document()
        .create_element("a")
        .map_err(|e| AppError::browser("Failed to create link", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| AppError::Browser("Created element is not a link".to_string()))?;
    anchor.set_href(&object_url);
    anchor.set_download(filename);

    let body = gloo_utils::body();
    let clicked = body
        .append_child(&anchor)
        .map(|_| anchor.click())
        .map_err(|e| AppError::browser("Failed to attach link", e));

    // Release the blob even if attaching failed
    if let Err(e) = Url::revoke_object_url(&object_url) {
        log::debug!("Could not revoke object URL for {}: {:?}", filename, e);
    }
    anchor.remove();

    clicked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_url() {
        assert_eq!(
            download_url("http://localhost:8000", "abc-123", "invoice_condensed.pdf"),
            "http://localhost:8000/download/abc-123/invoice_condensed.pdf"
        );
    }

    #[test]
    fn test_download_url_encodes_segments() {
        assert_eq!(
            download_url("http://localhost:8000/", "abc", "March invoice #2_condensed.pdf"),
            "http://localhost:8000/download/abc/March%20invoice%20%232_condensed.pdf"
        );
        assert_eq!(
            download_url("http://localhost:8000", "a/b", "../x.pdf"),
            "http://localhost:8000/download/a%2Fb/..%2Fx.pdf"
        );
    }
}
