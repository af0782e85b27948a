//! Fetch-backed file-browser client for the two read-only endpoints.

use platform_host::{FileBrowserFuture, FileBrowserService, FileListing};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Deserialize)]
struct FileContentBody {
    content: String,
}

async fn fetch_text(url: String) -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|_| "network error".to_string())?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "invalid fetch response".to_string())?;
    if !response.ok() {
        return Err(format!("request failed with status {}", response.status()));
    }
    let body = response.text().map_err(|_| "body read failed".to_string())?;
    let body = JsFuture::from(body)
        .await
        .map_err(|_| "body read failed".to_string())?;
    body.as_string().ok_or_else(|| "body is not text".to_string())
}

fn encode_path(path: &str) -> String {
    js_sys::encode_uri_component(path).into()
}

#[derive(Debug, Clone, Copy, Default)]
/// File-browser service backed by the hosting process's `/api` endpoints.
pub struct HttpFileBrowserService;

impl FileBrowserService for HttpFileBrowserService {
    fn list_dir<'a>(&'a self, path: &'a str) -> FileBrowserFuture<'a, Result<FileListing, String>> {
        Box::pin(async move {
            let url = format!("/api/files?path={}", encode_path(path));
            let body = fetch_text(url).await?;
            serde_json::from_str(&body).map_err(|err| format!("invalid listing payload: {err}"))
        })
    }

    fn read_text_file<'a>(&'a self, path: &'a str) -> FileBrowserFuture<'a, Result<String, String>> {
        Box::pin(async move {
            let url = format!("/api/file-content?path={}", encode_path(path));
            let body = fetch_text(url).await?;
            let parsed: FileContentBody = serde_json::from_str(&body)
                .map_err(|err| format!("invalid content payload: {err}"))?;
            Ok(parsed.content)
        })
    }

    fn asset_url(&self, path: &str) -> String {
        format!("/{path}")
    }
}
