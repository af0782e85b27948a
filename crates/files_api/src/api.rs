//! Request dispatch: maps parsed HTTP requests to status codes and bodies.
//!
//! Everything here is pure with respect to the socket layer so endpoint behavior is testable
//! without binding a port.

use serde_json::json;

use crate::error::FilesApiError;
use crate::service::{ServedRoot, DEFAULT_LISTING_PATH};

/// A fully-rendered endpoint response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Content-Type header value.
    pub content_type: &'static str,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl ApiResponse {
    fn json(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type: "application/json",
            body,
        }
    }

    fn from_error(err: FilesApiError) -> Self {
        Self::json(err.status(), err.body())
    }

    fn not_found_route() -> Self {
        Self::json(404, json!({ "error": "Not found" }).to_string().into_bytes())
    }
}

/// Decodes a percent-encoded query component (`%XX` escapes and `+` as space).
///
/// Malformed escapes pass through literally rather than failing the request.
pub fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit() =>
            {
                let hex = [bytes[i + 1], bytes[i + 2]];
                let hex = std::str::from_utf8(&hex).unwrap_or("00");
                if let Ok(value) = u8::from_str_radix(hex, 16) {
                    out.push(value);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Splits a request target into its path and decoded query pairs.
pub fn split_target(target: &str) -> (&str, Vec<(String, String)>) {
    let (path, query) = match target.split_once('?') {
        Some((path, query)) => (path, query),
        None => (target, ""),
    };
    let params = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => (percent_decode(name), percent_decode(value)),
            None => (percent_decode(pair), String::new()),
        })
        .collect();
    (path, params)
}

fn query_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

fn handle_files(root: &ServedRoot, params: &[(String, String)]) -> ApiResponse {
    let path = match query_param(params, "path") {
        Some(path) if !path.is_empty() => path,
        _ => DEFAULT_LISTING_PATH,
    };
    match root.list_dir(path) {
        Ok(listing) => match serde_json::to_vec(&listing) {
            Ok(body) => ApiResponse::json(200, body),
            Err(err) => ApiResponse::from_error(FilesApiError::Internal(err.into())),
        },
        Err(err) => ApiResponse::from_error(err),
    }
}

fn handle_file_content(root: &ServedRoot, params: &[(String, String)]) -> ApiResponse {
    let Some(path) = query_param(params, "path") else {
        return ApiResponse::from_error(FilesApiError::MissingParameter);
    };
    match root.read_text(path) {
        Ok(content) => {
            ApiResponse::json(200, json!({ "content": content }).to_string().into_bytes())
        }
        Err(err) => ApiResponse::from_error(err),
    }
}

fn handle_static_asset(root: &ServedRoot, path: &str) -> ApiResponse {
    match root.read_bytes(path) {
        Ok((body, content_type)) => ApiResponse {
            status: 200,
            content_type,
            body,
        },
        Err(err) => ApiResponse::from_error(err),
    }
}

/// Dispatches one request. Only `GET` is accepted; everything outside the two API routes and the
/// served static-asset tree is a JSON 404.
pub fn handle_request(root: &ServedRoot, method: &str, target: &str) -> ApiResponse {
    if !method.eq_ignore_ascii_case("GET") {
        return ApiResponse::not_found_route();
    }

    let (path, params) = split_target(target);
    match path {
        "/api/files" => handle_files(root, &params),
        "/api/file-content" => handle_file_content(root, &params),
        _ => {
            let decoded = percent_decode(path);
            let asset_path = decoded.trim_start_matches('/');
            if asset_path.starts_with("files/") {
                handle_static_asset(root, asset_path)
            } else {
                ApiResponse::not_found_route()
            }
        }
    }
}
