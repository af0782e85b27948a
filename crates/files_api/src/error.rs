//! Endpoint error taxonomy and its HTTP mapping.

use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures produced while answering a file endpoint request.
///
/// Every variant is caught at the endpoint boundary and rendered as an HTTP status with a JSON
/// `{"error": message}` body; nothing propagates far enough to take the process down.
pub enum FilesApiError {
    /// The request omitted a required query parameter.
    #[error("File path is required")]
    MissingParameter,
    /// The request path escapes the served root.
    #[error("Access denied")]
    AccessDenied,
    /// The resolved path does not exist or cannot be read.
    #[error("{0}")]
    NotFound(&'static str),
    /// Unexpected I/O failure.
    #[error("Internal server error")]
    Internal(#[from] std::io::Error),
}

impl FilesApiError {
    /// HTTP status code for this failure.
    pub fn status(&self) -> u16 {
        match self {
            Self::MissingParameter => 400,
            Self::AccessDenied => 403,
            Self::NotFound(_) => 404,
            Self::Internal(_) => 500,
        }
    }

    /// JSON error body rendered to the client.
    pub fn body(&self) -> Vec<u8> {
        json!({ "error": self.to_string() }).to_string().into_bytes()
    }
}

/// Not-found message used by the listing endpoint.
pub const DIRECTORY_NOT_FOUND: &str = "Directory not found";
/// Not-found message used by the content endpoint.
pub const FILE_NOT_FOUND: &str = "File not found or cannot be read";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_statuses_match_the_taxonomy() {
        assert_eq!(FilesApiError::MissingParameter.status(), 400);
        assert_eq!(FilesApiError::AccessDenied.status(), 403);
        assert_eq!(FilesApiError::NotFound(DIRECTORY_NOT_FOUND).status(), 404);
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(FilesApiError::Internal(io).status(), 500);
    }

    #[test]
    fn error_bodies_are_json_objects_with_a_message() {
        let body = FilesApiError::AccessDenied.body();
        let value: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(value["error"], "Access denied");
    }
}
