//! Read-only HTTP file endpoints backing the explorer panel.
//!
//! The crate is split so the interesting parts stay pure and testable: [`service::ServedRoot`]
//! resolves request paths against a scoped directory, [`api`] maps parsed requests to status
//! codes and JSON bodies, and [`http`] owns the socket loop that feeds them.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod error;
pub mod http;
pub mod service;

pub use api::{handle_request, ApiResponse};
pub use error::FilesApiError;
pub use http::{serve, HttpServerConfig};
pub use service::ServedRoot;
