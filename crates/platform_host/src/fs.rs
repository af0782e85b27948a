//! File-browsing contracts shared between the browser client and the native endpoints.

pub mod path;
pub mod service;
pub mod types;
