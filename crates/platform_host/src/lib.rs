//! Typed host-domain contracts and shared models used across runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the file-browsing
//! models and service trait, the audio-port contract, and time helpers, while concrete browser
//! adapters live in `platform_host_web` and the native file endpoints live in `files_api`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod audio;
pub mod fs;
pub mod time;

pub use audio::{AudioPort, NoopAudioPort, SoundEffect, ToneStep, Waveform};
pub use fs::path::{file_extension, is_request_path_allowed, join_path_segments, BROWSE_ROOT};
pub use fs::service::{FileBrowserFuture, FileBrowserService, NoopFileBrowserService};
pub use fs::types::{
    format_file_size, preview_kind, FileListing, PreviewKind, RemoteEntryKind, RemoteFileEntry,
};
pub use time::unix_time_ms_now;
