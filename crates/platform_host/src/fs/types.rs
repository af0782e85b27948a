//! File-browsing data types shared across host contracts and implementations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Directory entry kind as reported by the listing endpoint.
pub enum RemoteEntryKind {
    /// Regular file.
    File,
    /// Directory.
    Folder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One entry in a remote directory listing.
pub struct RemoteFileEntry {
    /// Stable id (the relative path).
    pub id: String,
    /// Base name of the entry.
    pub name: String,
    /// File or folder kind.
    #[serde(rename = "type")]
    pub kind: RemoteEntryKind,
    /// File size in bytes (files only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Last-modified time in unix milliseconds.
    #[serde(rename = "lastModified")]
    pub last_modified_unix_ms: u64,
    /// Path relative to the served root's parent (begins with the root prefix).
    pub path: String,
    /// Lowercased extension, when the name has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Directory flag, duplicated for listing consumers that sort on it.
    #[serde(rename = "isDirectory")]
    pub is_directory: bool,
}

impl RemoteFileEntry {
    /// Returns `true` for directory entries.
    pub fn is_dir(&self) -> bool {
        self.kind == RemoteEntryKind::Folder
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
/// Response payload of the directory-listing endpoint.
pub struct FileListing {
    /// Entries sorted directories-first, then alphabetically within each group.
    pub files: Vec<RemoteFileEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How the explorer previews a file, decided from its extension.
pub enum PreviewKind {
    /// Fetch and render UTF-8 text content.
    Text,
    /// Point an image element at the static-asset URL.
    Image,
    /// No inline preview; offer only the download affordance.
    Download,
}

const TEXT_EXTENSIONS: [&str; 17] = [
    "txt", "md", "json", "js", "ts", "tsx", "jsx", "css", "html", "py", "java", "cpp", "c", "cs",
    "php", "rb", "go",
];
const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "svg", "webp", "bmp"];

/// Classifies an optional file extension into a preview mode.
pub fn preview_kind(extension: Option<&str>) -> PreviewKind {
    let Some(extension) = extension else {
        return PreviewKind::Download;
    };
    if TEXT_EXTENSIONS.contains(&extension) {
        PreviewKind::Text
    } else if IMAGE_EXTENSIONS.contains(&extension) {
        PreviewKind::Image
    } else {
        PreviewKind::Download
    }
}

/// Formats a byte count as a short human-readable size (B/KB/MB/GB).
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let exponent = (bytes as f64).log(1024.0).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{} {}", rounded as u64, UNITS[exponent])
    } else {
        format!("{:.1} {}", rounded, UNITS[exponent])
    }
}
