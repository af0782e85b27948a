//! Scoped read-only filesystem service behind the file endpoints.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use platform_host::{
    file_extension, is_request_path_allowed, FileListing, RemoteEntryKind, RemoteFileEntry,
};

use crate::error::{FilesApiError, DIRECTORY_NOT_FOUND, FILE_NOT_FOUND};

/// Request-path prefix every served path must begin with.
pub const ROOT_PREFIX: &str = "files/";
/// Listing path used when the client omits the `path` parameter.
pub const DEFAULT_LISTING_PATH: &str = "files/portfolio";

fn modified_unix_ms(metadata: &fs::Metadata) -> u64 {
    metadata
        .modified()
        .ok()
        .and_then(|value| value.duration_since(UNIX_EPOCH).ok())
        .map(|value| value.as_millis() as u64)
        .unwrap_or_default()
}

fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone)]
/// Read-only file service rooted at the hosting process's public directory.
///
/// Request paths are virtual, `/`-separated, and must pass the literal containment gate
/// ([`is_request_path_allowed`]) before they are resolved against the disk root. The service
/// never writes, and it never follows a request outside `public_dir`.
pub struct ServedRoot {
    public_dir: PathBuf,
}

impl ServedRoot {
    /// Creates a service serving `public_dir` (the directory the `files/` prefix resolves in).
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
        }
    }

    /// Directory the service resolves request paths against.
    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    fn resolve(&self, request_path: &str) -> Result<PathBuf, FilesApiError> {
        if !is_request_path_allowed(request_path, ROOT_PREFIX) {
            return Err(FilesApiError::AccessDenied);
        }
        let mut native = self.public_dir.clone();
        for segment in request_path.split('/').filter(|s| !s.is_empty()) {
            native.push(segment);
        }
        Ok(native)
    }

    /// Lists a directory under the served root, sorted directories-first then alphabetically
    /// (case-insensitive) within each group.
    pub fn list_dir(&self, request_path: &str) -> Result<FileListing, FilesApiError> {
        let native = self.resolve(request_path)?;
        let read_dir =
            fs::read_dir(&native).map_err(|_| FilesApiError::NotFound(DIRECTORY_NOT_FOUND))?;

        let mut files = Vec::new();
        for entry in read_dir {
            let entry = entry?;
            let metadata = entry.metadata()?;
            let name = entry.file_name().to_string_lossy().to_string();
            let child_path = format!("{request_path}/{name}");
            let is_directory = metadata.is_dir();
            files.push(RemoteFileEntry {
                id: child_path.clone(),
                name: name.clone(),
                kind: if is_directory {
                    RemoteEntryKind::Folder
                } else {
                    RemoteEntryKind::File
                },
                size: metadata.is_file().then(|| metadata.len()),
                last_modified_unix_ms: modified_unix_ms(&metadata),
                path: child_path,
                extension: if is_directory { None } else { file_extension(&name) },
                is_directory,
            });
        }

        files.sort_by(|left, right| match (left.is_directory, right.is_directory) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => left
                .name
                .to_lowercase()
                .cmp(&right.name.to_lowercase())
                .then_with(|| left.name.cmp(&right.name)),
        });

        Ok(FileListing { files })
    }

    /// Reads UTF-8 text content of a file under the served root.
    pub fn read_text(&self, request_path: &str) -> Result<String, FilesApiError> {
        let native = self.resolve(request_path)?;
        fs::read_to_string(&native).map_err(|_| FilesApiError::NotFound(FILE_NOT_FOUND))
    }

    /// Reads raw bytes of a file under the served root, for static-asset delivery.
    ///
    /// Returns the content alongside a content type derived from the extension.
    pub fn read_bytes(&self, request_path: &str) -> Result<(Vec<u8>, &'static str), FilesApiError> {
        let native = self.resolve(request_path)?;
        let metadata =
            fs::metadata(&native).map_err(|_| FilesApiError::NotFound(FILE_NOT_FOUND))?;
        if !metadata.is_file() {
            return Err(FilesApiError::NotFound(FILE_NOT_FOUND));
        }
        let bytes = fs::read(&native).map_err(|_| FilesApiError::NotFound(FILE_NOT_FOUND))?;
        let name = native.file_name().map(|n| n.to_string_lossy().to_string());
        let extension = name.as_deref().and_then(file_extension);
        Ok((bytes, content_type_for(extension.as_deref())))
    }
}
