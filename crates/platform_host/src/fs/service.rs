//! File-browser service contract.

use std::{future::Future, pin::Pin};

use super::types::FileListing;

/// Object-safe boxed future used by [`FileBrowserService`] async methods.
pub type FileBrowserFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service behind the explorer panel: directory listings, text reads, and asset URLs.
///
/// Errors cross this boundary as display strings; the explorer absorbs them into inline
/// placeholders rather than surfacing failures.
pub trait FileBrowserService {
    /// Lists a directory relative to the served root.
    fn list_dir<'a>(&'a self, path: &'a str) -> FileBrowserFuture<'a, Result<FileListing, String>>;

    /// Reads UTF-8 text content of a file relative to the served root.
    fn read_text_file<'a>(&'a self, path: &'a str) -> FileBrowserFuture<'a, Result<String, String>>;

    /// Returns the static-asset URL for a served path (image previews and downloads).
    fn asset_url(&self, path: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op file-browser adapter for unsupported targets and baseline tests.
pub struct NoopFileBrowserService;

impl NoopFileBrowserService {
    fn unavailable(op: &str) -> String {
        format!("file browser unavailable: {op}")
    }
}

impl FileBrowserService for NoopFileBrowserService {
    fn list_dir<'a>(&'a self, _path: &'a str) -> FileBrowserFuture<'a, Result<FileListing, String>> {
        Box::pin(async { Err(Self::unavailable("list_dir")) })
    }

    fn read_text_file<'a>(
        &'a self,
        _path: &'a str,
    ) -> FileBrowserFuture<'a, Result<String, String>> {
        Box::pin(async { Err(Self::unavailable("read_text_file")) })
    }

    fn asset_url(&self, path: &str) -> String {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn noop_file_browser_reports_unavailable_operations() {
        let fs = NoopFileBrowserService;
        let fs_obj: &dyn FileBrowserService = &fs;

        let err = block_on(fs_obj.list_dir("files/portfolio")).expect_err("list should fail");
        assert!(err.contains("list_dir"));
        let err = block_on(fs_obj.read_text_file("files/portfolio/a.txt"))
            .expect_err("read should fail");
        assert!(err.contains("read_text_file"));
        assert_eq!(fs_obj.asset_url("files/portfolio/a.png"), "/files/portfolio/a.png");
    }
}
