//! Request-path helpers shared by the file-browser client and the serving endpoints.

/// Path segments of the browsing root. Navigation never ascends above this depth and the
/// endpoints reject any request path outside it.
pub const BROWSE_ROOT: [&str; 2] = ["files", "portfolio"];

/// Joins relative path segments with `/` separators.
pub fn join_path_segments(segments: &[String]) -> String {
    segments.join("/")
}

/// Returns whether a request path is allowed under the served root.
///
/// The check is deliberately literal: a path is rejected when it contains the `..` substring
/// anywhere or does not begin with `root_prefix`. Resolution against the real filesystem happens
/// after this gate, never instead of it.
pub fn is_request_path_allowed(path: &str, root_prefix: &str) -> bool {
    !path.contains("..") && path.starts_with(root_prefix)
}

/// Returns the lowercased extension of a file name, if any.
pub fn file_extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_path_gate_matches_expected_cases() {
        let cases = [
            ("files/portfolio", true),
            ("files/portfolio/projects", true),
            ("files/", true),
            ("../etc", false),
            ("files/portfolio/../../etc", false),
            ("files/portfolio/..hidden", false),
            ("public/files", false),
            ("", false),
        ];

        for (path, expected) in cases {
            assert_eq!(is_request_path_allowed(path, "files/"), expected, "path={path:?}");
        }
    }

    #[test]
    fn extension_is_lowercased_and_requires_a_stem() {
        assert_eq!(file_extension("readme.MD"), Some("md".to_string()));
        assert_eq!(file_extension("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(file_extension("Makefile"), None);
        assert_eq!(file_extension(".gitignore"), None);
        assert_eq!(file_extension("trailing."), None);
    }

    #[test]
    fn segments_join_into_a_relative_path() {
        let stack = vec!["files".to_string(), "portfolio".to_string(), "projects".to_string()];
        assert_eq!(join_path_segments(&stack), "files/portfolio/projects");
    }
}
