//! Path normalization utilities
//!
//! Ensures paths embedded in links use '/' as separator, are relative to the
//! indexed root, and are percent-encoded.

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Check if a path is hidden (starts with '.')
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.as_encoded_bytes().first() == Some(&b'.'))
        .unwrap_or(false)
}

/// Display name of a path: its final component, or empty for a filesystem root
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Percent-encode a relative path for use in a URL, keeping '/' separators
pub fn encode_url_path(path: &str) -> String {
    path.replace('\\', "/")
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("icons/logo.png");
        assert_eq!(normalize_path(path), "icons/logo.png");
    }

    #[test]
    fn test_normalize_path_backslashes() {
        let path = Path::new("icons\\brand\\logo.png");
        assert_eq!(normalize_path(path), "icons/brand/logo.png");
    }

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(Path::new(".git")));
        assert!(is_hidden(Path::new(".DS_Store")));
        assert!(!is_hidden(Path::new("icons")));
        assert!(!is_hidden(Path::new("logo.png")));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_hidden_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        assert!(is_hidden(Path::new(OsStr::from_bytes(b".cache\xff"))));
        assert!(!is_hidden(Path::new(OsStr::from_bytes(b"cache\xff"))));
    }

    #[test]
    fn test_is_hidden_empty_filename() {
        assert!(!is_hidden(Path::new("/")));
    }

    #[test]
    fn test_make_relative() {
        let root = Path::new("/assets");
        let path = Path::new("/assets/icons/logo.png");
        assert_eq!(make_relative(path, root), Some("icons/logo.png".to_string()));
    }

    #[test]
    fn test_make_relative_not_under_root() {
        let root = Path::new("/assets");
        let path = Path::new("/other/logo.png");
        assert_eq!(make_relative(path, root), None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/assets/icons")), "icons");
        assert_eq!(display_name(Path::new("/")), "");
    }

    #[test]
    fn test_encode_url_path_keeps_slashes() {
        assert_eq!(
            encode_url_path("brand kit/dark mode/logo (1).png"),
            "brand%20kit/dark%20mode/logo%20%281%29.png"
        );
    }

    #[test]
    fn test_encode_url_path_unreserved_untouched() {
        assert_eq!(encode_url_path("a-b_c.d~e/F9"), "a-b_c.d~e/F9");
    }

    #[test]
    fn test_encode_url_path_backslashes_and_unicode() {
        assert_eq!(encode_url_path("logos\\café.svg"), "logos/caf%C3%A9.svg");
    }

    #[test]
    fn test_encode_url_path_reserved_characters() {
        assert_eq!(encode_url_path("a#b?c&d.png"), "a%23b%3Fc%26d.png");
    }
}
