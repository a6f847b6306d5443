//! Directory listing
//!
//! Uses walkdir to read the immediate children of one directory and split them
//! into visible subfolders and displayable images.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::core::error::{IndexError, IndexResult};
use crate::core::paths::{display_name, is_hidden};
use crate::core::util::get_file_size;

/// File extensions (lowercase) rendered as images
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg"];

/// An image file in a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub path: PathBuf,
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

/// Classified children of a single directory, each group sorted by name
#[derive(Debug, Default)]
pub struct DirListing {
    pub folders: Vec<PathBuf>,
    pub images: Vec<ImageEntry>,
}

/// Check whether a file name has one of the image extensions (case-insensitive)
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Case-insensitive ordering key, ties broken by the exact name
fn sort_key(name: &str) -> (String, String) {
    (name.to_lowercase(), name.to_string())
}

/// List the visible subfolders and images directly inside `dir`.
///
/// Symlinked directories are neither listed nor descended into. Symlinked
/// image files are listed with their target's size.
pub fn list_dir(dir: &Path) -> IndexResult<DirListing> {
    let mut folders = Vec::new();
    let mut images = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    for entry in walker {
        let entry = entry.map_err(|e| IndexError::ReadDir {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        let path = entry.path();

        if is_hidden(path) {
            continue;
        }

        let file_type = entry.file_type();
        if file_type.is_dir() {
            folders.push(path.to_path_buf());
        } else if path.is_file() && is_image_file(path) {
            let size = get_file_size(path).map_err(|source| IndexError::Metadata {
                path: path.to_path_buf(),
                source,
            })?;
            images.push(ImageEntry {
                path: path.to_path_buf(),
                name: display_name(path),
                size,
            });
        }
    }

    folders.sort_by_cached_key(|p| sort_key(&display_name(p)));
    images.sort_by_cached_key(|img| sort_key(&img.name));

    tracing::debug!(
        dir = %dir.display(),
        folders = folders.len(),
        images = images.len(),
        "listed directory"
    );

    Ok(DirListing { folders, images })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths.iter().map(|p| display_name(p)).collect()
    }

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("logo.png")));
        assert!(is_image_file(Path::new("photo.JPG")));
        assert!(is_image_file(Path::new("photo.Jpeg")));
        assert!(is_image_file(Path::new("anim.gif")));
        assert!(is_image_file(Path::new("icon.svg")));
        assert!(!is_image_file(Path::new("notes.txt")));
        assert!(!is_image_file(Path::new("png")));
        assert!(!is_image_file(Path::new("archive.png.zip")));
    }

    #[test]
    fn test_list_empty_dir() {
        let temp = tempdir().unwrap();
        let listing = list_dir(temp.path()).unwrap();
        assert!(listing.folders.is_empty());
        assert!(listing.images.is_empty());
    }

    #[test]
    fn test_list_sorts_folders_case_insensitively() {
        let temp = tempdir().unwrap();
        for name in ["B", "a", "C"] {
            fs::create_dir(temp.path().join(name)).unwrap();
        }

        let listing = list_dir(temp.path()).unwrap();
        assert_eq!(names(&listing.folders), vec!["a", "B", "C"]);
    }

    #[test]
    fn test_list_filters_hidden_and_non_images() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        fs::create_dir(temp.path().join("icons")).unwrap();
        File::create(temp.path().join(".hidden.png")).unwrap();
        File::create(temp.path().join("notes.txt")).unwrap();
        File::create(temp.path().join("README.md")).unwrap();
        File::create(temp.path().join("Logo.PNG")).unwrap();
        File::create(temp.path().join("banner.svg")).unwrap();

        let listing = list_dir(temp.path()).unwrap();
        assert_eq!(names(&listing.folders), vec!["icons"]);

        let images: Vec<_> = listing.images.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(images, vec!["banner.svg", "Logo.PNG"]);
    }

    #[test]
    fn test_list_records_sizes() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.png"), vec![0u8; 500]).unwrap();

        let listing = list_dir(temp.path()).unwrap();
        assert_eq!(listing.images.len(), 1);
        assert_eq!(listing.images[0].size, 500);
    }

    #[test]
    fn test_list_directory_named_like_image_is_folder() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("screens.png")).unwrap();

        let listing = list_dir(temp.path()).unwrap();
        assert_eq!(names(&listing.folders), vec!["screens.png"]);
        assert!(listing.images.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_list_skips_symlinked_dirs() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("real")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link")).unwrap();

        let listing = list_dir(temp.path()).unwrap();
        assert_eq!(names(&listing.folders), vec!["real"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_list_skips_hidden_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join(OsStr::from_bytes(b".cache\xff"))).unwrap();
        File::create(temp.path().join(OsStr::from_bytes(b".shot\xff.png"))).unwrap();

        let listing = list_dir(temp.path()).unwrap();
        assert!(listing.folders.is_empty(), "{:?}", listing.folders);
        assert!(listing.images.is_empty());
    }

    #[test]
    fn test_list_missing_dir_errors() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("missing");

        match list_dir(&missing).unwrap_err() {
            IndexError::ReadDir { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }
}
