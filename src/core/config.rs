//! Run configuration
//!
//! Built once at startup and passed by reference into the traversal.

use std::path::PathBuf;

use crate::core::paths::encode_url_path;

/// Repository used when `GITHUB_REPOSITORY` is unset or empty
pub const DEFAULT_REPOSITORY: &str = "RockX-SG/rockx-static";

/// Ref used when `GITHUB_REF_NAME` is unset or empty
pub const DEFAULT_REF_NAME: &str = "main";

/// Number of image tiles per table row
pub const DEFAULT_COLUMNS: usize = 4;

/// Remote GitHub repository the generated links point at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub repository: String,
    pub ref_name: String,
}

impl RemoteConfig {
    pub fn new(repository: impl Into<String>, ref_name: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            ref_name: ref_name.into(),
        }
    }

    /// Resolve from optional values, treating missing or blank values as defaults
    pub fn from_options(repository: Option<String>, ref_name: Option<String>) -> Self {
        fn non_blank(value: Option<String>, default: &str) -> String {
            value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        }

        Self::new(
            non_blank(repository, DEFAULT_REPOSITORY),
            non_blank(ref_name, DEFAULT_REF_NAME),
        )
    }

    /// Web URL for browsing `relative` at the configured ref
    pub fn view_url(&self, relative: &str) -> String {
        format!(
            "https://github.com/{}/blob/{}/{}",
            self.repository,
            self.ref_name,
            encode_url_path(relative)
        )
    }

    /// URL serving the raw bytes of `relative` at the configured ref
    pub fn raw_url(&self, relative: &str) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}",
            self.repository,
            self.ref_name,
            encode_url_path(relative)
        )
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REPOSITORY, DEFAULT_REF_NAME)
    }
}

/// Everything the indexer needs for one run
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Absolute traversal root; link paths are relative to it
    pub root: PathBuf,
    pub remote: RemoteConfig,
    pub columns: usize,
}

impl IndexConfig {
    pub fn new(root: impl Into<PathBuf>, remote: RemoteConfig) -> Self {
        Self {
            root: root.into(),
            remote,
            columns: DEFAULT_COLUMNS,
        }
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }
}
