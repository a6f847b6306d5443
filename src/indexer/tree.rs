//! Depth-first index generation
//!
//! Visits every visible directory under the configured root and renders one
//! `README.md` page per directory. In write mode the page replaces the file on
//! disk; in check mode it is only compared with what is already there.

use std::path::{Path, PathBuf};

use crate::core::config::IndexConfig;
use crate::core::error::{IndexError, IndexResult};
use crate::core::paths::{display_name, make_relative};
use crate::core::render::{image_tile, Page};
use crate::core::util::format_size;

use super::listing::list_dir;

/// Name of the generated page inside every directory
pub const INDEX_FILE_NAME: &str = "README.md";

/// What to do with each rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Overwrite `README.md` with the rendered page
    #[default]
    Write,
    /// Compare against the existing `README.md` without touching the filesystem
    Check,
}

/// Outcome of a full run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IndexReport {
    pub directories: usize,
    pub written: usize,
    pub up_to_date: usize,
    /// Pages that are missing or differ from the rendered output (check mode)
    pub stale: Vec<PathBuf>,
}

impl IndexReport {
    pub fn is_clean(&self) -> bool {
        self.stale.is_empty()
    }
}

/// Recursive index generator for one configured tree
pub struct TreeIndexer<'a> {
    config: &'a IndexConfig,
    mode: Mode,
    report: IndexReport,
}

impl<'a> TreeIndexer<'a> {
    pub fn new(config: &'a IndexConfig, mode: Mode) -> Self {
        Self {
            config,
            mode,
            report: IndexReport::default(),
        }
    }

    /// Index the configured root and everything below it
    pub fn run(mut self) -> IndexResult<IndexReport> {
        let root = self.config.root.clone();
        self.index(&root)?;
        Ok(self.report)
    }

    /// Generate the page for `dir`, recursing into each subfolder as its link is emitted.
    pub fn index(&mut self, dir: &Path) -> IndexResult<()> {
        let listing = list_dir(dir)?;
        let config = self.config;
        let remote = &config.remote;

        let mut page = Page::new(&display_name(dir));

        for folder in &listing.folders {
            let relative = self.relative(folder);
            page.push_folder(&display_name(folder), &remote.view_url(&relative));
            self.index(folder)?;
        }

        let tiles: Vec<String> = listing
            .images
            .iter()
            .map(|image| {
                let relative = self.relative(&image.path);
                image_tile(
                    &image.name,
                    &remote.raw_url(&relative),
                    &format_size(image.size),
                )
            })
            .collect();
        page.push_tiles(&tiles, config.columns);

        self.finish(dir, page.into_string())
    }

    /// Path of `path` relative to the root, '/'-separated
    fn relative(&self, path: &Path) -> String {
        make_relative(path, &self.config.root).unwrap_or_else(|| display_name(path))
    }

    fn finish(&mut self, dir: &Path, content: String) -> IndexResult<()> {
        let target = dir.join(INDEX_FILE_NAME);
        self.report.directories += 1;

        match self.mode {
            Mode::Write => {
                std::fs::write(&target, content.as_bytes()).map_err(|source| {
                    IndexError::Write {
                        path: target.clone(),
                        source,
                    }
                })?;
                self.report.written += 1;
                tracing::info!(dir = %dir.display(), "generated {}", INDEX_FILE_NAME);
            }
            Mode::Check => {
                if read_existing(&target)?.as_deref() == Some(content.as_str()) {
                    self.report.up_to_date += 1;
                    tracing::debug!(dir = %dir.display(), "{} is up to date", INDEX_FILE_NAME);
                } else {
                    tracing::warn!(dir = %dir.display(), "{} is stale", INDEX_FILE_NAME);
                    self.report.stale.push(target);
                }
            }
        }

        Ok(())
    }
}

/// Read an existing page; a missing file is `None`, other failures are errors
fn read_existing(path: &Path) -> IndexResult<Option<String>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(IndexError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Index `config.root` in the given mode
pub fn index_tree(config: &IndexConfig, mode: Mode) -> IndexResult<IndexReport> {
    TreeIndexer::new(config, mode).run()
}
