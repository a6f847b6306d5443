//! Indexer module - Directory traversal and page generation
//!
//! Provides:
//! - listing: per-directory classification of folders and images
//! - tree: recursive generation of README.md index pages

pub mod listing;
pub mod tree;
