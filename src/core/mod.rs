//! Core module - Configuration, rendering and path utilities
//!
//! This module provides:
//! - Run configuration and remote URL construction
//! - Markdown building blocks for index pages
//! - Path normalization and URL encoding
//! - Error types
//! - Common utilities

pub mod config;
pub mod error;
pub mod paths;
pub mod render;
pub mod util;
