//! Common utilities

use std::path::Path;

const KB: f64 = 1024.0;

/// Get file size in bytes
pub fn get_file_size(path: &Path) -> std::io::Result<u64> {
    let metadata = std::fs::metadata(path)?;
    Ok(metadata.len())
}

/// Format a byte count as KB, switching to MB from 1024 KB upward.
/// Both units use two decimals.
pub fn format_size(bytes: u64) -> String {
    let kb = bytes as f64 / KB;
    if kb < KB {
        format!("{:.2} KB", kb)
    } else {
        format!("{:.2} MB", kb / KB)
    }
}
