//! gallery-index - Generate README.md image galleries for a directory tree
//!
//! gallery-index provides:
//! - Depth-first traversal of every visible directory
//! - Folder links and image tables pointing at a GitHub repository
//! - A check mode for verifying committed pages in CI

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod indexer;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
