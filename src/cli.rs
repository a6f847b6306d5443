//! CLI module - Command-line interface definitions and handlers

use anyhow::{bail, Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::core::config::{IndexConfig, RemoteConfig, DEFAULT_COLUMNS};
use crate::core::paths::make_relative;
use crate::indexer::tree::{index_tree, IndexReport, Mode};

/// gallery-index - generate README.md image galleries for a directory tree.
#[derive(Parser, Debug)]
#[command(name = "gallery-index")]
#[command(
    author,
    version,
    about,
    long_about = r#"gallery-index walks ROOT depth-first and writes a README.md into every
visible directory. Each page lists the directory's subfolders as links to their
own pages, followed by a table of the images it contains (png, jpg, jpeg, gif,
svg) with file names and sizes.

Links point at the GitHub repository named by GITHUB_REPOSITORY at the ref named
by GITHUB_REF_NAME, which matches the variables GitHub Actions sets for a run.

Examples:
    gallery-index
    gallery-index --root assets --columns 3
    GITHUB_REPOSITORY=acme/assets gallery-index --check
"#
)]
pub struct Cli {
    /// Directory to index.
    #[arg(
        long,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Directory to index (defaults to the current directory).\n\n\
All link paths in the generated pages are relative to this root."
    )]
    pub root: PathBuf,

    /// Remote repository as OWNER/REPO.
    #[arg(
        long,
        env = "GITHUB_REPOSITORY",
        value_name = "OWNER/REPO",
        long_help = "GitHub repository the generated links point at.\n\n\
Falls back to RockX-SG/rockx-static when neither the flag nor the variable is set."
    )]
    pub repository: Option<String>,

    /// Branch or tag the links point at.
    #[arg(
        long = "ref",
        env = "GITHUB_REF_NAME",
        value_name = "REF",
        long_help = "Branch or tag name used in view and raw-content links.\n\n\
Falls back to main when neither the flag nor the variable is set."
    )]
    pub ref_name: Option<String>,

    /// Number of image columns per table row.
    #[arg(
        long,
        default_value_t = DEFAULT_COLUMNS,
        value_name = "N",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub columns: usize,

    /// Verify pages are current instead of writing them.
    #[arg(
        long,
        long_help = "Render every page and compare it with the README.md on disk without\n\
writing anything. Exits with a non-zero status if any page is missing or out of date."
    )]
    pub check: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (warnings and errors only).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (per-directory listing details).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.check {
            Mode::Check
        } else {
            Mode::Write
        }
    }

    fn default_log_filter(&self) -> &'static str {
        if self.quiet {
            "gallery_index=warn"
        } else if self.verbose {
            "gallery_index=debug"
        } else {
            "gallery_index=info"
        }
    }
}

/// Install the stderr tracing subscriber; RUST_LOG overrides the default filter
fn init_logging(cli: &Cli) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.default_log_filter().into());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!cli.no_color);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(&cli);

    let root = cli
        .root
        .canonicalize()
        .with_context(|| format!("cannot access root directory {}", cli.root.display()))?;
    if !root.is_dir() {
        bail!("root {} is not a directory", root.display());
    }

    let mode = cli.mode();
    let remote = RemoteConfig::from_options(cli.repository, cli.ref_name);
    let config = IndexConfig::new(root, remote).with_columns(cli.columns);

    tracing::debug!(
        root = %config.root.display(),
        repository = %config.remote.repository,
        ref_name = %config.remote.ref_name,
        columns = config.columns,
        ?mode,
        "starting index run"
    );

    let report = index_tree(&config, mode)?;

    match mode {
        Mode::Write => {
            if !cli.quiet {
                print_write_summary(&report, &config.root);
            }
            Ok(())
        }
        Mode::Check => check_outcome(&report, &config.root, cli.quiet),
    }
}

fn print_write_summary(report: &IndexReport, root: &Path) {
    eprintln!(
        "{} {} index page(s) under {}",
        "Generated".green().bold(),
        report.written,
        root.display()
    );
}

fn check_outcome(report: &IndexReport, root: &Path, quiet: bool) -> Result<()> {
    if report.is_clean() {
        if !quiet {
            eprintln!(
                "{} all {} index page(s) are up to date",
                "OK".green().bold(),
                report.up_to_date
            );
        }
        return Ok(());
    }

    for path in &report.stale {
        let shown = make_relative(path, root).unwrap_or_else(|| path.display().to_string());
        eprintln!("{} {}", "stale".yellow().bold(), shown);
    }
    bail!(
        "{} of {} index page(s) are out of date; run gallery-index to regenerate them",
        report.stale.len(),
        report.directories
    )
}
