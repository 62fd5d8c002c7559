//! splice - view and validate .splice drum machine patterns
//!
//! # Commands
//!
//! - `splice show <FILES>...` - Print the version, tempo and step grid of each pattern
//! - `splice show --json <FILES>...` - Same, as JSON
//! - `splice check <FILES>...` - Report which files decode cleanly
//!
//! Logging goes to stderr. A non-empty, valid `RUST_LOG` replaces the
//! default level entirely; otherwise the level is info, or debug with
//! `--verbose`.

mod cli;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use splice_drum::{Pattern, decode_file};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(cli.verbose, rust_log.as_deref()))
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Show { files, json } => show(&files, json, &mut out),
        Commands::Check { files } => check(&files, &mut out),
    }
}

/// Build the log filter from `RUST_LOG`, falling back to the verbosity level
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let fallback = || EnvFilter::default().add_directive(level.into());

    match rust_log.map(str::trim).filter(|dirs| !dirs.is_empty()) {
        Some(dirs) => EnvFilter::try_new(dirs).unwrap_or_else(|_| fallback()),
        None => fallback(),
    }
}

/// Decode a single pattern file with the path attached to any error
fn load(path: &Path) -> Result<Pattern> {
    decode_file(path).with_context(|| format!("Failed to decode {}", path.display()))
}

/// Print each pattern in order, stopping at the first one that fails
fn show<W: Write>(files: &[PathBuf], json: bool, out: &mut W) -> Result<()> {
    for path in files {
        let pattern = load(path)?;
        tracing::debug!("Decoded {:?}: {} tracks", path, pattern.tracks.len());

        if json {
            serde_json::to_writer_pretty(&mut *out, &pattern)?;
            writeln!(out)?;
        } else {
            if files.len() > 1 {
                writeln!(out, "== {}", path.display())?;
            }
            write!(out, "{}", pattern)?;
        }
    }
    Ok(())
}

/// Report ok/error per file; fails if any file did not decode
fn check<W: Write>(files: &[PathBuf], out: &mut W) -> Result<()> {
    let mut failed = 0;

    for path in files {
        match load(path) {
            Ok(pattern) => writeln!(
                out,
                "ok    {} ({} tracks)",
                path.display(),
                pattern.tracks.len()
            )?,
            Err(e) => {
                failed += 1;
                tracing::warn!("{:#}", e);
                writeln!(out, "error {}: {}", path.display(), e.root_cause())?;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} pattern files failed to decode", failed, files.len());
    }
    tracing::info!("All {} pattern files are valid", files.len());
    Ok(())
}
