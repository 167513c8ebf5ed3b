//! Logging init: append to a log file under the XDG state dir, or fall back to stderr.
//!
//! Batch runs can take a long time at one row per second, so the per-row
//! debug events go to the file and stdout stays free for the summary line.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info,geotab_core=debug,geotab_cli=debug";

/// Where log output ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    Stderr,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/geotab/geotab.log`, creating the directory if needed.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("geotab")?;
    xdg_dirs
        .place_state_file("geotab.log")
        .context("cannot create geotab state directory")
}

/// Send events to the geotab log file. Returns Err if the file cannot be opened
/// or a subscriber is already installed; see [`init`] for the fallback.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "geotab logging to {}", path.display());
    Ok(path)
}

/// Send events to stderr only.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

/// Log to the file if possible, otherwise to stderr. Never fails.
pub fn init() -> LogDestination {
    match init_logging() {
        Ok(path) => LogDestination::File(path),
        Err(err) => {
            init_logging_stderr();
            tracing::warn!("file logging unavailable ({:#}), using stderr", err);
            LogDestination::Stderr
        }
    }
}
