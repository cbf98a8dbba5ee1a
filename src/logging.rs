//! Tracing subscriber setup
//!
//! The TUI owns stdout, so interactive sessions log to a file in the data
//! directory. CLI runs log to stderr.

use anyhow::Result;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LOG_ENV};

/// Log file name inside the data directory
pub const LOG_FILE: &str = "mazetui.log";

/// Filter from MAZETUI_LOG, then config, then `default`
fn filter(config: &Config, default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = config.log_level.as_deref().unwrap_or(default);
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(default))
    })
}

/// Log to `<dir>/mazetui.log`; returns the file path
pub fn init_file(config: &Config, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(config, "info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    Ok(path)
}

/// Log to a file for an interactive session.
///
/// Without a usable data directory the session runs unlogged; the reason is
/// printed to stderr before the terminal switches to raw mode.
pub fn init_tui(config: &Config) -> Option<PathBuf> {
    let dir = config.data_dir()?;
    match init_file(config, &dir) {
        Ok(path) => Some(path),
        Err(e) => {
            eprintln!("Warning: logging disabled ({}): {}", dir.display(), e);
            None
        }
    }
}

/// Log to stderr (CLI mode)
pub fn init_stderr(config: &Config) {
    // A second init (e.g. in tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config, "warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
