//! Configuration management for mazetui
//!
//! Handles config file loading/saving and path resolution.
//! Config is stored at ~/.config/mazetui/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::tvmaze::DEFAULT_BASE_URL;

/// Environment override for the API endpoint
pub const API_URL_ENV: &str = "MAZETUI_API_URL";

/// Environment override for the log filter
pub const LOG_ENV: &str = "MAZETUI_LOG";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// TVMaze API base URL
    pub api_url: Option<String>,
    /// Directory for favorites and the log file
    pub data_dir: Option<PathBuf>,
    /// Log filter (e.g. "info", "mazetui=debug")
    pub log_level: Option<String>,
    /// Show the PIN screen at start-up (default: true)
    pub lock_on_start: Option<bool>,
    /// Show the PIN screen when the terminal regains focus (default: true)
    pub lock_on_focus: Option<bool>,
}

impl Config {
    /// Get config file path (~/.config/mazetui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mazetui").join("config.toml"))
    }

    /// Load config from the default path, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .map(|p| Self::load_from(&p))
            .unwrap_or_default()
    }

    /// Load config from an explicit path, or return default if unreadable
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// API base URL with fallback chain:
    /// 1. Environment variable MAZETUI_API_URL
    /// 2. Config file value
    /// 3. Public TVMaze endpoint
    pub fn api_url(&self) -> String {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                return url;
            }
        }
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Data directory (~/.local/share/mazetui on Linux) unless overridden
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("mazetui")))
    }

    pub fn lock_on_start(&self) -> bool {
        self.lock_on_start.unwrap_or(true)
    }

    pub fn lock_on_focus(&self) -> bool {
        self.lock_on_focus.unwrap_or(true)
    }
}
