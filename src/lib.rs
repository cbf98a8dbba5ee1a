//! mazetui - terminal client for the TVMaze show catalog
//!
//! Paginated listings, search, show detail with episodes grouped by season,
//! a locally persisted favorites list and a PIN lock screen.
//!
//! # Modules
//!
//! - `models` - Show, episode and season types
//! - `api` - TVMaze HTTP client
//! - `store` - Key-value persistence and the favorites list
//! - `pin` - PIN lock gate
//! - `app` - Application state and navigation
//! - `ui` - TUI components
//! - `tui` - Terminal setup and the event loop
//! - `cli` / `commands` - Scriptable subcommands
//! - `config` / `logging` - Configuration file and tracing setup

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod models;
pub mod pin;
pub mod store;
pub mod tui;
pub mod ui;

// Re-export commonly used types
pub use models::{Episode, ImageLinks, Schedule, Season, Show};

pub use api::{TvMazeClient, TvMazeError};
pub use app::{Action, App, AppEvent, AppState};
pub use store::{FavoritesStore, FileStore, KeyValueStore, MemoryStore, StorageError};
