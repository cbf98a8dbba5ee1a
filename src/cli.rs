//! CLI - Command Line Interface for mazetui
//!
//! Every catalog and favorites action is scriptable. Output is JSON when
//! `--json` is given or stdout is not a terminal.
//!
//! # Examples
//!
//! ```bash
//! mazetui search "girls" --limit 5
//! mazetui info 82 --json
//! mazetui episodes 82 --season 2
//! mazetui favorites toggle 82
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Network error
    NetworkError = 3,
    /// Show or page does not exist
    NotFound = 4,
    /// Favorites could not be persisted
    StorageError = 5,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// mazetui - terminal client for the TVMaze catalog
///
/// Run without arguments to launch interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "mazetui",
    version,
    about = "Terminal client for the TVMaze show catalog",
    long_about = "Browse, search and favorite TV shows from TVMaze.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  mazetui                          Launch interactive TUI\n\
                  mazetui search \"girls\"           Search shows by name\n\
                  mazetui info 82 --json           Show details with seasons\n\
                  mazetui favorites toggle 82      Add or remove a favorite"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List one page of the show index
    #[command(visible_alias = "ls")]
    Shows(ShowsCmd),

    /// Search shows by name
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// Show details with episodes grouped by season
    #[command(visible_alias = "i")]
    Info(InfoCmd),

    /// List a show's episodes
    #[command(visible_alias = "ep")]
    Episodes(EpisodesCmd),

    /// Manage the favorites list
    #[command(visible_alias = "fav")]
    Favorites(FavoritesCmd),
}

/// List one page of the show index (250 shows per page)
#[derive(Args, Debug)]
pub struct ShowsCmd {
    /// Page number, starting at 0
    #[arg(long, short = 'p', default_value = "0")]
    pub page: u32,

    /// Maximum number of shows to print
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,
}

/// Search shows by name
#[derive(Args, Debug)]
pub struct SearchCmd {
    /// Search query
    #[arg(required = true)]
    pub query: String,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "10")]
    pub limit: usize,
}

/// Show details with episodes grouped by season
#[derive(Args, Debug)]
pub struct InfoCmd {
    /// TVMaze show id
    pub id: u64,
}

/// List a show's episodes
#[derive(Args, Debug)]
pub struct EpisodesCmd {
    /// TVMaze show id
    pub id: u64,

    /// Only this season
    #[arg(long, short = 's')]
    pub season: Option<u32>,
}

#[derive(Args, Debug)]
pub struct FavoritesCmd {
    #[command(subcommand)]
    pub action: FavoritesAction,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum FavoritesAction {
    /// Print saved favorites
    #[command(visible_alias = "ls")]
    List,

    /// Add the show if absent, remove it if present
    Toggle {
        /// TVMaze show id
        id: u64,
    },

    /// Report whether a show is a favorite
    Check {
        /// TVMaze show id
        id: u64,
    },
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero", default)]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

/// Favorite membership response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteStatus {
    pub id: u64,
    pub name: String,
    pub favorite: bool,
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data: the JSON envelope, or one line per item of
    /// `human` otherwise
    pub fn print<T: Serialize>(&self, data: T, human: &[String]) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            for line in human {
                println!("{}", line);
            }
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
