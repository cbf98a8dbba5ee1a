//! mazetui - terminal client for the TVMaze show catalog
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! mazetui
//!
//! # CLI mode (for automation)
//! mazetui search "girls"
//! mazetui info 82 --json
//! mazetui favorites list
//! ```

use anyhow::Result;
use clap::Parser;

use mazetui::cli::{Cli, Command, ExitCode, Output};
use mazetui::commands::{self, Context};
use mazetui::config::Config;
use mazetui::{logging, tui};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        logging::init_stderr(&config);
        let exit_code = run_cli(cli, &config).await;
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: stdout belongs to the terminal UI, so log to a file
        logging::init_tui(&config);
        tui::run(&config).await
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli, config: &Config) -> ExitCode {
    let output = Output::new(&cli);
    let ctx = Context::from_config(config);

    match cli.command {
        Some(Command::Shows(cmd)) => commands::shows_cmd(cmd, &ctx, &output).await,
        Some(Command::Search(cmd)) => commands::search_cmd(cmd, &ctx, &output).await,
        Some(Command::Info(cmd)) => commands::info_cmd(cmd, &ctx, &output).await,
        Some(Command::Episodes(cmd)) => commands::episodes_cmd(cmd, &ctx, &output).await,
        Some(Command::Favorites(cmd)) => commands::favorites_cmd(cmd, &ctx, &output).await,
        // Handled by the is_cli_mode check
        None => ExitCode::Success,
    }
}
