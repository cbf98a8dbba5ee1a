//! Interactive mode
//!
//! Terminal setup/teardown and the main event loop. Network work requested
//! by key presses runs on spawned tasks; results come back over a channel
//! and are applied to the app state between frames.

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event, KeyEventKind},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, info};

use crate::api::TvMazeClient;
use crate::app::{Action, App, AppEvent};
use crate::commands::Context;
use crate::config::Config;
use crate::ui;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
pub async fn run(config: &Config) -> Result<()> {
    let ctx = Context::from_config(config);

    let mut app = App::new(ctx.favorites());
    app.lock_on_focus = config.lock_on_focus();
    if config.lock_on_start() {
        app.lock();
    }
    info!(api = ctx.client.base_url(), favorites = app.favorites.len(), "Starting TUI");

    let mut terminal = init_terminal()?;

    let result = run_event_loop(&mut terminal, &mut app, ctx.client).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, updates state, renders UI
async fn run_event_loop(terminal: &mut Tui, app: &mut App, client: TvMazeClient) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    if let Some(action) = app.start() {
        dispatch(&client, &tx, action);
    }

    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(TICK_RATE)? {
            match event::read()? {
                // Only handle key press events (ignore releases on Windows)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = app.handle_key(key) {
                        dispatch(&client, &tx, action);
                    }
                    if app.take_bell() {
                        execute!(terminal.backend_mut(), Print('\u{7}'))?;
                    }
                }
                Event::FocusLost => app.focus_lost(),
                Event::FocusGained => app.focus_gained(),
                _ => {}
            }
        }

        while let Ok(event) = rx.try_recv() {
            app.apply(event);
        }
    }

    info!("Exiting TUI");
    Ok(())
}

/// Run an action on its own task; the result is sent back as an event
fn dispatch(client: &TvMazeClient, tx: &UnboundedSender<AppEvent>, action: Action) {
    debug!(?action, "Dispatching");
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let event = perform(&client, action).await;
        // Receiver is gone only when the app is shutting down
        let _ = tx.send(event);
    });
}

/// Execute an action against the catalog
pub async fn perform(client: &TvMazeClient, action: Action) -> AppEvent {
    match action {
        Action::LoadShows { page } => AppEvent::ShowsLoaded {
            page,
            result: client.shows(page).await,
        },
        Action::Search { query } => {
            let result = client.search(&query).await;
            AppEvent::SearchCompleted { query, result }
        }
        Action::LoadDetail { id } => AppEvent::DetailLoaded {
            id,
            result: client.show_with_episodes(id).await,
        },
    }
}
