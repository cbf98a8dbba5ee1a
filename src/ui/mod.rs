//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first navigation throughout.
//! [`render`] draws the whole frame from the app state.

pub mod browser;
pub mod detail;
pub mod pin;
pub mod search;
pub mod theme;

pub use browser::{ShowBrowser, FAVORITE_MARK};
pub use theme::Theme;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, AppState, InputMode};

/// Text of the favorites screen when nothing is saved
pub const NO_FAVORITES: &str = "You haven't added any favorites yet!";

const TABS: [(AppState, &str); 3] = [
    (AppState::Shows, "1"),
    (AppState::Search, "2"),
    (AppState::Favorites, "3"),
];

/// Main render function - dispatches to view-specific renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Theme::text()), area);

    if app.state == AppState::Pin {
        pin::render(frame, area, &app.pin);
        return;
    }

    // Main layout: header, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_content(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);
}

/// Logo and tab bar
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(1)])
        .split(area);

    let block = || {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border())
    };

    let logo = Paragraph::new(Line::from(vec![
        Span::styled("MAZE", Theme::title()),
        Span::styled("TUI", Theme::label()),
    ]))
    .alignment(Alignment::Center)
    .block(block());
    frame.render_widget(logo, chunks[0]);

    // Detail keeps the tab it was opened from highlighted
    let active = if app.state == AppState::Detail {
        app.nav_stack
            .iter()
            .rev()
            .find(|s| s.tab_title().is_some())
            .copied()
            .unwrap_or(AppState::Shows)
    } else {
        app.state
    };

    let mut spans = Vec::new();
    for (state, key) in TABS {
        let title = state.tab_title().unwrap_or_default();
        let style = if state == active {
            Theme::tab_active()
        } else {
            Theme::tab()
        };
        spans.push(Span::styled(format!(" {} {} ", key, title), style));
        spans.push(Span::raw(" "));
    }
    if app.state == AppState::Detail {
        if let Some(name) = app.detail.as_ref().and_then(|d| d.show.as_ref()).map(|s| &s.name) {
            spans.push(Span::styled(format!("› {}", name), Theme::dimmed()));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block()), chunks[1]);
}

/// Render the main content area based on current state
fn render_content(frame: &mut Frame, area: Rect, app: &mut App) {
    match app.state {
        AppState::Shows => {
            let shows = &mut app.shows;
            let footer = if shows.loading.is_loading() {
                shows.loading.message()
            } else {
                None
            };
            let title = if shows.exhausted {
                format!("SHOWS ({}, all loaded)", shows.shows.len())
            } else {
                format!("SHOWS ({})", shows.shows.len())
            };
            ShowBrowser::new(title, &shows.shows, &app.favorites)
                .empty("No shows loaded")
                .footer(footer)
                .render(frame, area, &mut shows.list);
        }
        AppState::Search => search::render(
            frame,
            area,
            &mut app.search,
            &app.favorites,
            &app.input_mode,
        ),
        AppState::Detail => {
            if let Some(detail) = app.detail.as_mut() {
                detail::render(frame, area, detail, &app.favorites);
            }
        }
        AppState::Favorites => {
            let title = format!("FAVORITES ({})", app.favorites.len());
            ShowBrowser::new(title, app.favorites.favorites(), &app.favorites)
                .empty(NO_FAVORITES)
                .render(frame, area, &mut app.favorites_view.list);
        }
        AppState::Pin => {}
    }
}

/// Key hints for the current screen
fn hints(app: &App) -> &'static str {
    if app.input_mode == InputMode::Editing {
        return " Enter:search  Esc:cancel ";
    }
    match app.state {
        AppState::Shows => " ↑↓:move  Enter:open  /:search  q:quit ",
        AppState::Search => " /:edit  ↑↓:move  Enter:open  Esc:back ",
        AppState::Detail => " Tab:panel  ↑↓:move  Enter:episode  f:favorite  Esc:back ",
        AppState::Favorites => " ↑↓:move  Enter:open  x:remove  Esc:back ",
        AppState::Pin => "",
    }
}

/// Render status bar at bottom
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(" NORMAL ", Theme::tab_active()),
        InputMode::Editing => Span::styled(" INSERT ", Theme::input_cursor()),
    };

    let message = match &app.status {
        Some(status) => Span::styled(format!(" {} ", status), Theme::success()),
        None => Span::styled(hints(app), Theme::keybind_desc()),
    };

    let status = Paragraph::new(Line::from(vec![mode_indicator, Span::raw(" "), message]))
        .style(Theme::status_bar());
    frame.render_widget(status, area);
}

/// Rect of at most `width` x `height` centered in `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
