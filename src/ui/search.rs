//! Search view component
//!
//! Query input box above the results list.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{InputMode, SearchState};
use crate::store::FavoritesStore;
use crate::ui::{browser::ShowBrowser, Theme};

/// Render the search screen
pub fn render(
    frame: &mut Frame,
    area: Rect,
    search: &mut SearchState,
    favorites: &FavoritesStore,
    input_mode: &InputMode,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let editing = *input_mode == InputMode::Editing;
    render_input(frame, chunks[0], search, editing);

    let title = match &search.last_query {
        Some(q) => format!("RESULTS FOR \"{}\" ({})", q, search.results.len()),
        None => "RESULTS".to_string(),
    };
    let empty = if search.last_query.is_some() {
        "No results found"
    } else {
        "Press / and type a show name"
    };
    let footer = if search.loading.is_loading() {
        search.loading.message()
    } else {
        None
    };

    ShowBrowser::new(title, &search.results, favorites)
        .empty(empty)
        .footer(footer)
        .focused(!editing)
        .render(frame, chunks[1], &mut search.list);
}

fn render_input(frame: &mut Frame, area: Rect, search: &SearchState, editing: bool) {
    let line = if editing {
        let split = search
            .query
            .char_indices()
            .nth(search.cursor)
            .map(|(i, _)| i)
            .unwrap_or(search.query.len());
        let (before, after) = search.query.split_at(split);
        let mut rest = after.chars();
        let at_cursor = rest.next().map(String::from).unwrap_or_else(|| " ".into());

        Line::from(vec![
            Span::styled("⌕ ", Theme::keybind()),
            Span::raw(before.to_string()),
            Span::styled(at_cursor, Theme::input_cursor()),
            Span::raw(rest.as_str().to_string()),
        ])
    } else if search.query.is_empty() {
        Line::from(Span::styled("⌕ Type / to search...", Theme::dimmed()))
    } else {
        Line::from(vec![
            Span::styled("⌕ ", Theme::keybind()),
            Span::raw(search.query.clone()),
        ])
    };

    let input = Paragraph::new(line).style(Theme::input()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if editing {
                Theme::border_focused()
            } else {
                Theme::border()
            })
            .title(Span::styled(" SEARCH ", Theme::title())),
    );
    frame.render_widget(input, area);
}
