//! Detail view for one show
//!
//! Info panel on the left; seasons and the selected season's episodes on
//! the right. Enter on an episode opens a popup with its summary.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::app::{DetailFocus, DetailState};
use crate::models::{Episode, Show};
use crate::store::FavoritesStore;
use crate::ui::{centered_rect, Theme, FAVORITE_MARK};

/// Render the detail screen
pub fn render(frame: &mut Frame, area: Rect, detail: &mut DetailState, favorites: &FavoritesStore) {
    let Some(show) = detail.show.as_ref() else {
        render_placeholder(frame, area, detail);
        return;
    };

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(h_chunks[1]);

    render_info_panel(
        frame,
        h_chunks[0],
        show,
        favorites.is_favorite(show.id),
        detail.focus == DetailFocus::Info,
        &mut detail.info_scroll,
    );
    render_seasons_panel(frame, v_chunks[0], detail);
    render_episodes_panel(frame, v_chunks[1], detail);

    if detail.popup {
        if let Some(episode) = detail.selected_episode() {
            render_episode_popup(frame, area, episode);
        }
    }
}

fn panel(title: String, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .title(Span::styled(title, Theme::title()))
}

/// Loading or failure state before the show arrives
fn render_placeholder(frame: &mut Frame, area: Rect, detail: &DetailState) {
    let block = panel(" DETAIL ".into(), true);

    let (text, style) = if detail.loading.is_error() {
        (
            format!(
                "{}  (r to retry, Esc to go back)",
                detail.loading.message().unwrap_or("Could not load show")
            ),
            Theme::error(),
        )
    } else {
        (
            format!("⟳ {}", detail.loading.message().unwrap_or("Loading...")),
            Theme::loading(),
        )
    };

    let para = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(para, area);
}

/// Title, schedule, genres, summary, image link
fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    show: &Show,
    is_favorite: bool,
    focused: bool,
    scroll: &mut u16,
) {
    let block = panel(" INFO ".into(), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();

    let mut title = vec![Span::styled(show.name.clone(), Theme::title())];
    if is_favorite {
        title.push(Span::styled(format!(" {}", FAVORITE_MARK), Theme::favorite()));
    }
    lines.push(Line::from(title));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("Airs on: ", Theme::label()),
        Span::styled(show.schedule.to_string(), Theme::text()),
    ]));

    let genres = show.genres_str();
    lines.push(Line::from(vec![
        Span::styled("Genres: ", Theme::label()),
        Span::styled(
            if genres.is_empty() { "-".to_string() } else { genres },
            Theme::text(),
        ),
    ]));

    if let Some(url) = show.image_url() {
        lines.push(Line::from(vec![
            Span::styled("Image: ", Theme::label()),
            Span::styled(url.to_string(), Theme::dimmed()),
        ]));
    }

    lines.push(Line::from(Span::styled(
        "─".repeat(inner.width as usize),
        Theme::dimmed(),
    )));

    let summary = show.plain_summary();
    if summary.is_empty() {
        lines.push(Line::from(Span::styled("No summary available", Theme::dimmed())));
    } else {
        for line in summary.lines() {
            lines.push(Line::from(Span::styled(line.to_string(), Theme::text())));
        }
    }

    // Stop scrolling once the last line is at the bottom
    let max_scroll = wrapped_height(&lines, inner.width).saturating_sub(inner.height);
    *scroll = (*scroll).min(max_scroll);

    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .scroll((*scroll, 0));
    frame.render_widget(paragraph, inner);
}

/// Rows `lines` occupy when word-wrapped to `width` columns
fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows = 0usize;

    for line in lines {
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        let mut line_rows = 1;
        let mut used = 0;
        for word in text.split_whitespace() {
            let w = Span::raw(word).width();
            if used > 0 && used + 1 + w <= width {
                used += 1 + w;
                continue;
            }
            if used > 0 {
                line_rows += 1;
            }
            // Words wider than the panel are broken across rows
            line_rows += w.saturating_sub(1) / width;
            used = match w % width {
                0 if w > 0 => width,
                rest => rest,
            };
        }
        rows += line_rows;
    }

    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn render_seasons_panel(frame: &mut Frame, area: Rect, detail: &mut DetailState) {
    let title = format!(" SEASONS ({}) ", detail.seasons.len());
    let block = panel(title, detail.focus == DetailFocus::Seasons);

    if detail.seasons.is_empty() {
        let empty = Paragraph::new("No episodes")
            .style(Theme::dimmed())
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner = block.inner(area);
    detail.season_list.scroll_into_view(inner.height as usize);
    let selected = detail.season_list.selected;

    let items: Vec<ListItem> = detail
        .seasons
        .iter()
        .enumerate()
        .skip(detail.season_list.offset)
        .take(inner.height as usize)
        .map(|(i, season)| {
            let is_selected = i == selected;
            ListItem::new(Line::from(vec![
                Span::styled(
                    if is_selected { "▸ " } else { "  " },
                    Theme::keybind(),
                ),
                Span::styled(
                    format!("Season {}", season.number),
                    if is_selected {
                        Theme::list_item_selected()
                    } else {
                        Theme::list_item()
                    },
                ),
                Span::styled(format!(" ({} eps)", season.episodes.len()), Theme::dimmed()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_episodes_panel(frame: &mut Frame, area: Rect, detail: &mut DetailState) {
    let episodes: &[Episode] = detail
        .seasons
        .get(detail.season_list.selected)
        .map(|s| s.episodes.as_slice())
        .unwrap_or(&[]);

    let title = format!(" EPISODES ({}) ", episodes.len());
    let block = panel(title, detail.focus == DetailFocus::Episodes);

    if episodes.is_empty() {
        let empty = Paragraph::new("Select a season")
            .style(Theme::dimmed())
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner = block.inner(area);
    let visible_height = inner.height as usize;
    detail.episode_list.scroll_into_view(visible_height);
    let selected = detail.episode_list.selected;

    let items: Vec<ListItem> = episodes
        .iter()
        .enumerate()
        .skip(detail.episode_list.offset)
        .take(visible_height)
        .map(|(i, ep)| {
            let is_selected = i == selected;
            ListItem::new(Line::from(vec![
                Span::styled(
                    if is_selected { "▸ " } else { "  " },
                    Theme::keybind(),
                ),
                Span::styled(format!("{:<8}", ep.code()), Theme::label()),
                Span::styled(
                    ep.name.clone(),
                    if is_selected {
                        Theme::list_item_selected()
                    } else {
                        Theme::list_item()
                    },
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Modal with one episode's details
fn render_episode_popup(frame: &mut Frame, area: Rect, episode: &Episode) {
    let popup_area = centered_rect(area, 70, 16);
    frame.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::from(Span::styled(episode.name.clone(), Theme::title())),
        Line::from(Span::styled(episode.code(), Theme::label())),
    ];
    if let Some(url) = episode.image_url() {
        lines.push(Line::from(Span::styled(url.to_string(), Theme::dimmed())));
    }
    lines.push(Line::from(""));

    let summary = episode.plain_summary();
    lines.push(Line::from(Span::styled(
        if summary.is_empty() {
            "No summary available".to_string()
        } else {
            summary
        },
        Theme::text(),
    )));

    let popup = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Theme::border_focused())
            .title(Span::styled(" EPISODE ", Theme::title()))
            .title_bottom(Span::styled(" Esc/Enter to close ", Theme::keybind_desc()))
            .style(Style::default().bg(Theme::SURFACE)),
    );
    frame.render_widget(popup, popup_area);
}
