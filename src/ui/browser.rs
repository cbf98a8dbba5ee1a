//! Show list browser
//!
//! Scrollable, selectable list of shows shared by the listing, search
//! results and favorites screens.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::app::ListState;
use crate::models::Show;
use crate::store::FavoritesStore;
use crate::ui::Theme;

/// Star shown next to favorited shows
pub const FAVORITE_MARK: &str = "★";

/// A bordered list of shows
pub struct ShowBrowser<'a> {
    pub title: String,
    pub shows: &'a [Show],
    pub favorites: &'a FavoritesStore,
    /// Text shown when the list is empty
    pub empty: &'a str,
    /// Trailing line (e.g. "Loading more...")
    pub footer: Option<&'a str>,
    pub focused: bool,
}

impl<'a> ShowBrowser<'a> {
    pub fn new(title: impl Into<String>, shows: &'a [Show], favorites: &'a FavoritesStore) -> Self {
        Self {
            title: title.into(),
            shows,
            favorites,
            empty: "Nothing here",
            footer: None,
            focused: true,
        }
    }

    pub fn empty(mut self, text: &'a str) -> Self {
        self.empty = text;
        self
    }

    pub fn footer(mut self, text: Option<&'a str>) -> Self {
        self.footer = text;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Render, scrolling `list` so the selection stays visible
    pub fn render(&self, frame: &mut Frame, area: Rect, list: &mut ListState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                Theme::border_focused()
            } else {
                Theme::border()
            })
            .title(Span::styled(format!(" {} ", self.title), Theme::title()));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.shows.is_empty() {
            let (text, style) = match self.footer {
                Some(footer) => (footer, Theme::loading()),
                None => (self.empty, Theme::dimmed()),
            };
            let empty = Paragraph::new(text)
                .style(style)
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        // Reserve the last row for the footer
        let footer_rows = usize::from(self.footer.is_some());
        let visible_height = (inner.height as usize).saturating_sub(footer_rows);
        list.scroll_into_view(visible_height);

        let mut items: Vec<ListItem> = self
            .shows
            .iter()
            .enumerate()
            .skip(list.offset)
            .take(visible_height)
            .map(|(i, show)| self.render_item(show, i == list.selected))
            .collect();

        if let Some(footer) = self.footer {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("  {}", footer),
                Theme::loading(),
            ))));
        }

        frame.render_widget(List::new(items).style(Theme::text()), inner);
    }

    /// One row: marker, name, favorite star, genres
    fn render_item(&self, show: &Show, is_selected: bool) -> ListItem<'static> {
        let marker = if is_selected { "▸ " } else { "  " };
        let star = if self.favorites.is_favorite(show.id) {
            format!(" {}", FAVORITE_MARK)
        } else {
            String::new()
        };

        let mut spans = vec![
            Span::styled(
                marker,
                if is_selected {
                    Theme::keybind()
                } else {
                    Theme::dimmed()
                },
            ),
            Span::styled(
                show.name.clone(),
                if is_selected {
                    Theme::list_item_selected()
                } else {
                    Theme::list_item()
                },
            ),
            Span::styled(star, Theme::favorite()),
        ];

        if !show.genres.is_empty() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(show.genres_str(), Theme::genre()));
        }

        ListItem::new(Line::from(spans))
    }
}
