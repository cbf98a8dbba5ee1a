//! CLI Command Handlers
//!
//! Implements all CLI commands by calling the catalog client and the
//! favorites store. Each handler takes CLI args and Output, returns ExitCode.

use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use crate::api::{TvMazeClient, TvMazeError};
use crate::cli::{
    EpisodesCmd, ExitCode, FavoriteStatus, FavoritesAction, FavoritesCmd, InfoCmd, Output,
    SearchCmd, ShowsCmd,
};
use crate::config::Config;
use crate::models::{seasons, Season, Show};
use crate::store::{FavoritesStore, FileStore, MemoryStore};

/// What every handler needs: a catalog client and the data directory
#[derive(Debug, Clone)]
pub struct Context {
    pub client: TvMazeClient,
    /// Where favorites live; `None` keeps them in memory for this run
    pub data_dir: Option<PathBuf>,
}

impl Context {
    pub fn from_config(config: &Config) -> Self {
        Self {
            client: TvMazeClient::with_base_url(config.api_url()),
            data_dir: config.data_dir(),
        }
    }

    /// Open the favorites store for this context
    pub fn favorites(&self) -> FavoritesStore {
        match &self.data_dir {
            Some(dir) => FavoritesStore::load(FileStore::new(dir)),
            None => FavoritesStore::load(MemoryStore::new()),
        }
    }
}

/// Map a client error to the exit code scripts see
fn fetch_error(output: &Output, what: &str, err: anyhow::Error) -> ExitCode {
    if TvMazeError::is_not_found(&err) {
        output.error(format!("{} not found", what), ExitCode::NotFound)
    } else {
        output.error(format!("Failed to fetch {}: {}", what, err), ExitCode::NetworkError)
    }
}

/// Print data, mapping serialization failures to a general error
fn emit<T: Serialize>(output: &Output, data: T, human: &[String]) -> ExitCode {
    match output.print(data, human) {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to serialize: {}", e), ExitCode::Error),
    }
}

fn show_lines(shows: &[Show], favorites: Option<&FavoritesStore>) -> Vec<String> {
    shows
        .iter()
        .map(|s| match favorites {
            Some(f) if f.is_favorite(s.id) => format!("{} ★", s),
            _ => s.to_string(),
        })
        .collect()
}

// =============================================================================
// Shows Command
// =============================================================================

pub async fn shows_cmd(cmd: ShowsCmd, ctx: &Context, output: &Output) -> ExitCode {
    output.info(format!("Fetching page {}...", cmd.page));

    match ctx.client.shows(cmd.page).await {
        Ok(mut shows) => {
            if let Some(limit) = cmd.limit {
                shows.truncate(limit);
            }
            let favorites = ctx.favorites();
            emit(output, &shows, &show_lines(&shows, Some(&favorites)))
        }
        Err(e) => fetch_error(output, &format!("Page {}", cmd.page), e),
    }
}

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd(cmd: SearchCmd, ctx: &Context, output: &Output) -> ExitCode {
    let query = cmd.query.trim();
    if query.is_empty() {
        return output.error("Search query is empty", ExitCode::InvalidArgs);
    }

    output.info(format!("Searching for: {}", query));

    match ctx.client.search(query).await {
        Ok(mut shows) => {
            shows.truncate(cmd.limit);
            let favorites = ctx.favorites();
            emit(output, &shows, &show_lines(&shows, Some(&favorites)))
        }
        Err(e) => output.error(format!("Search failed: {}", e), ExitCode::NetworkError),
    }
}

// =============================================================================
// Info Command
// =============================================================================

/// Show with its episodes grouped by season
#[derive(Debug, Serialize)]
pub struct ShowInfo {
    #[serde(flatten)]
    pub show: Show,
    pub favorite: bool,
    pub seasons: Vec<Season>,
}

impl ShowInfo {
    fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!(
                "{}{}",
                self.show.name,
                if self.favorite { " ★" } else { "" }
            ),
            format!("Airs on: {}", self.show.schedule),
            format!("Genres: {}", self.show.genres_str()),
        ];
        if let Some(url) = self.show.image_url() {
            lines.push(format!("Image: {}", url));
        }
        let summary = self.show.plain_summary();
        if !summary.is_empty() {
            lines.push(String::new());
            lines.push(summary);
        }
        for season in &self.seasons {
            lines.push(String::new());
            lines.push(season.to_string());
            for episode in &season.episodes {
                lines.push(format!("  {}", episode));
            }
        }
        lines
    }
}

pub async fn info_cmd(cmd: InfoCmd, ctx: &Context, output: &Output) -> ExitCode {
    output.info(format!("Getting info for: {}", cmd.id));

    match ctx.client.show_with_episodes(cmd.id).await {
        Ok((show, episodes)) => {
            debug!(id = cmd.id, episodes = episodes.len(), "Fetched show");
            let info = ShowInfo {
                favorite: ctx.favorites().is_favorite(show.id),
                seasons: seasons(episodes),
                show,
            };
            let lines = info.lines();
            emit(output, &info, &lines)
        }
        Err(e) => fetch_error(output, &format!("Show {}", cmd.id), e),
    }
}

// =============================================================================
// Episodes Command
// =============================================================================

pub async fn episodes_cmd(cmd: EpisodesCmd, ctx: &Context, output: &Output) -> ExitCode {
    match ctx.client.episodes(cmd.id).await {
        Ok(episodes) => {
            let mut grouped = seasons(episodes);
            if let Some(number) = cmd.season {
                grouped.retain(|s| s.number == number);
                if grouped.is_empty() {
                    return output.error(
                        format!("Show {} has no season {}", cmd.id, number),
                        ExitCode::NotFound,
                    );
                }
            }

            let lines: Vec<String> = grouped
                .iter()
                .flat_map(|s| s.episodes.iter().map(|e| e.to_string()))
                .collect();
            emit(output, &grouped, &lines)
        }
        Err(e) => fetch_error(output, &format!("Show {}", cmd.id), e),
    }
}

// =============================================================================
// Favorites Command
// =============================================================================

pub async fn favorites_cmd(cmd: FavoritesCmd, ctx: &Context, output: &Output) -> ExitCode {
    let mut favorites = ctx.favorites();

    match cmd.action {
        FavoritesAction::List => {
            let lines = if favorites.is_empty() {
                vec!["You haven't added any favorites yet!".to_string()]
            } else {
                show_lines(favorites.favorites(), None)
            };
            emit(output, favorites.favorites(), &lines)
        }

        FavoritesAction::Check { id } => {
            let status = match favorites.favorites().iter().find(|s| s.id == id) {
                Some(show) => FavoriteStatus {
                    id,
                    name: show.name.clone(),
                    favorite: true,
                },
                None => FavoriteStatus {
                    id,
                    name: String::new(),
                    favorite: false,
                },
            };
            let line = if status.favorite {
                format!("{} is a favorite", status.name)
            } else {
                format!("Show {} is not a favorite", id)
            };
            emit(output, &status, &[line])
        }

        FavoritesAction::Toggle { id } => {
            // Removal needs no network: the stored record is enough
            let show = match favorites.favorites().iter().find(|s| s.id == id) {
                Some(show) => show.clone(),
                None => match ctx.client.show(id).await {
                    Ok(show) => show,
                    Err(e) => return fetch_error(output, &format!("Show {}", id), e),
                },
            };

            let before = favorites.is_favorite(id);
            let after = favorites.toggle(&show);
            if before == after {
                return output.error(
                    format!("Could not save favorites for {}", show.name),
                    ExitCode::StorageError,
                );
            }

            let line = if after {
                format!("{} added to favorites!", show.name)
            } else {
                format!("{} removed from favorites!", show.name)
            };
            let status = FavoriteStatus {
                id,
                name: show.name,
                favorite: after,
            };
            emit(output, &status, &[line])
        }
    }
}
