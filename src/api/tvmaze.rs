//! TVMaze API client
//!
//! Read-only access to the public TVMaze catalog.
//! API docs: https://www.tvmaze.com/api

use anyhow::Result;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::models::{Episode, Show};

/// Public TVMaze endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// TVMaze API error types
#[derive(Error, Debug)]
pub enum TvMazeError {
    #[error("Resource not found (404)")]
    NotFound,

    #[error("Rate limited (429)")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

impl TvMazeError {
    /// True when the error (wrapped in anyhow) is a 404
    pub fn is_not_found(err: &anyhow::Error) -> bool {
        matches!(err.downcast_ref::<TvMazeError>(), Some(TvMazeError::NotFound))
    }
}

/// TVMaze API client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TvMazeClient {
    base_url: String,
    client: reqwest::Client,
}

impl Default for TvMazeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TvMazeClient {
    /// Create a client against the public endpoint
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (config override, tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Plain GET with status mapping; no retries
    async fn get<T: for<'de> Deserialize<'de>>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(TvMazeError::from)?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await.map_err(TvMazeError::from)?;
                let parsed: T = serde_json::from_str(&body).map_err(|e| {
                    TvMazeError::InvalidResponse(format!("JSON parse error: {}", e))
                })?;
                Ok(parsed)
            }
            StatusCode::NOT_FOUND => Err(TvMazeError::NotFound.into()),
            StatusCode::TOO_MANY_REQUESTS => Err(TvMazeError::RateLimited.into()),
            status => Err(TvMazeError::ServerError(status.as_u16()).into()),
        }
    }

    /// One page of the full show index (250 shows per page, page 0 first).
    ///
    /// A 404 means the page is past the end of the index.
    pub async fn shows(&self, page: u32) -> Result<Vec<Show>> {
        self.get(&format!("/shows?page={}", page)).await
    }

    /// Full-text search by show name
    pub async fn search(&self, query: &str) -> Result<Vec<Show>> {
        let endpoint = format!("/search/shows?q={}", urlencoding::encode(query));
        let hits: Vec<SearchHit> = self.get(&endpoint).await?;
        Ok(hits.into_iter().map(|h| h.show).collect())
    }

    /// Show details by id
    pub async fn show(&self, id: u64) -> Result<Show> {
        self.get(&format!("/shows/{}", id)).await
    }

    /// All episodes of a show, ordered by season and number
    pub async fn episodes(&self, id: u64) -> Result<Vec<Episode>> {
        self.get(&format!("/shows/{}/episodes", id)).await
    }

    /// Show details and episodes, fetched concurrently
    pub async fn show_with_episodes(&self, id: u64) -> Result<(Show, Vec<Episode>)> {
        tokio::try_join!(self.show(id), self.episodes(id))
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchHit {
    show: Show,
}
