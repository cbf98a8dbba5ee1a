//! Data structures and types for mazetui
//!
//! Contains the shared catalog models:
//! - **Show**: a TVMaze series record (also the persisted favorites format)
//! - **Episode**: one installment of a show
//! - **Season**: episodes grouped by season number

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

// =============================================================================
// Show Models
// =============================================================================

/// Pair of image URLs at two resolutions
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageLinks {
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
}

impl ImageLinks {
    /// Best available URL, preferring the original resolution
    pub fn best(&self) -> Option<&str> {
        self.original.as_deref().or(self.medium.as_deref())
    }
}

/// Weekly airing schedule
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Time of day, e.g. "22:00" (empty when unknown)
    #[serde(default)]
    pub time: String,
    /// Weekday names, e.g. ["Monday", "Thursday"]
    #[serde(default)]
    pub days: Vec<String>,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty() && self.time.is_empty()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = if self.days.is_empty() {
            "-".to_string()
        } else {
            self.days.join(", ")
        };
        if self.time.is_empty() {
            write!(f, "{}", days)
        } else {
            write!(f, "{} at {}", days, self.time)
        }
    }
}

/// A television series from the TVMaze catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub image: Option<ImageLinks>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub schedule: Schedule,
}

impl Show {
    /// Summary with markup removed
    pub fn plain_summary(&self) -> String {
        self.summary.as_deref().map(strip_markup).unwrap_or_default()
    }

    pub fn genres_str(&self) -> String {
        self.genres.join(", ")
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref().and_then(|i| i.best())
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>6}  {}", self.id, self.name)?;
        if !self.genres.is_empty() {
            write!(f, " [{}]", self.genres_str())?;
        }
        Ok(())
    }
}

// =============================================================================
// Episode Models
// =============================================================================

/// A single episode of a show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub season: u32,
    /// Episode number within the season (specials have none)
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: Option<ImageLinks>,
}

impl Episode {
    /// Short code like "S1E3", or "S1 Special" for unnumbered episodes
    pub fn code(&self) -> String {
        match self.number {
            Some(n) => format!("S{}E{}", self.season, n),
            None => format!("S{} Special", self.season),
        }
    }

    pub fn plain_summary(&self) -> String {
        self.summary.as_deref().map(strip_markup).unwrap_or_default()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref().and_then(|i| i.best())
    }
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.name)
    }
}

// =============================================================================
// Season Grouping
// =============================================================================

/// Episodes of one season, in source order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Season {
    pub number: u32,
    pub episodes: Vec<Episode>,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Season {} ({} episodes)", self.number, self.episodes.len())
    }
}

/// Partition episodes by season number.
///
/// Order within each season is the input order; seasons iterate ascending.
pub fn group_by_season(episodes: impl IntoIterator<Item = Episode>) -> BTreeMap<u32, Vec<Episode>> {
    let mut seasons: BTreeMap<u32, Vec<Episode>> = BTreeMap::new();
    for episode in episodes {
        seasons.entry(episode.season).or_default().push(episode);
    }
    seasons
}

/// Same grouping as [`group_by_season`], as an ordered list
pub fn seasons(episodes: impl IntoIterator<Item = Episode>) -> Vec<Season> {
    group_by_season(episodes)
        .into_iter()
        .map(|(number, episodes)| Season { number, episodes })
        .collect()
}

// =============================================================================
// Markup
// =============================================================================

/// Any tag, including one cut off at the end of the text
static TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[^>]*>?").ok());

/// Strip tags and decode the handful of entities TVMaze summaries use
pub fn strip_markup(text: &str) -> String {
    let stripped = match TAG.as_ref() {
        Some(re) => re.replace_all(text, "").into_owned(),
        None => text.to_string(),
    };

    stripped
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}
