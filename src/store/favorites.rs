//! Favorites list
//!
//! In-memory list of shows mirrored to a single storage key. Every mutation
//! rewrites the whole list; the in-memory copy only changes after the write
//! succeeded. Storage and parse failures are logged and swallowed.

use tracing::{debug, warn};

use super::KeyValueStore;
use crate::models::Show;

/// Storage key holding the JSON-serialized list
pub const FAVORITES_KEY: &str = "favorites";

pub struct FavoritesStore {
    storage: Box<dyn KeyValueStore>,
    favorites: Vec<Show>,
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("favorites", &self.favorites.len())
            .finish()
    }
}

impl FavoritesStore {
    /// Read the persisted list; missing, unreadable or corrupt data yields
    /// an empty list
    pub fn load(storage: impl KeyValueStore + 'static) -> Self {
        Self::load_boxed(Box::new(storage))
    }

    pub fn load_boxed(storage: Box<dyn KeyValueStore>) -> Self {
        let favorites = match storage.get(FAVORITES_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<Show>>(&json) {
                Ok(list) => dedup_by_id(list),
                Err(e) => {
                    warn!(error = %e, "Failed to parse favorites, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to load favorites, starting empty");
                Vec::new()
            }
        };

        debug!(count = favorites.len(), "Favorites loaded");
        Self { storage, favorites }
    }

    /// Current favorites in insertion order
    pub fn favorites(&self) -> &[Show] {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.favorites.iter().any(|s| s.id == id)
    }

    /// Remove the show if present, append it otherwise.
    ///
    /// Returns the membership after the call. When persisting fails nothing
    /// changes and the previous membership is returned.
    pub fn toggle(&mut self, show: &Show) -> bool {
        let was_favorite = self.is_favorite(show.id);

        let updated: Vec<Show> = if was_favorite {
            self.favorites
                .iter()
                .filter(|s| s.id != show.id)
                .cloned()
                .collect()
        } else {
            let mut list = self.favorites.clone();
            list.push(show.clone());
            list
        };

        let json = match serde_json::to_string(&updated) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, id = show.id, "Failed to serialize favorites");
                return was_favorite;
            }
        };

        if let Err(e) = self.storage.set(FAVORITES_KEY, &json) {
            warn!(error = %e, id = show.id, "Failed to toggle favorite");
            return was_favorite;
        }

        self.favorites = updated;
        debug!(id = show.id, favorite = !was_favorite, "Favorite toggled");
        !was_favorite
    }
}

/// Keep the first record for each id
fn dedup_by_id(list: Vec<Show>) -> Vec<Show> {
    let mut seen = std::collections::HashSet::new();
    list.into_iter().filter(|s| seen.insert(s.id)).collect()
}
