//! Favorites and theme preference, persisted in a key/value store.
//!
//! The favorites set is stored as a JSON array of business ids under the
//! `favorites` key and rewritten in full on every change. The theme lives
//! under its own `theme` key of the same store. [`JsonFileStore`] keeps both
//! in one file so they survive between runs.

mod store;
mod theme;

pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use theme::{ThemePreference, ThemeStore};

use crate::constants::FAVORITES_KEY;
use crate::core::DirectoryError;

/// Ordered set of favorite business ids.
pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
    ids: Vec<usize>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Load favorites from `store`. Stored data that is not a JSON array of
    /// ids loads as an empty set.
    pub fn new(store: S) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            Some(raw) => serde_json::from_str::<Vec<usize>>(&raw).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable favorites: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };
        let mut favorites = Self { store, ids: Vec::new() };
        for id in ids {
            if !favorites.ids.contains(&id) {
                favorites.ids.push(id);
            }
        }
        favorites
    }

    /// Add `id` if absent, remove it if present, and persist. Returns whether
    /// `id` is a favorite afterwards.
    ///
    /// When saving fails the set is left as it was.
    pub fn toggle(&mut self, id: usize) -> Result<bool, DirectoryError> {
        let mut ids = self.ids.clone();
        let now_favorite = match ids.iter().position(|&f| f == id) {
            Some(pos) => {
                ids.remove(pos);
                false
            }
            None => {
                ids.push(id);
                true
            }
        };
        self.commit(ids)?;
        tracing::debug!("Business {} favorite: {}", id, now_favorite);
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, id: usize) -> bool {
        self.ids.contains(&id)
    }

    /// Favorite ids in the order they were added.
    pub fn all(&self) -> &[usize] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Remove every favorite and persist the empty set.
    pub fn clear(&mut self) -> Result<(), DirectoryError> {
        self.commit(Vec::new())
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Save `ids`, then adopt them.
    fn commit(&mut self, ids: Vec<usize>) -> Result<(), DirectoryError> {
        let json = serde_json::to_string(&ids).map_err(|e| DirectoryError::Other {
            message: format!("Failed to encode favorites: {e}"),
        })?;
        self.store.set(FAVORITES_KEY, json)?;
        self.ids = ids;
        Ok(())
    }
}
