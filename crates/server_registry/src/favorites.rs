//! Persisted favorite-server registry.

use std::rc::Rc;

use platform_host::{get_json_or, set_json, SettingsStore};
use serde_json::Value;

use crate::server::{ServerIdentifier, ServerSummary};

/// Settings key holding the JSON array of favorited identifiers.
pub const FAVORITE_SERVERS_KEY: &str = "favoriteServers";

/// Ordered, duplicate-free set of favorited servers backed by a [`SettingsStore`].
///
/// Nothing is cached: every query re-reads the store, so registries sharing a store (or other
/// code writing the key) always agree. Unreadable stored data counts as an empty set; non-string
/// entries inside a stored array are ignored but kept in place on write.
#[derive(Clone)]
pub struct FavoritesRegistry {
    store: Rc<dyn SettingsStore>,
}

impl FavoritesRegistry {
    /// Creates a registry persisting through `store`.
    pub fn new(store: Rc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    fn stored_entries(&self) -> Vec<Value> {
        get_json_or(self.store.as_ref(), FAVORITE_SERVERS_KEY, Vec::new())
    }

    /// Returns the favorited identifiers, oldest first.
    pub fn favorites(&self) -> Vec<ServerIdentifier> {
        self.stored_entries()
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect()
    }

    /// Returns whether `server` is favorited; `None` is never favorited and does not touch the
    /// store.
    pub fn is_favorite(&self, server: Option<&ServerIdentifier>) -> bool {
        let Some(server) = server else {
            return false;
        };
        self.stored_entries()
            .iter()
            .any(|entry| entry.as_str() == Some(server.as_str()))
    }

    /// Flips the favorite status of `server` and persists the whole set.
    ///
    /// A favorited server loses its first occurrence; any other server is appended as the newest
    /// entry. `None` is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the write fails.
    pub fn toggle_favorite(&self, server: Option<&ServerIdentifier>) -> Result<(), String> {
        let Some(server) = server else {
            return Ok(());
        };
        let mut entries = self.stored_entries();
        match entries
            .iter()
            .position(|entry| entry.as_str() == Some(server.as_str()))
        {
            Some(index) => {
                entries.remove(index);
            }
            None => entries.push(Value::String(server.as_str().to_string())),
        }
        set_json(self.store.as_ref(), FAVORITE_SERVERS_KEY, &entries)
    }

    /// [`Self::is_favorite`] for a listed server.
    pub fn is_favorite_server(&self, server: Option<&ServerSummary>) -> bool {
        self.is_favorite(server.map(ServerSummary::identifier).as_ref())
    }

    /// [`Self::toggle_favorite`] for a listed server.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the write fails.
    pub fn toggle_favorite_server(&self, server: Option<&ServerSummary>) -> Result<(), String> {
        self.toggle_favorite(server.map(ServerSummary::identifier).as_ref())
    }
}
