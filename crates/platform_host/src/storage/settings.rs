//! Synchronous key/value settings contracts and adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Host service for small persisted settings (raw text per key, usually JSON).
///
/// Reads and writes are synchronous because the browser backing (`localStorage`) is, and callers
/// query settings during render.
pub trait SettingsStore {
    /// Loads the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Replaces the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage rejects the write (quota, disabled storage).
    fn set(&self, key: &str, raw: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Default)]
/// In-memory settings store keyed by string.
///
/// Clones share the same backing map, so a clone handed to a consumer observes writes made
/// through any other clone.
pub struct MemorySettingsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySettingsStore {
    /// Creates a store pre-populated with raw `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            inner: Rc::new(RefCell::new(map)),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, raw: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        Ok(())
    }
}

/// Loads and deserializes a typed settings value, surfacing parse failures.
///
/// # Errors
///
/// Returns an error when the stored text is not valid JSON for `T`.
pub fn try_get_json<S: SettingsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.get(key) else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value))
}

/// Loads a typed settings value, substituting `default` when the key is absent or unparseable.
pub fn get_json_or<S: SettingsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
    default: T,
) -> T {
    try_get_json(store, key).ok().flatten().unwrap_or(default)
}

/// Serializes and saves a typed settings value, overwriting the previous value in full.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn set_json<S: SettingsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct ListingPrefs {
        show_empty: bool,
    }

    #[test]
    fn memory_settings_store_round_trip_and_overwrite() {
        let store = MemorySettingsStore::default();
        let store_obj: &dyn SettingsStore = &store;

        assert_eq!(store_obj.get("pref.key"), None);
        store_obj.set("pref.key", "{\"k\":1}").expect("set");
        assert_eq!(store_obj.get("pref.key"), Some("{\"k\":1}".to_string()));
        store_obj.set("pref.key", "[]").expect("overwrite");
        assert_eq!(store_obj.get("pref.key"), Some("[]".to_string()));
    }

    #[test]
    fn memory_settings_store_clones_share_backing_map() {
        let store = MemorySettingsStore::default();
        let other = store.clone();
        store.set("k", "1").expect("set");
        assert_eq!(other.get("k"), Some("1".to_string()));
    }

    #[test]
    fn typed_helpers_round_trip() {
        let store = MemorySettingsStore::default();
        set_json(&store, "listing", &ListingPrefs { show_empty: true }).expect("save typed");

        let loaded: Option<ListingPrefs> = try_get_json(&store, "listing").expect("load typed");
        assert_eq!(loaded, Some(ListingPrefs { show_empty: true }));
    }

    #[test]
    fn get_json_or_substitutes_default_for_missing_and_malformed_values() {
        let store = MemorySettingsStore::with_entries([("broken", "not json"), ("object", "{}")]);

        assert_eq!(get_json_or(&store, "missing", vec![1_u8]), vec![1_u8]);
        assert_eq!(get_json_or(&store, "broken", Vec::<String>::new()), Vec::<String>::new());
        assert_eq!(get_json_or(&store, "object", vec!["x".to_string()]), vec!["x".to_string()]);
        assert!(try_get_json::<_, Vec<String>>(&store, "broken").is_err());
    }
}
