use std::collections::{BTreeMap, HashMap};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::constants::{ITEMS_KEY, SAVED_LISTS_KEY, STATS_KEY, THEME_KEY};
use crate::error::StorageError;
use crate::ledger::StatsLedger;
use crate::options::OptionList;

/// String blobs under fixed keys. The browser's local storage in production.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub type SavedLists = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Missing and corrupt blobs both come back as `None`.
pub fn load_json<T: DeserializeOwned, S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding corrupt {}: {}", key, e);
            None
        }
    }
}

pub fn try_save_json<T: Serialize + ?Sized, S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}

/// Fire-and-forget save; failures are only logged.
pub fn save_json<T: Serialize + ?Sized, S: KeyValueStore + ?Sized>(store: &mut S, key: &str, value: &T) {
    if let Err(e) = try_save_json(store, key, value) {
        log::warn!("Could not persist {}: {}", key, e);
    }
}

pub fn load_items<S: KeyValueStore + ?Sized>(store: &S) -> Option<OptionList> {
    load_json(store, ITEMS_KEY)
}

pub fn save_items<S: KeyValueStore + ?Sized>(store: &mut S, items: &OptionList) {
    save_json(store, ITEMS_KEY, items);
}

pub fn load_stats<S: KeyValueStore + ?Sized>(store: &S) -> Option<StatsLedger> {
    load_json(store, STATS_KEY)
}

pub fn save_stats<S: KeyValueStore + ?Sized>(store: &mut S, stats: &StatsLedger) {
    save_json(store, STATS_KEY, stats);
}

pub fn load_saved_lists<S: KeyValueStore + ?Sized>(store: &S) -> SavedLists {
    load_json(store, SAVED_LISTS_KEY).unwrap_or_default()
}

pub fn save_saved_lists<S: KeyValueStore + ?Sized>(store: &mut S, lists: &SavedLists) {
    save_json(store, SAVED_LISTS_KEY, lists);
}

// Stored as a bare word, not JSON.
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> Theme {
    store.get(THEME_KEY).map(|raw| Theme::parse(&raw)).unwrap_or_default()
}

pub fn save_theme<S: KeyValueStore + ?Sized>(store: &mut S, theme: Theme) {
    if let Err(e) = store.set(THEME_KEY, theme.as_str()) {
        log::warn!("Could not persist {}: {}", THEME_KEY, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(load_items(&store), None);
        let items = OptionList::from_labels(["A", "B"]);
        save_items(&mut store, &items);
        assert_eq!(store.get(ITEMS_KEY).as_deref(), Some(r#"["A","B"]"#));
        assert_eq!(load_items(&store), Some(items));
    }

    #[test]
    fn test_corrupt_stats_load_as_absent() {
        let mut store = MemoryStore::new();
        store.set(STATS_KEY, "{not json").unwrap();
        assert_eq!(load_stats(&store), None);
        store.set(STATS_KEY, r#"{"total":"many"}"#).unwrap();
        assert_eq!(load_stats(&store), None);
    }

    #[test]
    fn test_saved_lists_default_empty() {
        let mut store = MemoryStore::new();
        assert!(load_saved_lists(&store).is_empty());
        store.set(SAVED_LISTS_KEY, "[1,2]").unwrap();
        assert!(load_saved_lists(&store).is_empty());
    }

    #[test]
    fn test_theme_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(load_theme(&store), Theme::Dark);
        save_theme(&mut store, Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(load_theme(&store), Theme::Light);
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(load_theme(&store), Theme::Dark);
    }
}
