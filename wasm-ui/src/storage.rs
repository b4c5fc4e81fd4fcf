//! Browser local storage as a history store.

use flames_rs::{FlamesError, History, HistoryEntry, KeyValueStore, Result};
use gloo::storage::{LocalStorage, Storage};
use wasm_bindgen::JsValue;

/// [`KeyValueStore`] over `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

fn js_error(e: JsValue) -> FlamesError {
    FlamesError::Storage(format!("{e:?}"))
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw().get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw().set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        LocalStorage::raw().remove_item(key).map_err(js_error)
    }
}

pub fn history() -> History<LocalStorageStore> {
    History::new(LocalStorageStore)
}

/// Stored history, or empty if storage is unavailable.
pub fn load_history() -> Vec<HistoryEntry> {
    history().entries().unwrap_or_else(|e| {
        log::error!("Could not load history: {e}");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flames_rs::{HISTORY_KEY, Relationship};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_history() {
        let mut h = history();
        h.clear().unwrap();
        h.record(HistoryEntry::new("Ann", "Bo", Relationship::Lovers, "t"))
            .unwrap();
        assert_eq!(load_history().len(), 1);
        assert!(LocalStorageStore.get(HISTORY_KEY).unwrap().is_some());
        h.clear().unwrap();
        assert!(load_history().is_empty());
    }
}
