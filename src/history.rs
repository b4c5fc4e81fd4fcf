//! Capped, newest-first history of readings.
//!
//! History is kept as a JSON array under a single key of an injected
//! [`KeyValueStore`]. The CLI backs it with [`FileStore`], the web UI with
//! browser local storage, and tests with [`MemoryStore`].

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FlamesError, Result};
use crate::flames::Relationship;

/// Storage key the history array lives under.
pub const HISTORY_KEY: &str = "flamesHistory";

/// Default number of entries kept.
pub const HISTORY_LIMIT: usize = 10;

/// A string key-value store, the only capability history needs.
pub trait KeyValueStore {
    /// Read a value, `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Store keeping one `<key>.json` file per key inside a directory.
///
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FlamesError::io(path, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| FlamesError::io(&self.dir, e))?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|e| FlamesError::io(path, e))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FlamesError::io(path, e)),
        }
    }
}

/// One recorded reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub name1: String,
    pub name2: String,
    pub result: Relationship,
    /// Local date and time, formatted by the caller.
    pub timestamp: String,
}

impl HistoryEntry {
    pub fn new(
        name1: impl Into<String>,
        name2: impl Into<String>,
        result: Relationship,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            name1: name1.into(),
            name2: name2.into(),
            result,
            timestamp: timestamp.into(),
        }
    }

    /// `"<name1> & <name2>: <label> (<timestamp>)"`
    pub fn summary(&self) -> String {
        format!(
            "{} & {}: {} ({})",
            self.name1,
            self.name2,
            self.result.label(),
            self.timestamp
        )
    }
}

/// History log over a key-value store.
#[derive(Debug)]
pub struct History<S> {
    store: S,
    limit: usize,
}

impl<S: KeyValueStore> History<S> {
    pub fn new(store: S) -> Self {
        Self::with_limit(store, HISTORY_LIMIT)
    }

    pub fn with_limit(store: S, limit: usize) -> Self {
        Self { store, limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// All stored entries, newest first.
    ///
    /// Entries that cannot be parsed are logged and skipped; a value that
    /// is not a JSON array at all reads as empty.
    pub fn entries(&self) -> Result<Vec<HistoryEntry>> {
        let Some(raw) = self.store.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };
        let values = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(values) => values,
            Err(e) => {
                log::warn!("Ignoring unreadable history: {e}");
                return Ok(Vec::new());
            }
        };

        let entries = values
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<HistoryEntry>(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping unreadable history entry: {e}");
                    None
                }
            })
            .collect();
        Ok(entries)
    }

    /// Prepend an entry, drop anything past the limit, and persist.
    ///
    /// Returns the history as stored.
    pub fn record(&mut self, entry: HistoryEntry) -> Result<Vec<HistoryEntry>> {
        let mut entries = self.entries()?;
        entries.insert(0, entry);
        entries.truncate(self.limit);

        let json = serde_json::to_string(&entries)?;
        self.store.set(HISTORY_KEY, &json)?;
        log::debug!("History now holds {} entries", entries.len());
        Ok(entries)
    }

    /// Remove all entries.
    pub fn clear(&mut self) -> Result<()> {
        log::debug!("Clearing history");
        self.store.remove(HISTORY_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(i: usize) -> HistoryEntry {
        HistoryEntry::new(
            format!("A{i}"),
            format!("B{i}"),
            Relationship::Lovers,
            format!("t{i}"),
        )
    }

    #[test]
    fn test_empty_history() {
        let history = History::new(MemoryStore::new());
        assert!(history.entries().unwrap().is_empty());
    }

    #[test]
    fn test_record_newest_first() {
        let mut history = History::new(MemoryStore::new());
        history.record(entry(1)).unwrap();
        history.record(entry(2)).unwrap();
        let entries = history.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name1, "A2");
        assert_eq!(entries[1].name1, "A1");
    }

    #[test]
    fn test_record_caps_at_limit() {
        let mut history = History::new(MemoryStore::new());
        for i in 0..15 {
            history.record(entry(i)).unwrap();
        }
        let entries = history.entries().unwrap();
        assert_eq!(entries.len(), HISTORY_LIMIT);
        assert_eq!(entries[0].name1, "A14");
        assert_eq!(entries[9].name1, "A5");
    }

    #[test]
    fn test_custom_limit() {
        let mut history = History::with_limit(MemoryStore::new(), 3);
        for i in 0..5 {
            history.record(entry(i)).unwrap();
        }
        assert_eq!(history.entries().unwrap().len(), 3);
        assert_eq!(history.limit(), 3);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new(MemoryStore::new());
        history.record(entry(1)).unwrap();
        history.clear().unwrap();
        assert!(history.entries().unwrap().is_empty());
        assert!(history.store().get(HISTORY_KEY).unwrap().is_none());
        // Clearing twice is fine
        history.clear().unwrap();
    }

    #[test]
    fn test_corrupt_history_reads_empty() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_KEY, "{not json").unwrap();
        let mut history = History::new(store);
        assert!(history.entries().unwrap().is_empty());
        // Recording replaces the corrupt value
        history.record(entry(1)).unwrap();
        assert_eq!(history.entries().unwrap().len(), 1);
    }

    #[test]
    fn test_reads_emoji_labels() {
        let mut store = MemoryStore::new();
        store
            .set(
                HISTORY_KEY,
                r#"[{"name1":"Harry","name2":"Sally","result":"Marriage 💍","timestamp":"1/2/2026, 3:04:05 PM"},
                    {"name1":"Romeo","name2":"Juliet","result":"Lovers ❤️","timestamp":"1/1/2026, 9:00:00 AM"}]"#,
            )
            .unwrap();
        let mut history = History::new(store);

        let entries = history.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].result, Relationship::Marriage);
        assert_eq!(entries[1].result, Relationship::Lovers);

        // Recording keeps the existing entries
        let entries = history.record(entry(1)).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].name1, "Harry");
        assert_eq!(entries[2].name1, "Romeo");
    }

    #[test]
    fn test_skips_unreadable_entries() {
        let mut store = MemoryStore::new();
        store
            .set(
                HISTORY_KEY,
                r#"[{"name1":"A","name2":"B","result":"Rivals","timestamp":"t"},
                    {"name1":"C"},
                    {"name1":"D","name2":"E","result":"Siblings","timestamp":"t"}]"#,
            )
            .unwrap();
        let entries = History::new(store).entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name1, "D");
        assert_eq!(entries[0].result, Relationship::Siblings);
    }

    #[test]
    fn test_stored_json_shape() {
        let mut history = History::new(MemoryStore::new());
        history
            .record(HistoryEntry::new("Ann", "Bo", Relationship::Siblings, "now"))
            .unwrap();
        let raw = history.store().get(HISTORY_KEY).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"[{"name1":"Ann","name2":"Bo","result":"Siblings","timestamp":"now"}]"#
        );
    }

    #[test]
    fn test_summary() {
        let e = HistoryEntry::new("Harry", "Sally", Relationship::Marriage, "1/1/2026");
        assert_eq!(e.summary(), "Harry & Sally: Marriage 💍 (1/1/2026)");
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert!(store.path_for("k").ends_with("nested/k.json"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.remove("k").unwrap();
    }

    #[test]
    fn test_file_store_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        // A regular file where the directory should be
        let mut store = FileStore::new(&blocker);
        let err = store.set("k", "v").unwrap_err();
        assert!(matches!(err, FlamesError::Io { .. }));
    }
}
