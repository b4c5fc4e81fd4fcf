//! History persistence tests.
//!
//! These exercise the file-backed store the CLI uses:
//! - Readings survive reopening the store
//! - The cap holds across sessions
//! - Clearing removes the file

use flames_rs::{FileStore, HISTORY_KEY, History, KeyValueStore, Relationship, Session};

#[test]
fn test_history_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut session = Session::new(History::new(FileStore::new(dir.path())));
        session.calculate("Harry", "Sally", "t1").unwrap();
        session.calculate("David", "Sara", "t2").unwrap();
    }

    let history = History::new(FileStore::new(dir.path()));
    let entries = history.entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name1, "David");
    assert_eq!(entries[0].result, Relationship::Enemies);
    assert_eq!(entries[1].name1, "Harry");
    assert_eq!(entries[1].result, Relationship::Marriage);
}

#[test]
fn test_cap_holds_across_sessions() {
    let dir = tempfile::tempdir().unwrap();

    for round in 0..3 {
        let mut session = Session::new(History::new(FileStore::new(dir.path())));
        for i in 0..5 {
            session
                .calculate(&format!("Name{round}{i}"), "Other", "t")
                .unwrap();
        }
    }

    let entries = History::new(FileStore::new(dir.path())).entries().unwrap();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0].name1, "Name24");
    assert_eq!(entries[9].name1, "Name10");
}

#[test]
fn test_clear_removes_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let path = store.path_for(HISTORY_KEY);

    let mut session = Session::new(History::new(store));
    session.calculate("Alice", "Bob", "t").unwrap();
    assert!(path.exists());

    session.history_mut().clear().unwrap();
    assert!(!path.exists());
    assert!(session.history().entries().unwrap().is_empty());
}

#[test]
fn test_corrupt_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    store.set(HISTORY_KEY, "[{\"name1\": 3}]").unwrap();

    let history = History::new(store);
    assert!(history.entries().unwrap().is_empty());
}
