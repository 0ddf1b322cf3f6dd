//! In-memory storage backend.
//!
//! Keeps the serialized file text in memory so the same line codec runs as
//! for the flat file. Intended for embedded usage and tests.

use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::student::StudentRecord;

use super::codec;
use super::traits::{Loaded, RecordStore, StorageError};

fn lock_err(context: &'static str) -> StorageError {
    StorageError::Backend(format!("poisoned lock: {context}"))
}

/// In-memory [`RecordStore`].
///
/// Starts out empty (loading reports `NotFound`) unless seeded with
/// [`MemoryStore::with_contents`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: RwLock<Option<String>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// Creates a store with nothing saved yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose "file" already holds `text`.
    #[must_use]
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: RwLock::new(Some(text.into())),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Makes subsequent saves fail with a backend error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// The currently saved text, if any.
    pub fn contents(&self) -> Result<Option<String>, StorageError> {
        let guard = self.contents.read().map_err(|_| lock_err("memory contents"))?;
        Ok(guard.clone())
    }
}

impl RecordStore for MemoryStore {
    fn save(&self, records: &[StudentRecord]) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("writes disabled".to_string()));
        }

        let mut buf = Vec::new();
        codec::write_records(&mut buf, records)
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        let text = String::from_utf8(buf).map_err(|e| StorageError::Backend(e.to_string()))?;

        let mut guard = self.contents.write().map_err(|_| lock_err("memory contents"))?;
        *guard = Some(text);
        Ok(())
    }

    fn load(&self) -> Result<Loaded, StorageError> {
        let guard = self.contents.read().map_err(|_| lock_err("memory contents"))?;
        let Some(text) = guard.as_deref() else {
            return Err(StorageError::NotFound {
                path: "<memory>".into(),
            });
        };
        codec::read_records(Cursor::new(text)).map_err(|e| StorageError::Backend(e.to_string()))
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_is_not_found() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap_err().is_not_found());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let records = vec![StudentRecord::new("S1", "Alice"), StudentRecord::new("S2", "Bob")];

        store.save(&records).unwrap();

        assert_eq!(store.load().unwrap().records, records);
        assert_eq!(store.contents().unwrap().as_deref(), Some("S1,Alice\nS2,Bob\n"));
    }

    #[test]
    fn test_seeded_contents_skip_malformed() {
        let store = MemoryStore::with_contents("S1,Alice\noops\n");
        let loaded = store.load().unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.skipped, 1);
    }

    #[test]
    fn test_fail_writes_keeps_previous_contents() {
        let store = MemoryStore::with_contents("S1,Alice\n");
        store.set_fail_writes(true);

        let err = store.save(&[]).unwrap_err();
        assert!(err.to_string().contains("writes disabled"));
        assert_eq!(store.contents().unwrap().as_deref(), Some("S1,Alice\n"));
    }
}
