//! # Durable Store Boundary
//!
//! The key-value interface the catalog persists through, plus the two
//! built-in backends.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       DurableStore                                      │
//! │                                                                         │
//! │  get(key) ──► Ok(Some(value))   value previously written               │
//! │          ──► Ok(None)           key absent = empty catalog, NOT error  │
//! │          ──► Err(StorageError)  unreadable medium                      │
//! │                                                                         │
//! │  set(key, value) ──► Ok(())             mirror updated                 │
//! │                  ──► Err(StorageError)  write failed; CatalogStore     │
//! │                                         reports the divergence         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is always written as one full-list snapshot under
//! [`PRODUCTS_KEY`]. Bulk delete persists once, not once per id. At this
//! system's scale a full snapshot per mutation is fine; it is the known
//! scalability boundary of this design, so a future incremental backend
//! only needs to replace this trait's implementation.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::StorageError;

/// The fixed key the product snapshot lives under.
pub const PRODUCTS_KEY: &str = "products";

// =============================================================================
// Trait
// =============================================================================

/// A string-keyed durable store.
///
/// Reads and writes may fail but are treated as short operations; there is
/// no timeout or cancellation at this boundary.
pub trait DurableStore {
    /// Reads the value under `key`. Absent keys are `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

// =============================================================================
// In-Memory Backend
// =============================================================================

/// A HashMap-backed store for tests and ephemeral sessions.
///
/// Counts writes so tests can assert persistence happened exactly once per
/// logical mutation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Pre-seeds a key, bypassing the write counter.
    pub fn seeded(key: &str, value: &str) -> Self {
        let mut store = MemoryStore::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Total number of `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl DurableStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes += 1;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// File Backend
// =============================================================================

/// A directory-backed store: one file per key.
///
/// The local-storage analogue for a desktop process. Values are written
/// with a temp-file-then-rename so a crash mid-write leaves the previous
/// snapshot intact rather than a truncated one.
#[derive(Debug)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Opens (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StorageError::io(root.display().to_string(), e))?;
        Ok(JsonFileStore { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl DurableStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(key, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let tmp = self.root.join(format!("{key}.json.tmp"));

        fs::write(&tmp, value).map_err(|e| StorageError::io(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| StorageError::io(key, e))?;

        debug!(key = %key, bytes = value.len(), "Snapshot written");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_absent_key_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("products").unwrap().is_none());
    }

    #[test]
    fn test_memory_store_round_trip_and_write_count() {
        let mut store = MemoryStore::new();
        store.set("products", "[]").unwrap();
        store.set("products", "[1]").unwrap();

        assert_eq!(store.get("products").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path()).unwrap();

        assert!(store.get("products").unwrap().is_none());
        store.set("products", r#"[{"id":"1"}]"#).unwrap();
        assert_eq!(
            store.get("products").unwrap().as_deref(),
            Some(r#"[{"id":"1"}]"#)
        );

        // a fresh handle over the same directory sees the same data
        let reopened = JsonFileStore::open(dir.path()).unwrap();
        assert!(reopened.get("products").unwrap().is_some());
    }
}
