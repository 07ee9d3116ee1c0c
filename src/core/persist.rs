//! # Persisted Values
//!
//! A single string mirrored into a host key-value store, the terminal
//! stand-in for browser local storage.
//!
//! Initialization is two-phase so the mount-time read never writes back:
//!
//! ```text
//! PersistedValue::restore(store, key, default)   → RestoredValue  (read only)
//! RestoredValue::enable_writes()                 → PersistedValue (write on change)
//! ```
//!
//! Writes are best effort. A failing store is logged and otherwise ignored.

use log::{debug, info, warn};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Host key-value persistence: a get/set pair over string keys and values.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

// ============================================================================
// File-backed store
// ============================================================================

/// JSON object file of string keys to string values.
///
/// The whole map is loaded on open and rewritten (atomic rename) on every set.
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store; an
    /// unreadable or malformed file is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!("Ignoring malformed store {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!("Failed to read store {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        debug!("Opened store {} ({} keys)", path.display(), entries.len());
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        atomic_write_json(&self.path, &self.entries)
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

// ============================================================================
// In-memory store
// ============================================================================

#[derive(Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    writes: usize,
}

/// In-memory store. Clones share the same contents, so a caller can keep a
/// handle to inspect what a `PersistedValue` wrote.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls seen so far.
    pub fn write_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .get(key)
            .cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.entries.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }
}

/// Opens the file store at `path`, or an in-memory store when there is none.
pub fn open_store(path: Option<&Path>) -> Box<dyn KeyValueStore> {
    match path {
        Some(path) => Box::new(FileStore::open(path)),
        None => {
            info!("Search term persistence disabled, using in-memory store");
            Box::new(MemoryStore::new())
        }
    }
}

// ============================================================================
// Persisted value
// ============================================================================

/// First phase: the value as read from the store. Cannot write.
pub struct RestoredValue {
    store: Box<dyn KeyValueStore>,
    key: String,
    value: String,
}

impl RestoredValue {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Second phase: every later change is written back under the same key.
    pub fn enable_writes(self) -> PersistedValue {
        PersistedValue {
            store: self.store,
            key: self.key,
            value: self.value,
        }
    }
}

/// A string value that is written to its store on every change.
pub struct PersistedValue {
    store: Box<dyn KeyValueStore>,
    key: String,
    value: String,
}

impl PersistedValue {
    /// Reads `key` from `store`, falling back to `default` when the key is
    /// absent or holds an empty string. Performs no write.
    pub fn restore(store: Box<dyn KeyValueStore>, key: &str, default: &str) -> RestoredValue {
        let value = store
            .get(key)
            .filter(|stored| !stored.is_empty())
            .unwrap_or_else(|| default.to_string());
        debug!("Restored {:?} = {:?}", key, value);
        RestoredValue {
            store,
            key: key.to_string(),
            value,
        }
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    /// Replaces the value and writes it to the store. Setting the current
    /// value again is a no-op.
    pub fn set(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value == self.value {
            return;
        }
        self.value = value;
        if let Err(e) = self.store.set(&self.key, &self.value) {
            warn!("Failed to persist {:?}: {}", self.key, e);
        }
    }
}
