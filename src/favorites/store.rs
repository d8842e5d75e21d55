//! Key/value storage for user preferences.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::DirectoryError;
use crate::utils::fs::atomic_write;

/// String key/value storage, the seam between preferences and where they live.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, persisting immediately.
    fn set(&mut self, key: &str, value: String) -> Result<(), DirectoryError>;

    /// Remove `key`, persisting immediately. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), DirectoryError>;
}

/// Volatile store for tests and one-shot sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
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

    fn set(&mut self, key: &str, value: String) -> Result<(), DirectoryError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), DirectoryError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object file.
///
/// The whole file is rewritten atomically on every change. A missing file is an
/// empty store; an unreadable document is logged and treated as empty, and is
/// replaced on the next write.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// `<data dir>/bizdir/storage.json` for the current user.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("bizdir").join("storage.json"))
    }

    /// Open the store at `path`, loading its current contents.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DirectoryError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Ignoring unreadable store {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(DirectoryError::StorageError {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                });
            }
        };
        tracing::debug!("Opened store {} ({} keys)", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `entries` to disk, then adopt them. On failure the store keeps
    /// its previous contents, matching what is on disk.
    fn commit(&mut self, entries: BTreeMap<String, String>) -> Result<(), DirectoryError> {
        let storage_error = |reason: String| DirectoryError::StorageError {
            path: self.path.display().to_string(),
            reason,
        };
        let json =
            serde_json::to_string_pretty(&entries).map_err(|e| storage_error(e.to_string()))?;
        atomic_write(&self.path, json.as_bytes()).map_err(|e| storage_error(format!("{e:#}")))?;
        self.entries = entries;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), DirectoryError> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value);
        self.commit(entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), DirectoryError> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut entries = self.entries.clone();
        entries.remove(key);
        self.commit(entries)
    }
}
