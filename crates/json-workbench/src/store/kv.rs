//! Flat string key-value backends for snapshot persistence.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::error::WorkbenchError;

/// Flat string-to-string storage with last-writer-wins overwrites.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, WorkbenchError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), WorkbenchError>;
    fn remove_item(&mut self, key: &str) -> Result<(), WorkbenchError>;
}

/// In-memory backend, for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, WorkbenchError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), WorkbenchError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), WorkbenchError> {
        self.items.remove(key);
        Ok(())
    }
}

/// Directory-backed backend: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, WorkbenchError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(WorkbenchError::Store)?;
        Ok(FileStore { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, WorkbenchError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(WorkbenchError::Store(err)),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), WorkbenchError> {
        debug!(key, bytes = value.len(), "store write");
        fs::write(self.path_for(key), value).map_err(WorkbenchError::Store)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), WorkbenchError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(WorkbenchError::Store(err)),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
