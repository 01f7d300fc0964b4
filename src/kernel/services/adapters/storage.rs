//! Key-value store adapters: in-memory and JSON file.

use crate::kernel::services::ports::storage::{KeyValueStore, Result, StorageError};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const STORAGE_FILE: &str = "storage.json";

/// Session-only storage. Values vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<FxHashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_items<T>(&self, f: impl FnOnce(&mut FxHashMap<String, String>) -> T) -> Result<T> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_string()))?;
        Ok(f(&mut items))
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.with_items(|items| items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.with_items(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.with_items(|items| {
            items.remove(key);
        })
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// Storage backed by a single JSON object file (`{"key": "value", ...}`).
///
/// Every call re-reads the file so several handles on the same path stay
/// consistent. Writes go to a sibling temp file and are renamed into place.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Opens the default `storage.json` under the app data directory.
    pub fn open_default() -> Result<Self> {
        let dir = super::paths::ensure_data_dir()?;
        Ok(Self::new(dir.join(STORAGE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> Result<BTreeMap<String, String>> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        match serde_json::from_str::<BTreeMap<String, String>>(&data) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "storage file is not a string map, treating as empty"
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_items(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(items)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        let mut file = std::fs::File::create(&tmp)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        drop(file);
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut BTreeMap<String, String>) -> bool) -> Result<()> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StorageError::Unavailable("file storage lock poisoned".to_string()))?;
        let mut items = self.read_items()?;
        if f(&mut items) {
            self.write_items(&items)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StorageError::Unavailable("file storage lock poisoned".to_string()))?;
        Ok(self.read_items()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.update(|items| items.remove(key).is_some())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/storage.rs"]
mod tests;
