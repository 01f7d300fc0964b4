//! Key-value persistence contract.
//!
//! Modelled after origin-scoped local storage: string keys, string values,
//! a missing key is not an error.

use std::fmt;

#[derive(Debug)]
pub enum StorageError {
    /// The backing store cannot be reached at all (no data dir, lock poisoned, ...).
    Unavailable(String),
    Io(std::io::Error),
    /// The backing file exists but is not a JSON object of strings.
    Corrupt(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "storage unavailable: {}", msg),
            StorageError::Io(e) => write!(f, "storage io error: {}", e),
            StorageError::Corrupt(msg) => write!(f, "storage content corrupt: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        StorageError::Io(value)
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;

pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;

    /// Short label for diagnostics ("memory", a file path, ...).
    fn describe(&self) -> String;
}
