//! Key-value persistence port and JSON helpers.
//!
//! Engines only ever see `dyn Storage`. `FileStorage` keeps one JSON file per
//! key under `~/.gearforge/`; `MemoryStorage` backs tests and simulations.

use crate::core::constants::STORAGE_DIR_NAME;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("could not encode value: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage rooted at `~/.gearforge/`.
    pub fn in_home_dir() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        Ok(Self::new(home_dir.join(STORAGE_DIR_NAME)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// Load `key` as JSON, falling back to `T::default()` when missing or corrupt.
pub fn load_json_or_default<T: Default + DeserializeOwned>(storage: &dyn Storage, key: &str) -> T {
    let Some(json) = storage.get(key) else {
        return T::default();
    };
    match serde_json::from_str(&json) {
        Ok(value) => value,
        Err(err) => {
            warn!(key, error = %err, "discarding corrupt persisted data");
            T::default()
        }
    }
}

pub fn save_json<T: Serialize>(
    storage: &mut dyn Storage,
    key: &str,
    data: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(data)?;
    storage.set(key, &json)
}
