//! Persistence for the roll history.
//!
//! The history is a JSON array of display strings stored under a single
//! key. Loading never fails: a missing or malformed value yields an empty
//! history.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::{DEFAULT_STORAGE_KEY, SessionConfig};
use crate::error::SessionResult;

/// Somewhere the roll history can be loaded from and saved to.
pub trait HistoryStorage {
    /// Load the stored history, most recent first. Missing or unreadable
    /// data is an empty history.
    fn load(&self) -> Vec<String>;

    /// Replace the stored history.
    fn save(&mut self, entries: &[String]) -> SessionResult<()>;
}

/// Decode a stored JSON array, falling back to an empty list.
fn decode(key: &str, raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(key, error = %e, "discarding malformed roll history");
            Vec::new()
        }
    }
}

/// An in-memory key-value store, shaped like browser local storage.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    key: String,
    slots: HashMap<String, String>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_KEY)
    }
}

impl MemoryStorage {
    /// Create an empty store that keeps the history under `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            slots: HashMap::new(),
        }
    }

    /// Create an empty store keyed by `config.storage_key`.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.storage_key.as_str())
    }

    /// Create a store whose history slot already holds `raw`.
    pub fn with_raw(key: impl Into<String>, raw: impl Into<String>) -> Self {
        let mut storage = Self::new(key);
        storage.slots.insert(storage.key.clone(), raw.into());
        storage
    }

    /// The key the history is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The raw stored value, if any.
    pub fn raw(&self) -> Option<&str> {
        self.slots.get(&self.key).map(String::as_str)
    }
}

impl HistoryStorage for MemoryStorage {
    fn load(&self) -> Vec<String> {
        self.raw()
            .map(|raw| decode(&self.key, raw))
            .unwrap_or_default()
    }

    fn save(&mut self, entries: &[String]) -> SessionResult<()> {
        let raw = serde_json::to_string(entries)?;
        self.slots.insert(self.key.clone(), raw);
        Ok(())
    }
}

/// A file-backed store: the history lives in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    key: String,
    path: PathBuf,
}

impl FileStorage {
    /// Store the history under `key` inside `dir`.
    pub fn new(dir: impl AsRef<Path>, key: impl Into<String>) -> Self {
        let key = key.into();
        let path = dir.as_ref().join(format!("{key}.json"));
        Self { key, path }
    }

    /// Store the history inside `dir`, keyed by `config.storage_key`.
    pub fn from_config(dir: impl AsRef<Path>, config: &SessionConfig) -> Self {
        Self::new(dir, config.storage_key.as_str())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStorage for FileStorage {
    fn load(&self) -> Vec<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => decode(&self.key, &raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no roll history yet");
                Vec::new()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read roll history");
                Vec::new()
            }
        }
    }

    fn save(&mut self, entries: &[String]) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(entries)?;
        // Write beside the target and rename so readers never see half a file.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, raw)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
