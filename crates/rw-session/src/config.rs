//! Configuration for a roll session.

/// Default number of history entries kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;
/// Default storage key for the history list.
pub const DEFAULT_STORAGE_KEY: &str = "rollHistory";

/// Configuration for a roll session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Maximum number of history entries kept (at least 1).
    pub history_capacity: usize,
    /// Key the history is stored under. Read by `MemoryStorage::from_config`
    /// and `FileStorage::from_config`.
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the history capacity (clamped to at least 1).
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity.max(1);
        self
    }

    /// Set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
