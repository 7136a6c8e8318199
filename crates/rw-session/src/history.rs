//! The bounded roll history.

use tracing::info;

use crate::error::SessionResult;
use crate::storage::HistoryStorage;

/// Most-recent-first list of formatted rolls, capped at a fixed capacity.
///
/// Every mutation saves the new list before adopting it, so a failed save
/// leaves both the stored and the in-memory history as they were.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    entries: Vec<String>,
    capacity: usize,
}

impl HistoryStore {
    /// Create an empty history (capacity is clamped to at least 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Load the history from storage, dropping anything beyond `capacity`.
    pub fn load<S: HistoryStorage + ?Sized>(storage: &S, capacity: usize) -> Self {
        let mut store = Self::new(capacity);
        store.entries = storage.load();
        store.entries.truncate(store.capacity);
        store
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Put `entry` at the front, drop the oldest beyond capacity, and persist.
    pub fn record<S: HistoryStorage + ?Sized>(
        &mut self,
        entry: String,
        storage: &mut S,
    ) -> SessionResult<()> {
        let mut next = Vec::with_capacity(self.capacity);
        next.push(entry);
        next.extend(self.entries.iter().take(self.capacity - 1).cloned());
        storage.save(&next)?;
        self.entries = next;
        Ok(())
    }

    /// Remove every entry and persist the empty list.
    pub fn clear<S: HistoryStorage + ?Sized>(&mut self, storage: &mut S) -> SessionResult<()> {
        storage.save(&[])?;
        self.entries.clear();
        info!("roll history cleared");
        Ok(())
    }
}
