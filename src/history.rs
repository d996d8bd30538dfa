//! Most-recent-first list of completed calculations.

use crate::error::Result;
use crate::storage::{HISTORY_KEY, Storage};
use std::collections::VecDeque;

/// Number of entries kept unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Completed expressions such as `"5 + 3 = 8"`, newest first.
#[derive(Clone, Debug, PartialEq)]
pub struct History {
    entries: VecDeque<String>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// Load the saved history.
    ///
    /// Unreadable data is logged and replaced by an empty history rather
    /// than failing startup.
    pub fn load(storage: &impl Storage, limit: usize) -> Self {
        let mut history = Self::new(limit);
        let Some(raw) = storage.get(HISTORY_KEY) else {
            return history;
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(entries) => {
                history.entries = entries.into_iter().take(limit).collect();
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring corrupt history");
            }
        }

        history
    }

    pub fn save(&self, storage: &mut impl Storage) -> Result<()> {
        let entries: Vec<&String> = self.entries.iter().collect();
        // Serializing a list of strings cannot fail.
        let json = serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string());
        storage.set(HISTORY_KEY, &json)
    }

    /// Add an entry at the front, dropping the oldest beyond the limit.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push_front(entry.into());
        self.entries.truncate(self.limit);
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

/// The part of a history entry that seeds a new calculation: everything
/// before the first `=`.
pub fn reuse_seed(entry: &str) -> &str {
    entry.split('=').next().unwrap_or_default().trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_push_is_most_recent_first() {
        let mut history = History::default();
        history.push("1 + 1 = 2");
        history.push("2 + 2 = 4");
        let entries: Vec<&str> = history.entries().collect();
        assert_eq!(entries, vec!["2 + 2 = 4", "1 + 1 = 2"]);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = History::default();
        for i in 0..12 {
            history.push(format!("{i} + 0 = {i}"));
        }
        assert_eq!(history.len(), 10);
        assert_eq!(history.get(0), Some("11 + 0 = 11"));
        assert_eq!(history.get(9), Some("2 + 0 = 2"));
        assert_eq!(history.get(10), None);
    }

    #[test]
    fn test_huge_limit_does_not_preallocate() {
        let mut history = History::load(&MemoryStorage::new(), usize::MAX);
        history.push("1 + 1 = 2");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_round_trip_through_storage() {
        let mut storage = MemoryStorage::new();
        let mut history = History::default();
        history.push("5 ÷ 0 = Error");
        history.push("6 × 7 = 42");
        history.save(&mut storage).unwrap();

        let loaded = History::load(&storage, DEFAULT_HISTORY_LIMIT);
        assert_eq!(loaded, history);
    }

    #[test]
    fn test_load_truncates_to_limit() {
        let mut storage = MemoryStorage::new();
        storage
            .set(HISTORY_KEY, r#"["a = 1", "b = 2", "c = 3"]"#)
            .unwrap();
        let loaded = History::load(&storage, 2);
        assert_eq!(loaded.entries().collect::<Vec<_>>(), vec!["a = 1", "b = 2"]);
    }

    #[test]
    fn test_corrupt_history_loads_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(HISTORY_KEY, "not json").unwrap();
        assert!(History::load(&storage, DEFAULT_HISTORY_LIMIT).is_empty());
    }

    #[test]
    fn test_reuse_seed() {
        assert_eq!(reuse_seed("5 + 3 = 8"), "5 + 3");
        assert_eq!(reuse_seed("5 + 3 = 8 × 2 = 16"), "5 + 3");
        assert_eq!(reuse_seed("  42  "), "42");
    }
}
