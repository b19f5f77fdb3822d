//! In-process key-value adapter.
//!
//! Backs tests and the CLI smoke probe; contents vanish with the process.

use super::{StorageAdapter, StorageResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// Volatile map-backed storage adapter.
///
/// Interior mutability keeps the adapter surface `&self` like its durable
/// counterpart; the planner runs single-threaded, so `RefCell` suffices.
#[derive(Debug, Default)]
pub struct MemoryKvStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryKvStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageAdapter for MemoryKvStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryKvStorage;
    use crate::storage::StorageAdapter;

    #[test]
    fn get_returns_none_for_unknown_key() {
        let storage = MemoryKvStorage::new();
        assert_eq!(storage.get("missing").unwrap(), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let storage = MemoryKvStorage::new();
        storage.set("k", "one").unwrap();
        storage.set("k", "two").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("two"));
    }
}
