//! In-process list store.

use super::{RawStore, StoreResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// Map-backed store that keeps payloads as serialized text.
///
/// Keeping text rather than typed values means loads go through the same
/// decode path as the SQLite store, including corrupt-data handling.
#[derive(Debug, Default)]
pub struct MemoryListStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a raw payload without any validation.
    pub fn seed_raw(&self, key: &str, value: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Returns the raw payload stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    pub fn remove(&self, key: &str) {
        self.slots.borrow_mut().remove(key);
    }
}

impl RawStore for MemoryListStore {
    fn read_raw(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn write_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        self.seed_raw(key, value);
        Ok(())
    }
}
