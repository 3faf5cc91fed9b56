//! In-memory storage

use std::{cell::RefCell, rc::Rc};

use rustc_hash::FxHashMap;

use super::{KeyValueStorage, StorageError};

/// Process-local storage.
///
/// Clones share the same slots, the way two tabs of one browser profile share local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<FxHashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Whether no slot has been written.
    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());

        Ok(())
    }
}
