//! Key-Value Storage
//!
//! Synchronous string-to-string persistence surface.
//! Implementations: browser `localStorage` (in the app crate), in-memory.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageResult;

/// Synchronous key-value persistence
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, overwriting any prior value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

/// In-memory store, used off-browser and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, not counted as a write
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }

    /// Number of successful `set` calls
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("todos").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let storage = MemoryStorage::new();
        storage.set("k", "a").unwrap();
        storage.set("k", "b").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("b"));
        assert_eq!(storage.write_count(), 2);
    }

    #[test]
    fn test_shared_through_rc() {
        let storage = Rc::new(MemoryStorage::new().with_entry("k", "v"));
        let handle = Rc::clone(&storage);
        handle.set("k", "w").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("w"));
        assert_eq!(storage.write_count(), 1);
    }
}
