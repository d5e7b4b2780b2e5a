//! Browser Storage
//!
//! `localStorage` behind the `KeyValueStore` seam.

use std::rc::Rc;

use todo_core::{KeyValueStore, MemoryStorage, StorageError, StorageResult};

use super::describe_js;

pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// Open `window.localStorage`
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(describe_js(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(describe_js(&e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: describe_js(&e),
        })
    }
}

/// `localStorage` when available, otherwise a session-only memory store
pub fn open_storage() -> Rc<dyn KeyValueStore> {
    match BrowserStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            log::warn!("Falling back to in-memory storage: {}", e);
            Rc::new(MemoryStorage::new())
        }
    }
}
