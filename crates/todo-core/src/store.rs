//! Todo Store
//!
//! Owns the ordered list of items and keeps the persisted copy in step with
//! it. Every mutation writes the whole list back before returning, then
//! notifies subscribers.
//!
//! Failures never reach the caller: unreadable data hydrates as an empty list
//! and a rejected write leaves the in-memory list as the source of truth.

use std::fmt;

use crate::clock::{Clock, IdGenerator, SystemClock};
use crate::config::TodoConfig;
use crate::item::{Item, TodoId};
use crate::storage::KeyValueStore;

type Listener = Box<dyn Fn(&[Item])>;

/// The single owner of the to-do list
pub struct TodoStore<S, C = SystemClock> {
    storage: S,
    key: String,
    items: Vec<Item>,
    ids: IdGenerator<C>,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStore> TodoStore<S, SystemClock> {
    /// Hydrate from `storage` using wall-clock ids
    pub fn load(storage: S, config: &TodoConfig) -> Self {
        Self::load_with_clock(storage, config, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> TodoStore<S, C> {
    /// Hydrate from `storage`. Missing or malformed data gives an empty list.
    pub fn load_with_clock(storage: S, config: &TodoConfig, clock: C) -> Self {
        let items = read_items(&storage, &config.todos_key);
        let mut ids = IdGenerator::new(clock);
        for item in &items {
            ids.observe(item.id);
        }
        log::info!("Loaded {} todos from '{}'", items.len(), config.todos_key);

        Self {
            storage,
            key: config.todos_key.clone(),
            items,
            ids,
            listeners: Vec::new(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn get(&self, id: TodoId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Register a callback run with the full list after every mutation
    pub fn subscribe(&mut self, listener: impl Fn(&[Item]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Append a new item. Blank text (after trimming) is ignored.
    ///
    /// Returns the new item's id, `None` when nothing was created.
    pub fn create(&mut self, raw_text: &str) -> Option<TodoId> {
        let text = trim_text(raw_text);
        if text.is_empty() {
            return None;
        }

        let mut id = self.ids.next_id();
        while self.get(id).is_some() {
            id = self.ids.next_id();
        }
        self.items.push(Item::new(id, text));
        log::debug!("Created todo {}", id);

        self.persist();
        self.notify();
        Some(id)
    }

    /// Flip completion of the item with `id`. Unknown ids are ignored.
    ///
    /// Returns the new completion state, `None` when no item matched.
    pub fn toggle_completion(&mut self, id: TodoId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.toggle();
        let completed = item.completed;
        log::debug!("Toggled todo {} -> completed={}", id, completed);

        self.persist();
        self.notify();
        Some(completed)
    }

    /// Write the whole list under the store key, overwriting the prior value
    pub fn persist(&self) {
        let json = match serde_json::to_string(&self.items) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Skipping save, could not encode todos: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &json) {
            log::warn!("Skipping save of {} todos: {}", self.items.len(), e);
        }
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.items);
        }
    }
}

impl<S, C> fmt::Debug for TodoStore<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoStore")
            .field("key", &self.key)
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Trim like the browser's `String.prototype.trim`, which also strips U+FEFF
fn trim_text(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

fn read_items<S: KeyValueStore>(storage: &S, key: &str) -> Vec<Item> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("Starting with an empty list, '{}' unreadable: {}", key, e);
            return Vec::new();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::warn!("Starting with an empty list, '{}' is malformed: {}", key, e);
        Vec::new()
    })
}
