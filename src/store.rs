//! View State Store
//!
//! Reactive mirror of what the UI renders. Uses Leptos reactive_stores for
//! fine-grained reactivity; the `TodoStore` in context stays the source of
//! truth for the list.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::Item;

/// Rendered application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current to-do list, in display order
    pub items: Vec<Item>,
    /// Last known connectivity
    pub online: bool,
    /// Whether the install button is shown
    pub install_offered: bool,
}

impl AppState {
    pub fn new(items: Vec<Item>, online: bool) -> Self {
        Self {
            items,
            online,
            install_offered: false,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_items(store: &AppStore, items: Vec<Item>) {
    store.items().set(items);
}

pub fn store_set_online(store: &AppStore, online: bool) {
    store.online().set(online);
}

pub fn store_set_install_offered(store: &AppStore, offered: bool) {
    store.install_offered().set(offered);
}

/// (completed, total)
pub fn store_progress(store: &AppStore) -> (usize, usize) {
    let items = store.items().read();
    (items.iter().filter(|item| item.completed).count(), items.len())
}
