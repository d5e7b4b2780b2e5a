//! Application Context
//!
//! Owns the `TodoStore` and install bookkeeping for the page's lifetime and
//! hands out a `Copy` handle through the Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use todo_core::{InstallEnvironment, InstallGate, KeyValueStore, TodoId, TodoStore};

use crate::platform::BeforeInstallPromptEvent;

pub type AppTodoStore = TodoStore<Rc<dyn KeyValueStore>>;
pub type AppInstallGate = InstallGate<Rc<dyn KeyValueStore>>;

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    todos: StoredValue<AppTodoStore, LocalStorage>,
    install_gate: StoredValue<AppInstallGate, LocalStorage>,
    /// `beforeinstallprompt` event kept until the user clicks install
    deferred_prompt: StoredValue<Option<BeforeInstallPromptEvent>, LocalStorage>,
}

impl AppContext {
    pub fn new(todos: AppTodoStore, install_gate: AppInstallGate) -> Self {
        Self {
            todos: StoredValue::new_local(todos),
            install_gate: StoredValue::new_local(install_gate),
            deferred_prompt: StoredValue::new_local(None),
        }
    }

    /// Add a to-do; false when the text was blank
    pub fn create_todo(&self, text: &str) -> bool {
        self.todos
            .try_update_value(|todos| todos.create(text))
            .flatten()
            .is_some()
    }

    pub fn toggle_todo(&self, id: TodoId) {
        self.todos.update_value(|todos| {
            todos.toggle_completion(id);
        });
    }

    /// Keep the install event; returns whether the install button should show
    pub fn defer_install_prompt(&self, event: BeforeInstallPromptEvent, env: &InstallEnvironment) -> bool {
        self.deferred_prompt.set_value(Some(event));
        self.install_gate.with_value(|gate| gate.should_offer(env))
    }

    pub fn take_install_prompt(&self) -> Option<BeforeInstallPromptEvent> {
        self.deferred_prompt.try_update_value(Option::take).flatten()
    }

    pub fn mark_install_prompt_shown(&self) {
        self.install_gate.with_value(|gate| gate.mark_shown());
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
