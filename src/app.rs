//! Todo App
//!
//! Root component: hydrates the list once, wires platform signals into the
//! view store and lays out the page.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{InstallGate, TodoConfig, TodoStore};
use wasm_bindgen::JsCast;

use crate::components::{ConnectivityBadge, InstallButton, NewTodoForm, TodoList};
use crate::context::AppContext;
use crate::platform;
use crate::store::{store_set_install_offered, store_set_items, store_set_online, AppState};

#[component]
pub fn App() -> impl IntoView {
    let config = TodoConfig::default();
    let storage = platform::open_storage();

    let mut todos = TodoStore::load(Rc::clone(&storage), &config);
    let store = Store::new(AppState::new(todos.items().to_vec(), platform::is_online()));
    todos.subscribe(move |items| store_set_items(&store, items.to_vec()));

    let ctx = AppContext::new(todos, InstallGate::new(storage, &config));
    provide_context(store);
    provide_context(ctx);

    platform::watch_connectivity(move |online| store_set_online(&store, online));

    let env = platform::detect_install_environment();
    log::debug!("Install environment: {:?}", env);
    platform::on_window_event("beforeinstallprompt", move |ev| {
        ev.prevent_default();
        let offer = ctx.defer_install_prompt(ev.unchecked_into(), &env);
        store_set_install_offered(&store, offer);
    });
    platform::on_window_event("appinstalled", move |_| {
        log::info!("App installed");
        ctx.mark_install_prompt_shown();
        store_set_install_offered(&store, false);
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Todo"</h1>
                <ConnectivityBadge />
            </header>

            <InstallButton />

            <main class="main-content">
                <NewTodoForm />
                <TodoList />
            </main>
        </div>
    }
}
