//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{store_progress, use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div id="todoList" class="todo-list">
            // Keyed on completion too, so a toggled row re-renders
            <For
                each=move || store.items().get()
                key=|item| (item.id, item.completed)
                children=move |item| view! { <TodoRow item=item /> }
            />
        </div>
        <p class="todo-count">
            {move || {
                let (done, total) = store_progress(&store);
                format!("{} of {} done", done, total)
            }}
        </p>
    }
}
