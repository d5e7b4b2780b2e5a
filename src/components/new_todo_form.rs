//! New Todo Form Component
//!
//! Single text entry; the button or Enter submits.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.create_todo(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                id="todoInput"
                type="text"
                placeholder="What needs doing?"
                autocomplete="off"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
