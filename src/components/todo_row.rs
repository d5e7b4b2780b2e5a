use leptos::prelude::*;
use todo_core::Item;

use crate::context::use_app_context;

/// One to-do with its completion checkbox
#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;
    let class = if item.completed { "todo-item completed" } else { "todo-item" };

    view! {
        <div class=class>
            <input
                type="checkbox"
                checked=item.completed
                on:change=move |_| ctx.toggle_todo(id)
            />
            <span>{item.text}</span>
        </div>
    }
}
