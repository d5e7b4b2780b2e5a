//! Install Button Component
//!
//! Shown after the browser reports the app installable, at most once per
//! device.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::platform;
use crate::store::{store_set_install_offered, use_app_store, AppStateStoreFields};

#[component]
pub fn InstallButton() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let install = move |_| {
        let Some(prompt) = ctx.take_install_prompt() else { return };
        spawn_local(async move {
            match platform::run_install_prompt(&prompt).await {
                Ok(outcome) if outcome == "accepted" => log::info!("User accepted the install prompt"),
                Ok(outcome) => log::info!("Install prompt answered: {}", outcome),
                Err(e) => log::warn!("Install prompt failed: {}", e),
            }
            ctx.mark_install_prompt_shown();
            store_set_install_offered(&store, false);
        });
    };

    view! {
        <Show when=move || store.install_offered().get()>
            <button id="installPrompt" class="install-btn" on:click=install>
                "Install app"
            </button>
        </Show>
    }
}
