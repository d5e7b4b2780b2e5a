use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// "Online" / "Offline" label
#[component]
pub fn ConnectivityBadge() -> impl IntoView {
    let store = use_app_store();

    view! {
        <span
            id="status"
            class=move || if store.online().get() { "status online" } else { "status offline" }
        >
            {move || if store.online().get() { "Online" } else { "Offline" }}
        </span>
    }
}
