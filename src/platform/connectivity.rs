//! Connectivity Signal

use super::on_window_event;

/// `navigator.onLine`, assumed online when there is no window
pub fn is_online() -> bool {
    web_sys::window()
        .map(|w| w.navigator().on_line())
        .unwrap_or(true)
}

/// Call `on_change` with the current state on every `online`/`offline` event
pub fn watch_connectivity(on_change: impl Fn(bool) + Clone + 'static) {
    for name in ["online", "offline"] {
        let on_change = on_change.clone();
        on_window_event(name, move |_| {
            let online = is_online();
            log::info!("Connectivity changed: online={}", online);
            on_change(online);
        });
    }
}
