//! Window Event Listeners

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Listen to `name` on `window` for the lifetime of the page
pub fn on_window_event(name: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window, not listening for '{}'", name);
        return;
    };

    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(e) = window.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref()) {
        log::warn!("Could not listen for '{}': {}", name, super::describe_js(&e));
    }
    cb.forget();
}
