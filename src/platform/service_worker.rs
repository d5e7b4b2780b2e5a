//! Service Worker Registration
//!
//! `sw.js` caches the app shell so the list keeps working offline.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use super::describe_js;

const SERVICE_WORKER_URL: &str = "./sw.js";

/// Register the service worker in the background; failures are only logged
pub fn register_service_worker() {
    let Some(window) = web_sys::window() else { return };
    let navigator = window.navigator();

    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        log::info!("Service workers not supported, running without offline cache");
        return;
    }

    let registration = navigator.service_worker().register(SERVICE_WORKER_URL);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(registration).await {
            Ok(_) => log::info!("Service worker registered"),
            Err(e) => log::warn!("Service worker registration failed: {}", describe_js(&e)),
        }
    });
}
