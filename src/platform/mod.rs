//! Browser Platform Adapters
//!
//! Thin wrappers over `web-sys` for storage, window events, install and
//! connectivity signals.

mod connectivity;
mod events;
mod install;
mod service_worker;
mod storage;

use wasm_bindgen::JsValue;

pub use connectivity::{is_online, watch_connectivity};
pub use events::on_window_event;
pub use install::{detect_install_environment, run_install_prompt, BeforeInstallPromptEvent};
pub use service_worker::register_service_worker;
pub use storage::open_storage;

/// Best-effort text for a thrown JS value
fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
