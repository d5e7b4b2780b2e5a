//! Install Prompt Bindings
//!
//! `BeforeInstallPromptEvent` is not part of `web-sys`; bind the two members
//! we use by hand.

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use todo_core::InstallEnvironment;

use super::describe_js;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = web_sys::Event)]
    #[derive(Debug, Clone)]
    pub type BeforeInstallPromptEvent;

    #[wasm_bindgen(method, catch)]
    fn prompt(this: &BeforeInstallPromptEvent) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, getter = userChoice)]
    fn user_choice(this: &BeforeInstallPromptEvent) -> js_sys::Promise;
}

#[derive(Deserialize)]
struct UserChoice {
    outcome: String,
}

/// Show the native install dialog and wait for the user's answer
/// (`"accepted"` or `"dismissed"`)
pub async fn run_install_prompt(event: &BeforeInstallPromptEvent) -> Result<String, String> {
    let shown = event.prompt().map_err(|e| describe_js(&e))?;
    JsFuture::from(shown).await.map_err(|e| describe_js(&e))?;

    let choice = JsFuture::from(event.user_choice()).await.map_err(|e| describe_js(&e))?;
    let choice: UserChoice = serde_wasm_bindgen::from_value(choice).map_err(|e| e.to_string())?;
    Ok(choice.outcome)
}

/// Gather the hints that tell whether we already run as an installed app
pub fn detect_install_environment() -> InstallEnvironment {
    let Some(window) = web_sys::window() else {
        return InstallEnvironment::default();
    };

    let display_standalone = window
        .match_media("(display-mode: standalone)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);

    // iOS only, absent elsewhere
    let navigator_standalone = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("standalone"))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false);

    let referrer = window.document().map(|d| d.referrer()).unwrap_or_default();

    InstallEnvironment {
        display_standalone,
        navigator_standalone,
        referrer,
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    // Chromium only fires `beforeinstallprompt` with 192px and 512px icons
    #[test]
    fn test_manifest_declares_install_icons() {
        let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let manifest: serde_json::Value =
            serde_json::from_str(include_str!("../../public/manifest.webmanifest")).unwrap();
        let icons = manifest["icons"].as_array().expect("icons array");

        for size in ["192x192", "512x512"] {
            let icon = icons
                .iter()
                .find(|icon| icon["sizes"] == size)
                .unwrap_or_else(|| panic!("missing {} icon", size));
            assert_eq!(icon["type"], "image/png");
            let src = icon["src"].as_str().unwrap();
            assert!(public.join(src).is_file(), "{} not under public/", src);
        }
        assert_eq!(manifest["display"], "standalone");
    }
}
