//! Install Prompt Bookkeeping
//!
//! Decides whether the "install app" button may be offered and remembers
//! that it was. Independent of the to-do list.

use crate::config::TodoConfig;
use crate::storage::KeyValueStore;

const SHOWN: &str = "true";

/// Platform hints used to detect an already installed app
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallEnvironment {
    /// `(display-mode: standalone)` media query matches
    pub display_standalone: bool,
    /// iOS `navigator.standalone`
    pub navigator_standalone: bool,
    /// `document.referrer`
    pub referrer: String,
}

impl InstallEnvironment {
    pub fn is_installed(&self) -> bool {
        self.display_standalone
            || self.navigator_standalone
            || self.referrer.contains("android-app://")
    }
}

/// Reads and writes the "prompt shown" flag
pub struct InstallGate<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> InstallGate<S> {
    pub fn new(storage: S, config: &TodoConfig) -> Self {
        Self {
            storage,
            key: config.install_prompt_key.clone(),
        }
    }

    pub fn prompt_shown(&self) -> bool {
        match self.storage.get(&self.key) {
            Ok(value) => value.as_deref() == Some(SHOWN),
            Err(e) => {
                log::warn!("Could not read '{}': {}", self.key, e);
                false
            }
        }
    }

    /// Offer the prompt only to browsers that are not installed yet and
    /// never saw it before
    pub fn should_offer(&self, env: &InstallEnvironment) -> bool {
        !env.is_installed() && !self.prompt_shown()
    }

    /// Record that the prompt was shown or the app installed
    pub fn mark_shown(&self) {
        if let Err(e) = self.storage.set(&self.key, SHOWN) {
            log::warn!("Could not record install prompt: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn browser() -> InstallEnvironment {
        InstallEnvironment {
            referrer: "https://example.org/".to_string(),
            ..InstallEnvironment::default()
        }
    }

    #[test]
    fn test_detects_installed() {
        assert!(!browser().is_installed());
        assert!(InstallEnvironment { display_standalone: true, ..browser() }.is_installed());
        assert!(InstallEnvironment { navigator_standalone: true, ..browser() }.is_installed());
        let twa = InstallEnvironment { referrer: "android-app://org.example.todo/".to_string(), ..browser() };
        assert!(twa.is_installed());
    }

    #[test]
    fn test_offer_once() {
        let storage = MemoryStorage::new();
        let gate = InstallGate::new(&storage, &TodoConfig::default());
        assert!(gate.should_offer(&browser()));

        gate.mark_shown();
        assert!(!gate.should_offer(&browser()));
        assert_eq!(storage.get("installPromptShown").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_not_offered_when_installed() {
        let gate = InstallGate::new(MemoryStorage::new(), &TodoConfig::default());
        let env = InstallEnvironment { display_standalone: true, ..browser() };
        assert!(!gate.should_offer(&env));
    }

    #[test]
    fn test_only_literal_true_counts() {
        let storage = MemoryStorage::new().with_entry("installPromptShown", "yes");
        let gate = InstallGate::new(&storage, &TodoConfig::default());
        assert!(!gate.prompt_shown());
    }
}
