//! Configuration
//!
//! Storage keys used by the app. Defaults match the keys existing
//! installations already have on disk.

/// Storage keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Key holding the serialized list
    pub todos_key: String,
    /// Key holding the "install prompt already shown" flag
    pub install_prompt_key: String,
    /// Key holding an optional log level override
    pub log_level_key: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            todos_key: "todos".to_string(),
            install_prompt_key: "installPromptShown".to_string(),
            log_level_key: "logLevel".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let config = TodoConfig::default();
        assert_eq!(config.todos_key, "todos");
        assert_eq!(config.install_prompt_key, "installPromptShown");
        assert_eq!(config.log_level_key, "logLevel");
    }
}
