//! Client configuration types.
//!
//! `ClientConfig` represents `~/.wayfarer/config.toml`. Both backend base
//! URLs live here so neither address is baked into the code; environment
//! overrides are applied by the loader in `wayfarer-infra`. All fields have
//! sensible local-development defaults.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Wayfarer client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub backend: BackendConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
        }
    }
}

/// Base URLs of the two backend services.
///
/// The chat assistant and the listings search are separately hosted
/// services; each URL is the prefix in front of the `/chat` route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Chat assistant service base URL.
    #[serde(default = "default_chat_base_url")]
    pub chat_base_url: String,

    /// Listings search service base URL.
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,
}

fn default_chat_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_search_base_url() -> String {
    "http://localhost:8001".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            chat_base_url: default_chat_base_url(),
            search_base_url: default_search_base_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ClientConfig::default();
        assert_eq!(config.backend.chat_base_url, "http://localhost:8000");
        assert_eq!(config.backend.search_base_url, "http://localhost:8001");
    }

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config.backend.chat_base_url, "http://localhost:8000");
        assert_eq!(config.backend.search_base_url, "http://localhost:8001");
    }

    #[test]
    fn test_deserialize_with_values() {
        let toml_str = r#"
[backend]
chat_base_url = "https://assistant.example.com"
search_base_url = "https://search.example.com"
"#;
        let config: ClientConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.backend.chat_base_url,
            "https://assistant.example.com"
        );
        assert_eq!(
            config.backend.search_base_url,
            "https://search.example.com"
        );
    }

    #[test]
    fn test_partial_backend_section() {
        let toml_str = r#"
[backend]
search_base_url = "https://search.example.com"
"#;
        let config: ClientConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.chat_base_url, "http://localhost:8000");
        assert_eq!(
            config.backend.search_base_url,
            "https://search.example.com"
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ClientConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: ClientConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.backend.chat_base_url, config.backend.chat_base_url);
    }
}
