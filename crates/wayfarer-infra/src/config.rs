//! Configuration loading.
//!
//! Reads `config.toml` from the data directory (missing file means all
//! defaults), then applies environment overrides. Both backend addresses go
//! through here so neither is baked into the binary.

use std::path::Path;

use anyhow::Context;

use wayfarer_types::config::ClientConfig;

/// Name of the config file inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Environment override for the chat backend base URL.
pub const CHAT_URL_ENV: &str = "WAYFARER_CHAT_URL";

/// Environment override for the search backend base URL.
pub const SEARCH_URL_ENV: &str = "WAYFARER_SEARCH_URL";

/// Load the client configuration from `{data_dir}/config.toml` and the
/// environment.
///
/// Precedence: environment variables > config file > built-in defaults.
pub async fn load_config(data_dir: &Path) -> anyhow::Result<ClientConfig> {
    let path = data_dir.join(CONFIG_FILE);

    let mut config = match tokio::fs::read_to_string(&path).await {
        Ok(text) => toml::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => ClientConfig::default(),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", path.display()));
        }
    };

    if let Ok(url) = std::env::var(CHAT_URL_ENV) {
        config.backend.chat_base_url = url;
    }
    if let Ok(url) = std::env::var(SEARCH_URL_ENV) {
        config.backend.search_base_url = url;
    }

    Ok(config)
}
