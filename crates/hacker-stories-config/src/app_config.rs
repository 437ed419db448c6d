//! Application configuration
//!
//! Configuration loaded from .hacker-stories.toml file.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from .hacker-stories.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the search API (without the `/search` endpoint)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Search term used when no term has been remembered yet
    #[serde(default = "default_search_term")]
    pub default_search_term: String,

    /// Timeout for a single search request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "https://hn.algolia.com/api/v1".to_string()
}

fn default_search_term() -> String {
    "React".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            default_search_term: default_search_term(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Load config from the first file [`crate::load_config_file`] finds, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}
