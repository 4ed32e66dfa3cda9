use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://hn.algolia.com/api/v1";
pub const DEFAULT_ITEM_BASE_URL: &str = "https://news.ycombinator.com/item?id=";

/// Endpoints the client talks to.
///
/// Loaded from the `[client]` table of `config.toml`. Every field has a
/// default so a missing or partial file still yields a working client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the search and user-lookup API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Prefix that turns a result id into a discussion link.
    #[serde(default = "default_item_base_url")]
    pub item_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_item_base_url() -> String {
    DEFAULT_ITEM_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            item_base_url: default_item_base_url(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub client: ClientConfig,
}
