use shared_types::{AppConfig, ClientConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding `api_base_url` on native targets.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
const API_BASE_ENV: &str = "HN_API_BASE_URL";

/// Read `config.toml` and environment overrides into the global
/// `OnceLock`. Only the first call has effect.
///
/// A missing or unparseable file yields the built-in defaults. In the
/// browser there is no file system, so the defaults are always used.
pub fn load_config() -> &'static ClientConfig {
    CONFIG.get_or_init(read_config)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> ClientConfig {
    let _ = dotenvy::dotenv();

    let mut config = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::info!(path = CONFIG_PATH, error = %e, "Config file not found, using defaults");
            ClientConfig::default()
        }
    };

    if let Ok(base) = std::env::var(API_BASE_ENV) {
        if !base.trim().is_empty() {
            config.api_base_url = base.trim().to_string();
        }
    }

    tracing::info!(api_base_url = %config.api_base_url, "Client config loaded");
    config
}

#[cfg(target_arch = "wasm32")]
fn read_config() -> ClientConfig {
    ClientConfig::default()
}

/// Parse the `[client]` table of a config file, defaulting on any error.
pub fn parse_config(contents: &str) -> ClientConfig {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config.client,
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "Failed to parse config, using defaults");
            ClientConfig::default()
        }
    }
}
