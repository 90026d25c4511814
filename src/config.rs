//! Client configuration, read once at startup.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const CONFIG_KEY: &str = "chromatune.config";
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_FILE: &str = "config.json";
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_DIR: &str = "chromatune";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[cfg(target_arch = "wasm32")]
    #[error("local storage error: {0}")]
    Storage(#[from] gloo_storage::errors::StorageError),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Toasts disappear after this many milliseconds.
    #[serde(default = "default_notification_ttl_ms")]
    pub notification_ttl_ms: u32,
    #[serde(default)]
    pub clamp_match_percent: bool,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_notification_ttl_ms() -> u32 {
    4000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            notification_ttl_ms: default_notification_ttl_ms(),
            clamp_match_percent: false,
        }
    }
}

impl AppConfig {
    fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = if trimmed.is_empty() {
            default_api_base_url()
        } else {
            trimmed.to_string()
        };
        self
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(raw)?;
        Ok(config.normalized())
    }
}

#[cfg(target_arch = "wasm32")]
fn read_config() -> Result<Option<AppConfig>, ConfigError> {
    match LocalStorage::get::<AppConfig>(CONFIG_KEY) {
        Ok(config) => Ok(Some(config.normalized())),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> Result<Option<AppConfig>, ConfigError> {
    let Some(path) = dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE)) else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(&path)?;
    AppConfig::from_json(&raw).map(Some)
}

/// Load the stored config, falling back to defaults when absent or unreadable.
pub fn load_config() -> AppConfig {
    match read_config() {
        Ok(Some(config)) => {
            tracing::info!(api_base_url = %config.api_base_url, "loaded client config");
            config
        }
        Ok(None) => AppConfig::default(),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unreadable client config");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.notification_ttl_ms, 4000);
        assert!(!config.clamp_match_percent);
    }

    #[test]
    fn base_url_is_trimmed() {
        let config =
            AppConfig::from_json(r#"{"api_base_url":"https://api.example.com/ ","clamp_match_percent":true}"#)
                .unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert!(config.clamp_match_percent);
    }

    #[test]
    fn blank_base_url_falls_back() {
        let config = AppConfig::from_json(r#"{"api_base_url":"  "}"#).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(matches!(
            AppConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
