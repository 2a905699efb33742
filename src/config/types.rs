use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the inventory API lives and how to reach it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Explicit API base URL (e.g., "https://inventory.example.com/api").
    /// When set, origin-based detection is skipped.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Origin the client is served from; used to guess the API location.
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Persistent session storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON key/value file holding the session.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Timing of interactive behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Quiet period before a search edit triggers a fetch (default: 500).
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    /// How long a success notification stays visible (default: 5000).
    #[serde(default = "default_success_notice_ms")]
    pub success_notice_ms: u64,
    /// How long an error notification stays visible (default: 8000).
    #[serde(default = "default_error_notice_ms")]
    pub error_notice_ms: u64,
}

fn default_origin() -> String {
    "http://localhost:8000".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_search_debounce_ms() -> u64 {
    500
}

fn default_success_notice_ms() -> u64 {
    5_000
}

fn default_error_notice_ms() -> u64 {
    8_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            origin: default_origin(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_search_debounce_ms(),
            success_notice_ms: default_success_notice_ms(),
            error_notice_ms: default_error_notice_ms(),
        }
    }
}

impl ApiConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl StorageConfig {
    /// Resolve the storage file path.
    ///
    /// Falls back to `<data_dir>/inventory-client/session.json`, or the
    /// current directory if no data directory is available.
    pub fn resolve_path(&self) -> PathBuf {
        if let Some(path) = &self.path {
            return path.clone();
        }
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("inventory-client").join("session.json")
    }
}

impl UiConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn success_notice(&self) -> Duration {
        Duration::from_millis(self.success_notice_ms)
    }

    pub fn error_notice(&self) -> Duration {
        Duration::from_millis(self.error_notice_ms)
    }
}
