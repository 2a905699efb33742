//! Client configuration: TOML file, environment and CLI overrides.

mod base_url;
mod loader;
mod types;

pub use base_url::{detect_from_origin, resolve_api_base, resolve_api_base_with, API_URL_ENV};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, StorageConfig, UiConfig};
