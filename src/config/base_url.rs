//! API base URL resolution.
//!
//! The API is normally mounted under `/api` on the same origin the client is
//! served from. Local development setups are the exception: a frontend on
//! port 3000 sits behind a reverse proxy that forwards `/api`, anything else
//! on localhost talks to the development server on port 8000 directly.

use reqwest::Url;

use super::loader::ConfigError;
use super::types::ApiConfig;

/// Environment variable overriding the configured API base URL.
pub const API_URL_ENV: &str = "INVENTORY_API_URL";

const DEV_SERVER_API: &str = "http://localhost:8000/api";

/// Resolve the API base URL.
///
/// Precedence: CLI override > `INVENTORY_API_URL` > `api.base_url` >
/// detection from `api.origin`.
pub fn resolve_api_base(
    config: &ApiConfig,
    cli_override: Option<&str>,
) -> Result<String, ConfigError> {
    let from_env = std::env::var(API_URL_ENV).ok().filter(|v| !v.trim().is_empty());
    resolve_api_base_with(config, cli_override, from_env.as_deref())
}

/// Same as [`resolve_api_base`] with the environment value passed in.
pub fn resolve_api_base_with(
    config: &ApiConfig,
    cli_override: Option<&str>,
    env_override: Option<&str>,
) -> Result<String, ConfigError> {
    let explicit = cli_override
        .or(env_override)
        .or(config.base_url.as_deref());

    let resolved = match explicit {
        Some(url) => {
            Url::parse(url).map_err(|e| ConfigError::ValidationError {
                message: format!("API URL '{}' is not valid: {}", url, e),
            })?;
            url.to_string()
        }
        None => {
            let origin = Url::parse(&config.origin).map_err(|e| ConfigError::ValidationError {
                message: format!("Origin '{}' is not valid: {}", config.origin, e),
            })?;
            detect_from_origin(&origin)
        }
    };

    Ok(resolved.trim_end_matches('/').to_string())
}

/// Guess the API base URL from the origin the client runs on.
pub fn detect_from_origin(origin: &Url) -> String {
    let host = origin.host_str().unwrap_or_default();
    let is_local = host == "localhost" || host == "127.0.0.1";
    let root = origin.origin().ascii_serialization();

    match (is_local, origin.port()) {
        (true, Some(3000)) => format!("{}/api", root),
        (true, _) => DEV_SERVER_API.to_string(),
        (false, _) => format!("{}/api", root),
    }
}
