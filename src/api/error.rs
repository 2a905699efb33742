//! Error types of the HTTP layer.

use thiserror::Error;

use super::types::{ErrorBody, SerialValidationError};

/// Errors that can occur while talking to the inventory API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Request URL could not be formed
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Request never produced a response (DNS, refused, reset, ...)
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Server returned {status} for {url}")]
    Status {
        url: String,
        status: u16,
        body: ErrorBody,
    },

    /// Success response whose body did not match the expected shape
    #[error("Unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable reason reported by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => {
                fn non_empty(m: &Option<String>) -> Option<&str> {
                    m.as_deref().filter(|m| !m.is_empty())
                }
                non_empty(&body.error).or_else(|| non_empty(&body.detail))
            }
            _ => None,
        }
    }

    /// Per-serial rejections of a batch create; empty for anything else.
    pub fn validation_errors(&self) -> &[SerialValidationError] {
        match self {
            ApiError::Status { body, .. } => &body.validation_errors,
            _ => &[],
        }
    }

    /// Stable classification string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Build(_) => "client_build_error",
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Transport { .. } => "transport_error",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
        }
    }
}
