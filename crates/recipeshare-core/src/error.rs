//! Error types for recipeshare-core
//!
//! Every failure the client can observe from the recipe API funnels into
//! [`ApiError`]; views turn it into a message with [`ApiError::user_message`].

use serde::Deserialize;
use thiserror::Error;

/// Longest plain-text error body shown to the user verbatim
const MAX_PLAIN_MESSAGE_LEN: usize = 200;

/// Failure of a single API call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("HTTP error {status}{}", .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The request could not be built (payload serialization, form data)
    #[error("Failed to build request: {0}")]
    Request(String),
}

impl ApiError {
    /// Build a status error from the raw response body
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            message: extract_error_message(body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Message suitable for an alert or inline banner
    ///
    /// Prefers the server's own explanation, then falls back to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Network(_) => {
                "Unable to reach the server. Check your connection and try again.".to_string()
            }
            _ => fallback.to_string(),
        }
    }
}

/// Common JSON error envelopes (`{"message": ..}` or `{"error": ..}`)
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Pull a human-readable message out of an error response body
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(trimmed) {
        return parsed
            .message
            .or(parsed.error)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
    }

    // HTML error pages and stack traces are not worth showing
    if trimmed.starts_with('<') || trimmed.starts_with('{') || trimmed.starts_with('[') {
        return None;
    }
    if trimmed.chars().count() > MAX_PLAIN_MESSAGE_LEN {
        return None;
    }

    Some(trimmed.to_string())
}

/// Failure of the browser key/value storage
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("Storage unavailable")]
    Unavailable,

    #[error("Failed to write {key}: {message}")]
    Write { key: String, message: String },

    #[error("Failed to encode {key}: {message}")]
    Encode { key: String, message: String },
}
