use crate::sanitize::{
    sanitize_message, CONNECTION_FAILED_MESSAGE, SERVER_PROBLEM_MESSAGE,
    SERVICE_UNAVAILABLE_MESSAGE, TIMEOUT_MESSAGE,
};
use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TransportError>;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification used for logging and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Timeout,
    NotFound,
    Server,
    Network,
    Decode,
    InvalidUrl,
    Io,
}

impl TransportError {
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(timeout)
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else if err.is_connect() {
            TransportError::Network(format!("connection failed: {err}"))
        } else {
            TransportError::Network(err.to_string())
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TransportError::Timeout(_) => ErrorKind::Timeout,
            TransportError::Status { status: 404, .. } => ErrorKind::NotFound,
            TransportError::Status { .. } => ErrorKind::Server,
            TransportError::Network(_) => ErrorKind::Network,
            TransportError::Decode(_) => ErrorKind::Decode,
            TransportError::InvalidUrl(_) => ErrorKind::InvalidUrl,
            TransportError::Io(_) => ErrorKind::Io,
        }
    }

    /// Short message safe to show an end user; never raw HTML.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            TransportError::Timeout(_) => TIMEOUT_MESSAGE.to_string(),
            TransportError::Network(_) => CONNECTION_FAILED_MESSAGE.to_string(),
            TransportError::Status { status, body } => {
                let detail = body_message(body);
                if detail.trim().is_empty() && *status == 404 {
                    SERVICE_UNAVAILABLE_MESSAGE.to_string()
                } else if detail.trim().is_empty() && *status >= 500 {
                    SERVER_PROBLEM_MESSAGE.to_string()
                } else {
                    sanitize_message(&detail, fallback)
                }
            }
            TransportError::Decode(_) | TransportError::InvalidUrl(_) => fallback.to_string(),
            TransportError::Io(err) => sanitize_message(&err.to_string(), fallback),
        }
    }
}

/// `{"error": "..."}` / `{"message": "..."}` bodies carry their text in a field.
fn body_message(body: &str) -> String {
    let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };
    ["error", "message"]
        .iter()
        .find_map(|key| map.get(*key).and_then(|v| v.as_str()))
        .map_or_else(String::new, str::to_string)
}
