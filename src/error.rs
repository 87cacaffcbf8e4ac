use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single provider request. Every variant keeps the full URL so a
/// provider outage can be told apart from a bad path in the logs.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("http {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("request timed out: {url}")]
    Timeout { url: String },

    #[error("request failed for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("invalid json from {url}: {message}")]
    Decode { url: String, message: String },
}

impl RemoteError {
    pub fn url(&self) -> &str {
        match self {
            RemoteError::Status { url, .. }
            | RemoteError::Timeout { url }
            | RemoteError::Transport { url, .. }
            | RemoteError::Decode { url, .. } => url,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RemoteError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return RemoteError::Timeout {
                url: url.to_string(),
            };
        }
        if let Some(status) = err.status() {
            return RemoteError::Status {
                status,
                url: url.to_string(),
            };
        }
        if err.is_decode() {
            return RemoteError::Decode {
                url: url.to_string(),
                message: err.to_string(),
            };
        }
        RemoteError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}
