//! Client error types

use thiserror::Error;

/// Result type for client calls.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Errors returned by [`ApiClient`](crate::ApiClient).
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connection refused, timeout, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Base URL or endpoint could not be parsed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// The API answered with a non-success status
    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The call needs a token and none is held
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the API rejected the credentials or the session.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            ClientError::NotAuthenticated => true,
            ClientError::Status { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }
}
