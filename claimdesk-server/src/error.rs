//! Server error type and its HTTP mapping

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use claimdesk_rbac::RbacError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Result type for server operations.
pub type ServerResult<T> = std::result::Result<T, ServerError>;

/// Errors surfaced by the access-control sidecar.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Raised by the access guard
    #[error(transparent)]
    Access(#[from] RbacError),

    /// The request was well-formed JSON but made no sense
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Invalid server configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Binding or serving failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Access(e) if e.is_denial() => StatusCode::FORBIDDEN,
            ServerError::Access(RbacError::UnknownRole(_)) | ServerError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
