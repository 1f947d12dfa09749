//! Error types for ClaimDesk.
//!
//! The access-control evaluator itself never fails: unrecognised input is
//! answered with a safe default. Errors exist only around it, when input is
//! validated, when roles are parsed strictly, and when configuration is loaded.
//!
//! # Examples
//!
//! ```rust
//! use claimdesk_core::error::{Error, ValidationError};
//!
//! let err: Error = ValidationError::EmptyInput.into();
//! assert!(err.to_string().contains("empty"));
//! ```

use thiserror::Error;

/// Result type alias for ClaimDesk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ClaimDesk core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input failed a validation rule.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A role identifier did not name any known role.
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error (invalid settings, missing file, etc.).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Catch-all for other error types.
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create a new invalid-role error.
    pub fn invalid_role(role: impl Into<String>) -> Self {
        Self::InvalidRole(role.into())
    }

    /// Create a new configuration error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use claimdesk_core::error::Error;
    ///
    /// let error = Error::configuration("port must not be zero");
    /// assert!(matches!(error, Error::Configuration(_)));
    /// ```
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

/// Validation failures for back-office form input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Nothing left after trimming.
    #[error("input is empty")]
    EmptyInput,

    /// A character outside the accepted alphabet was found.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),

    /// Digit count does not match the expected length.
    #[error("expected {expected} digits, got {actual}")]
    InvalidLength {
        /// Required number of digits
        expected: usize,
        /// Number of digits found
        actual: usize,
    },

    /// Phone number is not a Turkish mobile (GSM) number.
    #[error("not a mobile number: {0}")]
    NotMobile(String),

    /// National ID starts with zero.
    #[error("national id must not start with zero")]
    LeadingZero,

    /// National ID check digits do not match.
    #[error("national id checksum mismatch")]
    ChecksumMismatch,

    /// Text contains a control character or null byte.
    #[error("unsafe control character {0:?}")]
    ControlCharacter(char),
}
