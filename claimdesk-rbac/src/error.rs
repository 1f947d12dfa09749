//! Error types for ClaimDesk RBAC

use crate::policy::Permission;
use thiserror::Error;

/// Errors raised by the guard and configuration layers.
///
/// The evaluator functions never fail; these errors only come from
/// [`AccessControl::require`](crate::AccessControl::require),
/// [`AccessControl::authorize_route`](crate::AccessControl::authorize_route)
/// and configuration handling.
#[derive(Error, Debug)]
pub enum RbacError {
    #[error("Permission denied: role '{role}' lacks {permission}")]
    PermissionDenied { role: String, permission: Permission },

    #[error("Route denied: role '{role}' may not open {path}")]
    RouteDenied { role: String, path: String },

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RbacError {
    /// Whether this error is an authorization denial rather than a fault.
    pub fn is_denial(&self) -> bool {
        matches!(
            self,
            RbacError::PermissionDenied { .. } | RbacError::RouteDenied { .. }
        )
    }
}
