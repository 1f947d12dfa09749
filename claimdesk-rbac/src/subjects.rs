//! The user an access decision is made for

use claimdesk_core::CurrentUser;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who is asking.
///
/// The role is the raw identifier from the authentication service and may be
/// missing or unknown; [`AccessControl`](crate::AccessControl) decides what
/// that means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// User identifier, when known
    #[serde(default)]
    pub user_id: Option<String>,
    /// Raw role identifier
    #[serde(default)]
    pub role: Option<String>,
}

impl Subject {
    /// A subject with neither user nor role.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A subject known only by role.
    pub fn with_role(role: &str) -> Self {
        Self {
            user_id: None,
            role: Some(role.to_string()),
        }
    }

    /// A subject for an authenticated user.
    pub fn user(id: &str, role: &str) -> Self {
        Self {
            user_id: Some(id.to_string()),
            role: Some(role.to_string()),
        }
    }

    /// The role with whitespace removed, `None` when blank.
    pub fn role(&self) -> Option<&str> {
        self.role
            .as_deref()
            .map(str::trim)
            .filter(|role| !role.is_empty())
    }
}

impl From<&CurrentUser> for Subject {
    fn from(user: &CurrentUser) -> Self {
        Self {
            user_id: Some(user.id.clone()),
            role: user.role.clone(),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.user_id.as_deref().unwrap_or("anonymous");
        match self.role() {
            Some(role) => write!(f, "{}:{}", role, id),
            None => write!(f, "-:{}", id),
        }
    }
}
