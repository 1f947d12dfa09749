//! Authenticated user as reported by the authentication service

use super::Role;
use serde::{Deserialize, Serialize};

/// Response body of `GET /auth/me`.
///
/// `role` is kept as the raw string the service sent; it may be missing or
/// name a role this build does not know. Use [`CurrentUser::known_role`] to
/// obtain a typed role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// E-mail address
    #[serde(default)]
    pub email: Option<String>,
    /// Raw role identifier
    #[serde(default)]
    pub role: Option<String>,
}

impl CurrentUser {
    /// Typed role, or `None` when the role is absent or unrecognised.
    pub fn known_role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse_lenient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_accepts_missing_optional_fields() {
        let user: CurrentUser = serde_json::from_str(r#"{"id":"u-1"}"#).unwrap();
        assert_eq!(user.role, None);
        assert_eq!(user.known_role(), None);
    }

    #[test]
    fn known_role_parses_wire_identifier() {
        let user: CurrentUser =
            serde_json::from_str(r#"{"id":"u-2","name":"Ayşe","role":"evrak-birimi"}"#).unwrap();
        assert_eq!(user.known_role(), Some(Role::EvrakBirimi));
    }

    #[test]
    fn unknown_role_is_not_typed() {
        let user: CurrentUser = serde_json::from_str(r#"{"id":"u-3","role":"root"}"#).unwrap();
        assert_eq!(user.role.as_deref(), Some("root"));
        assert_eq!(user.known_role(), None);
    }
}
