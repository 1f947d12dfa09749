//! Configuration types for ClaimDesk RBAC

use crate::error::RbacError;
use crate::registry::RoleRegistry;
use claimdesk_core::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// What to do when the authenticated user carries no role at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingRolePolicy {
    /// Treat the user as having no menu and no permissions
    #[default]
    Deny,
    /// Treat the user as `superadmin`; kept for deployments that still rely
    /// on the old front-end default
    LegacySuperadmin,
}

/// Access-control configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Log every guarded decision
    pub audit_enabled: bool,
    /// Handling of users without a role
    pub missing_role: MissingRolePolicy,
    /// Menu used for roles that have no sidebar of their own, such as
    /// `operasyon` -> `ikincil-admin`. Permissions are unaffected.
    pub role_aliases: BTreeMap<String, Role>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            audit_enabled: true,
            missing_role: MissingRolePolicy::Deny,
            role_aliases: BTreeMap::new(),
        }
    }
}

impl AccessConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> std::result::Result<Self, RbacError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RbacError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: AccessConfig = serde_json::from_str(&content).map_err(|e| {
            RbacError::Configuration(format!("Failed to parse config: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_file(&self, path: impl AsRef<Path>) -> std::result::Result<(), RbacError> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            RbacError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path.as_ref(), content).map_err(|e| {
            RbacError::Configuration(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Configuration for local development
    pub fn development() -> Self {
        Self {
            audit_enabled: false,
            ..Self::default()
        }
    }

    /// Production template: audit on, operations staff see the secondary
    /// admin sidebar.
    pub fn production_template() -> Self {
        let mut role_aliases = BTreeMap::new();
        role_aliases.insert(Role::Operasyon.as_str().to_string(), Role::IkincilAdmin);

        Self {
            audit_enabled: true,
            missing_role: MissingRolePolicy::Deny,
            role_aliases,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), RbacError> {
        let registry = RoleRegistry::global();

        for (alias, target) in &self.role_aliases {
            if alias.trim().is_empty() {
                return Err(RbacError::Configuration(
                    "Role alias name must not be empty".to_string(),
                ));
            }

            // Only known roles without a sidebar of their own may be aliased
            let Some(role) = Role::ALL.into_iter().find(|role| role.as_str() == alias) else {
                return Err(RbacError::Configuration(format!(
                    "Alias '{}' is not a known role",
                    alias
                )));
            };
            if registry.contains(role) {
                return Err(RbacError::Configuration(format!(
                    "Alias '{}' shadows a role with its own menu",
                    alias
                )));
            }

            if !registry.contains(*target) {
                return Err(RbacError::Configuration(format!(
                    "Alias '{}' points at role '{}' which has no menu",
                    alias, target
                )));
            }
        }

        Ok(())
    }
}
