//! Sidecar configuration file

use crate::error::{ServerError, ServerResult};
use claimdesk_rbac::config::AccessConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Listener settings, the `server` object of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    /// Interface to bind
    pub bind_address: String,
    /// TCP port
    pub port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8088,
        }
    }
}

/// Full configuration file: the access settings plus a `server` section.
///
/// ```json
/// {
///   "audit_enabled": true,
///   "missing_role": "deny",
///   "role_aliases": { "operasyon": "ikincil-admin" },
///   "server": { "bind_address": "127.0.0.1", "port": 8088 }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(flatten)]
    pub access: AccessConfig,
    #[serde(default)]
    pub server: ListenConfig,
}

impl ServerConfig {
    /// Load and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> ServerResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ServerError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: ServerConfig = serde_json::from_str(&content)
            .map_err(|e| ServerError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty JSON
    pub fn to_file(&self, path: impl AsRef<Path>) -> ServerResult<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            ServerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path.as_ref(), content).map_err(|e| {
            ServerError::Configuration(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Validate both sections
    pub fn validate(&self) -> ServerResult<()> {
        self.access.validate()?;

        if self.server.port == 0 {
            return Err(ServerError::Configuration(
                "Server port must not be 0".to_string(),
            ));
        }
        if self.server.bind_address.trim().is_empty() {
            return Err(ServerError::Configuration(
                "Server bind address must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// `host:port` the listener binds to
    pub fn address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimdesk_core::Role;
    use claimdesk_rbac::config::MissingRolePolicy;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_nested_file_layout() {
        let json = r#"{
            "audit_enabled": false,
            "missing_role": "legacy-superadmin",
            "role_aliases": { "operasyon": "ikincil-admin" },
            "server": { "bind_address": "0.0.0.0", "port": 9000 }
        }"#;
        let config: ServerConfig = serde_json::from_str(json).unwrap();

        assert!(!config.access.audit_enabled);
        assert_eq!(config.access.missing_role, MissingRolePolicy::LegacySuperadmin);
        assert_eq!(
            config.access.role_aliases.get("operasyon"),
            Some(&Role::IkincilAdmin)
        );
        assert_eq!(config.address(), "0.0.0.0:9000");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: ServerConfig = serde_json::from_str("{}").unwrap();
        assert!(config.access.audit_enabled);
        assert_eq!(config.server, ListenConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_port_zero_rejected() {
        let mut config = ServerConfig::default();
        config.server.port = 0;
        assert!(matches!(
            config.validate(),
            Err(ServerError::Configuration(_))
        ));
    }

    #[test]
    fn test_file_round_trip_validates_aliases() {
        let file = NamedTempFile::new().unwrap();
        let config = ServerConfig {
            access: AccessConfig::production_template(),
            server: ListenConfig::default(),
        };
        config.to_file(file.path()).unwrap();

        let loaded = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded.access.role_aliases, config.access.role_aliases);

        std::fs::write(file.path(), r#"{"role_aliases": {"bayi": "superadmin"}}"#).unwrap();
        assert!(matches!(
            ServerConfig::from_file(file.path()),
            Err(ServerError::Access(_))
        ));
    }
}
