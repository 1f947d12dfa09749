//! Builder for [`AccessServer`]

use crate::config::{ListenConfig, ServerConfig};
use crate::error::ServerResult;
use crate::server::AccessServer;
use claimdesk_rbac::AccessControl;

/// Fluent builder for [`AccessServer`].
///
/// # Examples
///
/// ```rust
/// use claimdesk_server::AccessServerBuilder;
///
/// let server = AccessServerBuilder::new()
///     .bind_address("0.0.0.0")
///     .port(9000)
///     .build()
///     .unwrap();
/// assert_eq!(server.address(), "0.0.0.0:9000");
/// ```
pub struct AccessServerBuilder {
    access: Option<AccessControl>,
    config: ServerConfig,
}

impl AccessServerBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self {
            access: None,
            config: ServerConfig::default(),
        }
    }

    /// Take access and listener settings from a configuration file's contents
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a ready-made guard; overrides the access section of the config
    pub fn with_access_control(mut self, access: AccessControl) -> Self {
        self.access = Some(access);
        self
    }

    /// Interface to bind
    pub fn bind_address(mut self, address: impl Into<String>) -> Self {
        self.config.server.bind_address = address.into();
        self
    }

    /// TCP port.
    ///
    /// Port 0 binds an ephemeral port when set here directly. Configuration
    /// files go through [`ServerConfig::validate`], which rejects it.
    pub fn port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    /// Build the server
    pub fn build(self) -> ServerResult<AccessServer> {
        let access = match self.access {
            Some(access) => access,
            None => AccessControl::new(self.config.access)?,
        };
        let ListenConfig { bind_address, port } = self.config.server;

        Ok(AccessServer::new(access, bind_address, port))
    }
}

impl Default for AccessServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
