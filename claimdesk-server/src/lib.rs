//! # ClaimDesk Server
//!
//! HTTP sidecar that answers access-control questions for front ends that
//! cannot link the Rust crates directly.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use claimdesk_server::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> ServerResult<()> {
//!     let server = AccessServer::builder()
//!         .with_config(ServerConfig::default())
//!         .port(8088)
//!         .build()?;
//!
//!     server.run().await
//! }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use builder::AccessServerBuilder;
pub use config::{ListenConfig, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use server::AccessServer;

/// Common imports for running the sidecar
pub mod prelude {
    pub use crate::builder::AccessServerBuilder;
    pub use crate::config::{ListenConfig, ServerConfig};
    pub use crate::error::{ServerError, ServerResult};
    pub use crate::server::AccessServer;
    pub use claimdesk_rbac::prelude::{AccessConfig, AccessControl, MissingRolePolicy};
}
