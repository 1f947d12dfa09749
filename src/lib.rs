//! # ClaimDesk - access control for the claims back office
//!
//! Role-based menus and permission predicates for the ClaimDesk back office.
//!
//! This crate re-exports the functionality of the constituent crates:
//! - `claimdesk-core`: Roles, menu and statistics types, input validation
//! - `claimdesk-rbac`: Role registry, permission policy and the access guard
//! - `claimdesk-client`: Typed client for the back-office API
//! - `claimdesk-server`: HTTP sidecar exposing the guard

pub use claimdesk_client as client;
pub use claimdesk_core as core;
pub use claimdesk_rbac as rbac;
pub use claimdesk_server as server;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::client::{ApiClient, BackOffice, ClientError, ClientResult, PageContext};
    pub use crate::rbac::prelude::*;
    pub use crate::server::{AccessServer, AccessServerBuilder, ServerConfig, ServerError};
}
