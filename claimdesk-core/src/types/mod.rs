//! Domain types shared across ClaimDesk crates.
//!
//! - [`Role`]: the organisational role of a user
//! - [`MenuItem`], [`MenuLink`], [`RoleConfig`]: the sidebar model
//! - [`ModuleCapabilities`], [`CapabilityKind`]: per-module CRUD flags
//! - [`DashboardStats`]: counters used for menu badges
//! - [`CurrentUser`]: the authenticated user

mod capability;
mod menu;
mod role;
mod stats;
mod user;

pub use capability::{CapabilityKind, ModuleCapabilities};
pub use menu::{MenuItem, MenuLink, RoleConfig};
pub use role::Role;
pub use stats::DashboardStats;
pub use user::CurrentUser;
