//! # ClaimDesk Core
//!
//! Core domain types shared by every ClaimDesk crate.
//!
//! This crate provides the vocabulary of the back-office access-control
//! engine: roles, menu items and their capability sets, dashboard statistics
//! used for menu badges, and the current-user shape returned by the
//! authentication service. It also hosts the input validation helpers used by
//! the back-office forms (Turkish phone numbers, national IDs, free text).
//!
//! Nothing in this crate performs I/O.
//!
//! ## Example
//!
//! ```rust
//! use claimdesk_core::prelude::*;
//!
//! let role: Role = "ikincil-admin".parse().unwrap();
//! assert_eq!(role.display_name(), "İkincil Admin");
//! assert!("unknown".parse::<Role>().is_err());
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod types;
pub mod validation;

pub use error::{Error, Result, ValidationError};
pub use types::*;

/// Common imports for ClaimDesk crates
pub mod prelude {
    pub use crate::error::{Error, Result, ValidationError};
    pub use crate::types::*;
    pub use crate::validation;
}
