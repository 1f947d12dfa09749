//! Role-based access control and menu composition for ClaimDesk
//!
//! Every back-office screen asks this crate two kinds of questions:
//!
//! - **Navigation**: which sidebar entries a role gets, with live badge counts,
//!   and which CRUD affordances each entry carries ([`registry`],
//!   [`evaluator`]).
//! - **In-page permissions**: fine-grained predicates such as "may this role
//!   see the dealer code" or "may it close the file" ([`policy`]).
//!
//! Both are pure lookups over static tables. [`AccessControl`] adds the
//! deployment concerns on top: how to treat users without a role, menu
//! aliases for roles without a sidebar, and audit logging of decisions.
//!
//! # Quick Start
//!
//! ```rust
//! use claimdesk_rbac::prelude::*;
//!
//! let stats = DashboardStats::empty().with_active_customers(12);
//! let menu = resolve_menu("ikincil-admin", Some(&stats));
//!
//! assert_eq!(menu.len(), 4);
//! assert_eq!(menu[1].badge.as_deref(), Some("12"));
//! assert!(can_create_customer("ikincil-admin"));
//! assert!(!can_create_dealer("ikincil-admin"));
//! ```
//!
//! # Guarded checks
//!
//! ```rust
//! use claimdesk_rbac::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let rbac = AccessControl::builder()
//!         .with_audit_logging(true)
//!         .with_role_alias("operasyon", "ikincil-admin")
//!         .build()?;
//!
//!     let user = Subject::user("17", "evrak-birimi");
//!     rbac.authorize_route(&user, "/documents/application/3")?;
//!     rbac.require(&user, Permission::ManageDealerPayment)?;
//!     assert!(rbac.require(&user, Permission::CloseFile).is_err());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod evaluator;
pub mod guard;
pub mod policy;
pub mod registry;
pub mod subjects;

pub mod prelude {
    //! Common imports for ClaimDesk RBAC

    pub use crate::config::*;
    pub use crate::error::*;
    pub use crate::evaluator::*;
    pub use crate::guard::{AccessControl, AccessControlBuilder, AccessDecision};
    pub use crate::policy::*;
    pub use crate::registry::{RoleRegistry, get_role_config, modules};
    pub use crate::subjects::*;

    pub use claimdesk_core::prelude::*;

    // Common Result type
    pub type Result<T> = std::result::Result<T, RbacError>;
}

// Re-export major components at crate level
pub use error::RbacError;
pub use guard::AccessControl;
pub use prelude::Result;
