//! Access control guard for page loads and actions
//!
//! [`AccessControl`] wraps the pure evaluator with the deployment
//! configuration (missing-role handling, menu aliases) and audit logging.

use crate::config::{AccessConfig, MissingRolePolicy};
use crate::error::RbacError;
use crate::evaluator;
use crate::policy::{self, Permission};
use crate::subjects::Subject;
use chrono::{DateTime, Utc};
use claimdesk_core::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

#[cfg(feature = "audit")]
use tracing::info;

type RbacResult<T> = std::result::Result<T, RbacError>;

/// Outcome of one guarded check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessDecision {
    /// Subject as rendered by [`Subject`]'s `Display`
    pub subject: String,
    /// Role the decision was made for, if any
    pub role: Option<String>,
    /// `route` or the permission name
    pub action: String,
    /// Route path, or the permission name again
    pub target: String,
    /// Whether access was granted
    pub granted: bool,
    /// When the decision was made
    pub evaluated_at: DateTime<Utc>,
}

/// Guard combining the evaluator with deployment configuration.
#[derive(Debug, Clone, Default)]
pub struct AccessControl {
    config: AccessConfig,
}

impl AccessControl {
    /// Create a new builder
    pub fn builder() -> AccessControlBuilder {
        AccessControlBuilder::new()
    }

    /// Create a guard from a validated configuration
    pub fn new(config: AccessConfig) -> RbacResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    /// Role used for permission checks.
    ///
    /// A blank role is handled by [`MissingRolePolicy`]; any other value is
    /// passed through and left to the evaluator, which denies unknown roles.
    pub fn effective_role(&self, subject: &Subject) -> Option<String> {
        match subject.role() {
            Some(role) => Some(role.to_string()),
            None => match self.config.missing_role {
                MissingRolePolicy::Deny => None,
                MissingRolePolicy::LegacySuperadmin => {
                    warn!(
                        subject = %subject,
                        "Missing role treated as superadmin by legacy policy"
                    );
                    Some(Role::Superadmin.as_str().to_string())
                }
            },
        }
    }

    /// Role used for menu, capability and label lookups, after aliasing.
    pub fn menu_role(&self, subject: &Subject) -> Option<String> {
        let role = self.effective_role(subject)?;
        match self.config.role_aliases.get(&role) {
            Some(target) => {
                debug!(alias = %role, target = %target, "Using aliased menu");
                Some(target.as_str().to_string())
            }
            None => Some(role),
        }
    }

    /// Sidebar for `subject`, badged with `stats` when given.
    pub fn menu(&self, subject: &Subject, stats: Option<&DashboardStats>) -> Vec<MenuItem> {
        match self.menu_role(subject) {
            Some(role) => evaluator::resolve_menu(&role, stats),
            None => Vec::new(),
        }
    }

    /// Sidebar for `subject` narrowed by a search query.
    pub fn search_menu(
        &self,
        subject: &Subject,
        stats: Option<&DashboardStats>,
        query: &str,
    ) -> Vec<MenuItem> {
        evaluator::filter_menu_by_search(&self.menu(subject, stats), query)
    }

    /// Capability flag on a module of the subject's sidebar
    pub fn has_capability(&self, subject: &Subject, module_id: &str, capability: &str) -> bool {
        self.menu_role(subject)
            .is_some_and(|role| evaluator::has_capability(&role, module_id, capability))
    }

    /// Module label for the subject, falling back to the module id
    pub fn module_label(&self, subject: &Subject, module_id: &str) -> String {
        match self.menu_role(subject) {
            Some(role) => evaluator::get_module_label(&role, module_id),
            None => module_id.to_string(),
        }
    }

    /// Answer a permission predicate without failing
    pub fn permitted(&self, subject: &Subject, permission: Permission) -> bool {
        self.effective_role(subject)
            .is_some_and(|role| policy::check(&role, permission))
    }

    /// Every permission predicate for the subject
    pub fn permissions(&self, subject: &Subject) -> Vec<(Permission, bool)> {
        match self.effective_role(subject) {
            Some(role) => policy::snapshot(&role),
            None => Permission::ALL.into_iter().map(|p| (p, false)).collect(),
        }
    }

    /// Require a permission, recording the decision.
    ///
    /// # Errors
    ///
    /// [`RbacError::PermissionDenied`] when the predicate is false.
    pub fn require(&self, subject: &Subject, permission: Permission) -> RbacResult<()> {
        let granted = self.permitted(subject, permission);
        let decision = self.record(subject, permission.as_str(), permission.as_str(), granted);

        if granted {
            Ok(())
        } else {
            Err(RbacError::PermissionDenied {
                role: decision.role.unwrap_or_default(),
                permission,
            })
        }
    }

    /// Decide whether `path` is reachable from the subject's sidebar.
    ///
    /// The path is allowed when it equals, or is nested under, the route of a
    /// top-level item or submenu link. Query strings, fragments and trailing
    /// slashes are ignored.
    pub fn decide_route(&self, subject: &Subject, path: &str) -> AccessDecision {
        let path = normalize_path(path);
        let granted = self
            .menu(subject, None)
            .iter()
            .flat_map(|item| {
                std::iter::once(item.href.as_str())
                    .chain(item.submenu.iter().map(|link| link.href.as_str()))
            })
            .any(|href| route_covers(href, path));

        self.record(subject, "route", path, granted)
    }

    /// Require that `path` is reachable from the subject's sidebar.
    ///
    /// # Errors
    ///
    /// [`RbacError::RouteDenied`] when no menu entry covers the path.
    pub fn authorize_route(&self, subject: &Subject, path: &str) -> RbacResult<()> {
        let decision = self.decide_route(subject, path);
        if decision.granted {
            Ok(())
        } else {
            Err(RbacError::RouteDenied {
                role: decision.role.unwrap_or_default(),
                path: decision.target,
            })
        }
    }

    fn record(&self, subject: &Subject, action: &str, target: &str, granted: bool) -> AccessDecision {
        let decision = AccessDecision {
            subject: subject.to_string(),
            role: self.effective_role(subject),
            action: action.to_string(),
            target: target.to_string(),
            granted,
            evaluated_at: Utc::now(),
        };

        #[cfg(feature = "audit")]
        if self.config.audit_enabled {
            if granted {
                info!(
                    subject = %decision.subject,
                    action = %decision.action,
                    target = %decision.target,
                    result = "granted",
                    "Access check"
                );
            } else {
                warn!(
                    subject = %decision.subject,
                    action = %decision.action,
                    target = %decision.target,
                    result = "denied",
                    "Access check"
                );
            }
        }

        decision
    }
}

fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    match path.trim_end_matches('/') {
        "" if path.starts_with('/') => "/",
        trimmed => trimmed,
    }
}

fn route_covers(href: &str, path: &str) -> bool {
    match path.strip_prefix(href) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Builder for [`AccessControl`]
pub struct AccessControlBuilder {
    config: AccessConfig,
    aliases: Vec<(String, String)>,
}

impl AccessControlBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self {
            config: AccessConfig::default(),
            aliases: Vec::new(),
        }
    }

    /// Start from an existing configuration
    pub fn with_config(mut self, config: AccessConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable or disable audit logging
    pub fn with_audit_logging(mut self, enabled: bool) -> Self {
        self.config.audit_enabled = enabled;
        self
    }

    /// Set the missing-role policy
    pub fn with_missing_role_policy(mut self, policy: MissingRolePolicy) -> Self {
        self.config.missing_role = policy;
        self
    }

    /// Show `target`'s sidebar to users whose role is `alias`
    pub fn with_role_alias(mut self, alias: &str, target: &str) -> Self {
        self.aliases.push((alias.to_string(), target.to_string()));
        self
    }

    /// Build the guard
    pub fn build(self) -> RbacResult<AccessControl> {
        let mut config = self.config;
        for (alias, target) in self.aliases {
            let role = Role::parse_lenient(&target).ok_or(RbacError::UnknownRole(target))?;
            config.role_aliases.insert(alias, role);
        }
        AccessControl::new(config)
    }
}

impl Default for AccessControlBuilder {
    fn default() -> Self {
        Self::new()
    }
}
