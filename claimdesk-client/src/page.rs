//! Per-page access context
//!
//! Every back-office page starts the same way: fetch the current user, fetch
//! dashboard statistics for badges, then resolve the sidebar and the in-page
//! permission flags. [`PageContext::load`] does that once.

use crate::{BackOffice, ClientResult};
use claimdesk_core::{CurrentUser, MenuItem};
use claimdesk_rbac::{AccessControl, policy::Permission, subjects::Subject};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

/// Everything a page needs to render navigation and gate its actions.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    /// The authenticated user
    pub user: CurrentUser,
    /// The user as seen by the access guard
    pub subject: Subject,
    /// Sidebar entries, badged when statistics were available
    pub menu: Vec<MenuItem>,
    /// Permission predicates keyed by their wire name
    pub permissions: BTreeMap<String, bool>,
}

impl PageContext {
    /// Load the context for the signed-in user.
    ///
    /// A failed user lookup is an error. A failed statistics call is not: the
    /// menu is resolved without badges and the failure is logged.
    pub async fn load(api: &dyn BackOffice, rbac: &AccessControl) -> ClientResult<Self> {
        let user = api.current_user().await?;
        let subject = Subject::from(&user);

        let stats = match api.dashboard_stats().await {
            Ok(stats) => Some(stats),
            Err(e) => {
                warn!(subject = %subject, error = %e, "Dashboard stats unavailable, menu has no badges");
                None
            }
        };

        let menu = rbac.menu(&subject, stats.as_ref());
        let permissions = rbac
            .permissions(&subject)
            .into_iter()
            .map(|(permission, granted)| (permission.as_str().to_string(), granted))
            .collect();

        Ok(Self {
            user,
            subject,
            menu,
            permissions,
        })
    }

    /// Whether the page may offer the action behind `permission`.
    pub fn can(&self, permission: Permission) -> bool {
        self.permissions
            .get(permission.as_str())
            .copied()
            .unwrap_or(false)
    }

    /// Filter the loaded sidebar by a search query.
    pub fn search(&self, query: &str) -> Vec<MenuItem> {
        claimdesk_rbac::evaluator::filter_menu_by_search(&self.menu, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use async_trait::async_trait;
    use claimdesk_core::DashboardStats;

    struct FakeBackOffice {
        role: Option<&'static str>,
        stats: Option<DashboardStats>,
    }

    #[async_trait]
    impl BackOffice for FakeBackOffice {
        async fn current_user(&self) -> ClientResult<CurrentUser> {
            Ok(CurrentUser {
                id: "u-7".to_string(),
                name: Some("Mehmet".to_string()),
                email: None,
                role: self.role.map(str::to_string),
            })
        }

        async fn dashboard_stats(&self) -> ClientResult<DashboardStats> {
            self.stats.clone().ok_or(ClientError::Status {
                status: 503,
                body: "maintenance".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_load_with_stats() {
        let api = FakeBackOffice {
            role: Some("birincil-admin"),
            stats: Some(
                DashboardStats::empty()
                    .with_active_customers(5)
                    .with_pending_payments(2),
            ),
        };
        let page = PageContext::load(&api, &AccessControl::default()).await.unwrap();

        assert_eq!(page.subject.user_id.as_deref(), Some("u-7"));
        assert_eq!(page.menu.len(), 7);
        assert_eq!(page.menu[1].badge.as_deref(), Some("5"));
        assert!(page.menu.iter().any(|item| item.badge.as_deref() == Some("2")));
        assert!(page.can(Permission::CloseFile));
        assert!(page.can(Permission::ViewDealerCode));
        assert!(!page.can(Permission::CreateDealer));
        assert!(!page.can(Permission::ManageDealerPayment));
        assert_eq!(page.permissions.len(), Permission::ALL.len());
    }

    #[tokio::test]
    async fn test_stats_failure_degrades_to_plain_menu() {
        let api = FakeBackOffice {
            role: Some("ikincil-admin"),
            stats: None,
        };
        let page = PageContext::load(&api, &AccessControl::default()).await.unwrap();

        assert_eq!(page.menu.len(), 4);
        assert!(page.menu.iter().all(|item| item.badge.is_none()));
        assert!(page.can(Permission::CreateCustomer));
        assert_eq!(page.search("evrak").len(), 1);
    }

    #[tokio::test]
    async fn test_user_without_role_gets_nothing() {
        let api = FakeBackOffice {
            role: None,
            stats: Some(DashboardStats::empty()),
        };
        let page = PageContext::load(&api, &AccessControl::default()).await.unwrap();

        assert!(page.menu.is_empty());
        assert!(page.permissions.values().all(|granted| !granted));
    }
}
