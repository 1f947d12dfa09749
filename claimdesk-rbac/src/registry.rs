//! Role registry: the static sidebar of every role
//!
//! The table below is business policy fixed at deploy time. It is built once
//! on first use and shared for the lifetime of the process; lookups hand out
//! `&'static` references, so repeated calls return the very same data.
//!
//! `operasyon` and `admin` are recognised roles without a sidebar. They get
//! an empty menu here but are still answered by the permission table.

use claimdesk_core::prelude::*;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Module identifiers used by the registry.
pub mod modules {
    /// Landing dashboard
    pub const DASHBOARD: &str = "dashboard";
    /// Customer files
    pub const CUSTOMER_MANAGEMENT: &str = "customer-management";
    /// Dealer network
    pub const DEALER_MANAGEMENT: &str = "dealer-management";
    /// Application and result documents
    pub const DOCUMENT_MANAGEMENT: &str = "document-management";
    /// Dealer payments
    pub const ACCOUNTING: &str = "accounting";
    /// In-app notifications
    pub const NOTIFICATIONS: &str = "notifications";
    /// SMS dispatch
    pub const SMS_MANAGEMENT: &str = "sms-management";
    /// Back-office users
    pub const USER_MANAGEMENT: &str = "user-management";
    /// Audit log viewer
    pub const AUDIT_LOGS: &str = "audit-logs";
}

use modules::*;

static REGISTRY: LazyLock<RoleRegistry> = LazyLock::new(RoleRegistry::build);

/// Read-only map of role to [`RoleConfig`].
#[derive(Debug)]
pub struct RoleRegistry {
    configs: HashMap<Role, RoleConfig>,
}

impl RoleRegistry {
    /// The process-wide registry.
    pub fn global() -> &'static RoleRegistry {
        &REGISTRY
    }

    /// Definition of a typed role, if it has a sidebar.
    pub fn get(&self, role: Role) -> Option<&RoleConfig> {
        self.configs.get(&role)
    }

    /// Roles that have a sidebar, in [`Role::ALL`] order.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL
            .into_iter()
            .filter(|role| self.configs.contains_key(role))
    }

    /// Whether the role has a registry entry.
    pub fn contains(&self, role: Role) -> bool {
        self.configs.contains_key(&role)
    }

    fn build() -> Self {
        let configs = [
            RoleConfig::new(Role::Superadmin, superadmin_menu()),
            RoleConfig::new(Role::BirincilAdmin, birincil_admin_menu()),
            RoleConfig::new(Role::IkincilAdmin, ikincil_admin_menu()),
            RoleConfig::new(Role::EvrakBirimi, evrak_birimi_menu()),
            RoleConfig::new(Role::Bayi, bayi_menu()),
            RoleConfig::new(Role::Musteri, musteri_menu()),
        ]
        .into_iter()
        .map(|config| (config.role, config))
        .collect();

        Self { configs }
    }
}

/// Look up the menu definition of an untyped role string.
///
/// Unknown strings and roles without a sidebar yield `None`.
pub fn get_role_config(role: &str) -> Option<&'static RoleConfig> {
    let role = Role::parse_lenient(role)?;
    RoleRegistry::global().get(role)
}

const fn caps(
    can_create: bool,
    can_edit: bool,
    can_delete: bool,
    can_view_all: bool,
    can_export: bool,
) -> ModuleCapabilities {
    ModuleCapabilities {
        can_create,
        can_edit,
        can_delete,
        can_view_all,
        can_view_own: false,
        can_export,
    }
}

fn dashboard() -> MenuItem {
    MenuItem::new(DASHBOARD, "Ana Sayfa", "LayoutDashboard", "/dashboard")
}

fn notifications() -> MenuItem {
    MenuItem::new(NOTIFICATIONS, "Bildirimler", "Bell", "/notifications")
}

fn document_links() -> Vec<MenuLink> {
    vec![
        MenuLink::new(
            "application-documents",
            "Başvuru Evrakları",
            "FileInput",
            "/documents/application",
        ),
        MenuLink::new(
            "result-documents",
            "Sonuç Evrakları",
            "FileCheck",
            "/documents/result",
        ),
    ]
}

fn accounting_links() -> Vec<MenuLink> {
    vec![
        MenuLink::new(
            "dealer-payments",
            "Bayi Ödemeleri",
            "CreditCard",
            "/accounting/dealer-payments",
        ),
        MenuLink::new(
            "payment-reports",
            "Ödeme Raporları",
            "BarChart3",
            "/accounting/reports",
        ),
    ]
}

fn superadmin_menu() -> Vec<MenuItem> {
    vec![
        dashboard(),
        MenuItem::new(CUSTOMER_MANAGEMENT, "Müşteri Yönetimi", "Users", "/customers")
            .with_capabilities(ModuleCapabilities::FULL),
        MenuItem::new(DEALER_MANAGEMENT, "Bayi Yönetimi", "Store", "/dealers")
            .with_capabilities(ModuleCapabilities::FULL),
        MenuItem::new(DOCUMENT_MANAGEMENT, "Evrak Yönetimi", "FileText", "/documents")
            .with_submenu(document_links())
            .with_capabilities(caps(true, true, true, true, true)),
        MenuItem::new(ACCOUNTING, "Muhasebe", "Wallet", "/accounting")
            .with_submenu(accounting_links())
            .with_capabilities(caps(true, true, true, true, true)),
        notifications().with_capabilities(caps(true, false, true, true, false)),
        MenuItem::new(SMS_MANAGEMENT, "SMS Gönderimi", "MessageSquare", "/sms")
            .with_capabilities(caps(true, false, false, true, true)),
        MenuItem::new(USER_MANAGEMENT, "Kullanıcı Yönetimi", "UserCog", "/users")
            .with_capabilities(ModuleCapabilities::FULL),
        MenuItem::new(AUDIT_LOGS, "İşlem Kayıtları", "History", "/logs")
            .with_capabilities(caps(false, false, false, true, true)),
    ]
}

fn birincil_admin_menu() -> Vec<MenuItem> {
    vec![
        dashboard(),
        MenuItem::new(CUSTOMER_MANAGEMENT, "Müşteri Yönetimi", "Users", "/customers")
            .with_capabilities(caps(true, true, false, true, true)),
        MenuItem::new(DEALER_MANAGEMENT, "Bayi Yönetimi", "Store", "/dealers")
            .with_capabilities(caps(false, true, false, true, true)),
        MenuItem::new(DOCUMENT_MANAGEMENT, "Evrak Yönetimi", "FileText", "/documents")
            .with_submenu(document_links())
            .with_capabilities(caps(true, true, false, true, false)),
        MenuItem::new(ACCOUNTING, "Muhasebe", "Wallet", "/accounting")
            .with_submenu(accounting_links())
            .with_capabilities(caps(false, false, false, true, true)),
        notifications().with_capabilities(caps(true, false, false, true, false)),
        MenuItem::new(SMS_MANAGEMENT, "SMS Gönderimi", "MessageSquare", "/sms")
            .with_capabilities(caps(true, false, false, true, false)),
    ]
}

fn ikincil_admin_menu() -> Vec<MenuItem> {
    vec![
        dashboard(),
        MenuItem::new(CUSTOMER_MANAGEMENT, "Müşteri Yönetimi", "Users", "/customers")
            .with_capabilities(caps(true, true, false, true, false)),
        MenuItem::new(
            DOCUMENT_MANAGEMENT,
            "Sonuç Evrakları",
            "FileCheck",
            "/documents/result",
        )
        .with_capabilities(caps(true, true, false, true, false)),
        notifications().with_capabilities(caps(false, false, false, true, false)),
    ]
}

fn evrak_birimi_menu() -> Vec<MenuItem> {
    vec![
        dashboard(),
        MenuItem::new(CUSTOMER_MANAGEMENT, "Müşteri Yönetimi", "Users", "/customers")
            .with_capabilities(caps(true, false, false, true, false)),
        MenuItem::new(
            DOCUMENT_MANAGEMENT,
            "Başvuru Evrakları",
            "FileInput",
            "/documents/application",
        )
        .with_capabilities(caps(true, true, false, true, false)),
        MenuItem::new(
            ACCOUNTING,
            "Bayi Ödemeleri",
            "CreditCard",
            "/accounting/dealer-payments",
        )
        .with_capabilities(caps(true, true, false, true, false)),
        notifications().with_capabilities(caps(false, false, false, true, false)),
    ]
}

fn bayi_menu() -> Vec<MenuItem> {
    vec![
        dashboard(),
        MenuItem::new(CUSTOMER_MANAGEMENT, "Müşterilerim", "Users", "/customers")
            .with_capabilities(ModuleCapabilities::VIEW_OWN),
        MenuItem::new(ACCOUNTING, "Ödemelerim", "Wallet", "/accounting/my-payments")
            .with_capabilities(ModuleCapabilities::VIEW_OWN),
        notifications().with_capabilities(ModuleCapabilities::VIEW_OWN),
    ]
}

fn musteri_menu() -> Vec<MenuItem> {
    vec![
        dashboard(),
        MenuItem::new(CUSTOMER_MANAGEMENT, "Durumum", "UserCheck", "/my-status")
            .with_capabilities(ModuleCapabilities::VIEW_OWN),
        MenuItem::new(DOCUMENT_MANAGEMENT, "Evraklarım", "FileText", "/my-documents")
            .with_capabilities(ModuleCapabilities::VIEW_OWN),
        notifications().with_capabilities(ModuleCapabilities::VIEW_OWN),
    ]
}
