//! Sidebar menu entries

use super::{CapabilityKind, ModuleCapabilities, Role};
use serde::{Deserialize, Serialize};

/// One navigable destination in the sidebar.
///
/// Menu items are values: the registry builds them once and badge decoration
/// derives a new item through [`MenuItem::badged`] instead of mutating the
/// registry copy. Nesting is limited to one level by construction, since
/// children are [`MenuLink`]s which cannot carry a submenu of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Stable module identifier, used for badge and capability lookups
    pub id: String,
    /// Role-specific display label
    pub label: String,
    /// Symbolic icon name, resolved by the presentation layer
    pub icon: String,
    /// Route path
    pub href: String,
    /// Short dynamic marker, usually a count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Whether the item renders as an expandable group
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub has_submenu: bool,
    /// Ordered child links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submenu: Vec<MenuLink>,
    /// CRUD affordances on this module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<ModuleCapabilities>,
}

impl MenuItem {
    /// Create a plain item with no badge, submenu or capabilities.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            href: href.into(),
            badge: None,
            has_submenu: false,
            submenu: Vec::new(),
            capabilities: None,
        }
    }

    /// Attach a capability set.
    pub fn with_capabilities(mut self, capabilities: ModuleCapabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    /// Attach child links and mark the item as a group.
    pub fn with_submenu(mut self, links: Vec<MenuLink>) -> Self {
        self.has_submenu = !links.is_empty();
        self.submenu = links;
        self
    }

    /// Derive a copy of this item carrying `badge`.
    ///
    /// `None` clears any badge present on the original.
    pub fn badged(&self, badge: Option<String>) -> MenuItem {
        MenuItem {
            badge,
            ..self.clone()
        }
    }

    /// Read one capability flag; absent capability sets answer `false`.
    pub fn capability(&self, kind: CapabilityKind) -> bool {
        self.capabilities.is_some_and(|caps| caps.get(kind))
    }
}

/// Child entry of a grouped [`MenuItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
    /// Stable identifier
    pub id: String,
    /// Display label
    pub label: String,
    /// Symbolic icon name
    pub icon: String,
    /// Route path
    pub href: String,
}

impl MenuLink {
    /// Create a child link.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            href: href.into(),
        }
    }
}

/// Static menu definition of one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleConfig {
    /// Role the menu belongs to
    pub role: Role,
    /// Display name of the role
    pub display_name: String,
    /// Top-level items in sidebar order
    pub menu_items: Vec<MenuItem>,
}

impl RoleConfig {
    /// Create a role definition using the role's default display name.
    pub fn new(role: Role, menu_items: Vec<MenuItem>) -> Self {
        Self {
            role,
            display_name: role.display_name().to_string(),
            menu_items,
        }
    }

    /// First top-level item with the given module id.
    pub fn item(&self, module_id: &str) -> Option<&MenuItem> {
        self.menu_items.iter().find(|item| item.id == module_id)
    }
}
