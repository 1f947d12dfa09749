//! Menu resolution and capability lookups
//!
//! Every function here is total: unknown roles, modules and capability keys
//! produce an empty menu, `false`, or a fallback label. Nothing is mutated;
//! decorated items are fresh copies of the registry entries.

use crate::registry::{get_role_config, modules};
use claimdesk_core::prelude::*;

/// How a dashboard counter turns into a badge.
#[derive(Debug, Clone, Copy)]
enum BadgeRule {
    /// Show the count, including zero
    Always,
    /// Show the count only when it is non-zero
    NonZero,
}

/// Badge source for a module id, if it carries one.
fn badge_source(module_id: &str, stats: &DashboardStats) -> Option<(Option<u64>, BadgeRule)> {
    match module_id {
        modules::CUSTOMER_MANAGEMENT => Some((stats.active_customers, BadgeRule::Always)),
        modules::DEALER_MANAGEMENT => Some((stats.total_dealers, BadgeRule::Always)),
        modules::ACCOUNTING => Some((stats.pending_payments, BadgeRule::NonZero)),
        modules::NOTIFICATIONS => Some((stats.unread_notifications, BadgeRule::NonZero)),
        _ => None,
    }
}

fn decorate(item: &MenuItem, stats: &DashboardStats) -> MenuItem {
    match badge_source(&item.id, stats) {
        Some((Some(count), BadgeRule::Always)) => item.badged(Some(count.to_string())),
        Some((Some(0), BadgeRule::NonZero)) => item.badged(None),
        Some((Some(count), BadgeRule::NonZero)) => item.badged(Some(count.to_string())),
        _ => item.clone(),
    }
}

/// Resolve the sidebar of `role`, optionally decorated with badges.
///
/// Customer and dealer counts are shown even when zero; pending payments and
/// unread notifications are only flagged when non-zero. An unknown role gets
/// an empty menu.
///
/// ```rust
/// use claimdesk_core::DashboardStats;
/// use claimdesk_rbac::evaluator::resolve_menu;
///
/// let stats = DashboardStats::empty().with_active_customers(0);
/// let menu = resolve_menu("ikincil-admin", Some(&stats));
/// assert_eq!(menu[1].badge.as_deref(), Some("0"));
/// assert!(resolve_menu("nobody", None).is_empty());
/// ```
pub fn resolve_menu(role: &str, stats: Option<&DashboardStats>) -> Vec<MenuItem> {
    let Some(config) = get_role_config(role) else {
        return Vec::new();
    };

    match stats {
        Some(stats) => config
            .menu_items
            .iter()
            .map(|item| decorate(item, stats))
            .collect(),
        None => config.menu_items.clone(),
    }
}

/// Keep items whose label, or any submenu label, contains `query`.
///
/// Matching is a case-insensitive substring test on the trimmed query. A
/// group that matches through a child is kept whole. A blank query returns
/// the input unchanged.
pub fn filter_menu_by_search(items: &[MenuItem], query: &str) -> Vec<MenuItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    let contains = |label: &str| label.to_lowercase().contains(&needle);
    items
        .iter()
        .filter(|item| contains(&item.label) || item.submenu.iter().any(|link| contains(&link.label)))
        .cloned()
        .collect()
}

/// Whether `role` holds `capability` on the top-level module `module_id`.
///
/// `capability` is a key such as `canDelete`. Submenu links are not searched.
pub fn has_capability(role: &str, module_id: &str, capability: &str) -> bool {
    capability
        .parse::<CapabilityKind>()
        .is_ok_and(|kind| has_capability_kind(role, module_id, kind))
}

/// Typed form of [`has_capability`].
pub fn has_capability_kind(role: &str, module_id: &str, kind: CapabilityKind) -> bool {
    get_role_config(role)
        .and_then(|config| config.item(module_id))
        .is_some_and(|item| item.capability(kind))
}

/// Role-specific label of a module, falling back to the module id.
pub fn get_module_label(role: &str, module_id: &str) -> String {
    get_role_config(role)
        .and_then(|config| config.item(module_id))
        .map(|item| item.label.clone())
        .unwrap_or_else(|| module_id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RoleRegistry;

    fn badge_of<'a>(menu: &'a [MenuItem], id: &str) -> Option<&'a str> {
        menu.iter()
            .find(|item| item.id == id)
            .and_then(|item| item.badge.as_deref())
    }

    #[test]
    fn menu_matches_registry_for_every_role() {
        let registry = RoleRegistry::global();
        for role in registry.roles() {
            let menu = resolve_menu(role.as_str(), None);
            assert_eq!(menu, registry.get(role).unwrap().menu_items);
        }
    }

    #[test]
    fn zero_counts_follow_badge_rules() {
        let stats = DashboardStats::empty()
            .with_active_customers(0)
            .with_total_dealers(0)
            .with_pending_payments(0)
            .with_unread_notifications(0);
        let menu = resolve_menu("superadmin", Some(&stats));

        assert_eq!(badge_of(&menu, modules::CUSTOMER_MANAGEMENT), Some("0"));
        assert_eq!(badge_of(&menu, modules::DEALER_MANAGEMENT), Some("0"));
        assert_eq!(badge_of(&menu, modules::ACCOUNTING), None);
        assert_eq!(badge_of(&menu, modules::NOTIFICATIONS), None);
    }

    #[test]
    fn non_zero_counts_are_stringified() {
        let stats = DashboardStats::empty()
            .with_active_customers(3)
            .with_total_dealers(41)
            .with_pending_payments(2)
            .with_unread_notifications(9);
        let menu = resolve_menu("superadmin", Some(&stats));

        assert_eq!(badge_of(&menu, modules::CUSTOMER_MANAGEMENT), Some("3"));
        assert_eq!(badge_of(&menu, modules::DEALER_MANAGEMENT), Some("41"));
        assert_eq!(badge_of(&menu, modules::ACCOUNTING), Some("2"));
        assert_eq!(badge_of(&menu, modules::NOTIFICATIONS), Some("9"));
        assert_eq!(badge_of(&menu, modules::DASHBOARD), None);
    }

    #[test]
    fn missing_stats_fields_leave_items_untouched() {
        let stats = DashboardStats::empty().with_pending_payments(5);
        let menu = resolve_menu("birincil-admin", Some(&stats));
        let plain = resolve_menu("birincil-admin", None);

        assert_eq!(badge_of(&menu, modules::ACCOUNTING), Some("5"));
        for (decorated, original) in menu.iter().zip(&plain) {
            if decorated.id != modules::ACCOUNTING {
                assert_eq!(decorated, original);
            }
        }
    }

    #[test]
    fn registry_is_not_mutated_by_decoration() {
        let stats = DashboardStats::empty().with_active_customers(77);
        let _ = resolve_menu("bayi", Some(&stats));
        assert!(resolve_menu("bayi", None).iter().all(|item| item.badge.is_none()));
    }

    #[test]
    fn unknown_role_gets_empty_menu() {
        assert!(resolve_menu("nonexistent-role", None).is_empty());
        assert!(resolve_menu("operasyon", Some(&DashboardStats::empty())).is_empty());
    }

    #[test]
    fn resolution_is_idempotent() {
        let stats = DashboardStats::empty().with_unread_notifications(4);
        assert_eq!(
            resolve_menu("evrak-birimi", Some(&stats)),
            resolve_menu("evrak-birimi", Some(&stats))
        );
    }

    #[test]
    fn blank_search_returns_menu_unchanged() {
        let menu = resolve_menu("superadmin", None);
        assert_eq!(filter_menu_by_search(&menu, ""), menu);
        assert_eq!(filter_menu_by_search(&menu, "   "), menu);
    }

    #[test]
    fn search_matches_labels_and_children() {
        let menu = resolve_menu("superadmin", None);
        let found = filter_menu_by_search(&menu, "evrak");
        let ids: Vec<&str> = found.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec![modules::DOCUMENT_MANAGEMENT]);
        assert_eq!(found[0].submenu.len(), 2);

        // "rapor" only appears in a child of the accounting group
        let found = filter_menu_by_search(&menu, "RAPOR");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, modules::ACCOUNTING);
        assert_eq!(found[0].submenu.len(), 2);
    }

    #[test]
    fn search_without_match_is_empty() {
        let menu = resolve_menu("musteri", None);
        assert!(filter_menu_by_search(&menu, "muhasebe").is_empty());
    }

    #[test]
    fn capability_lookups() {
        assert!(has_capability("superadmin", modules::DEALER_MANAGEMENT, "canDelete"));
        assert!(!has_capability("bayi", modules::DEALER_MANAGEMENT, "canDelete"));
        assert!(has_capability("bayi", modules::CUSTOMER_MANAGEMENT, "canViewOwn"));
        assert!(!has_capability("bayi", modules::CUSTOMER_MANAGEMENT, "canViewAll"));
        assert!(has_capability("ikincil-admin", modules::CUSTOMER_MANAGEMENT, "can_create"));
    }

    #[test]
    fn capability_lookups_are_total() {
        assert!(!has_capability("ghost", modules::CUSTOMER_MANAGEMENT, "canCreate"));
        assert!(!has_capability("superadmin", "no-such-module", "canCreate"));
        assert!(!has_capability("superadmin", modules::CUSTOMER_MANAGEMENT, "canFly"));
        assert!(!has_capability("superadmin", modules::DASHBOARD, "canCreate"));
        // submenu ids are not top-level modules
        assert!(!has_capability("superadmin", "dealer-payments", "canCreate"));
    }

    #[test]
    fn module_labels() {
        assert_eq!(
            get_module_label("ikincil-admin", modules::DOCUMENT_MANAGEMENT),
            "Sonuç Evrakları"
        );
        assert_eq!(get_module_label("musteri", modules::CUSTOMER_MANAGEMENT), "Durumum");
        assert_eq!(get_module_label("bayi", modules::DEALER_MANAGEMENT), "dealer-management");
        assert_eq!(get_module_label("ghost", "anything"), "anything");
    }
}
