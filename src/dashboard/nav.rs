//! Sidebar navigation and the role-visibility policy
//!
//! Visibility is a pure function of `(role, key)`. The policy knows three
//! rules; every other role (admin, guest, unrecognized text) sees the
//! whole sidebar.

use serde::Serialize;

use crate::session::Role;

/// Keys hidden from staff accounts
pub const STAFF_HIDDEN_KEYS: [&str; 3] = ["backup", "settings", "staff"];

/// The only key a cashier sees
pub const CASHIER_KEY: &str = "pos";

/// One entry of the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Stable identifier (the markup's `data-key`)
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Sidebar entries in display order
pub const NAV_ITEMS: [NavItem; 8] = [
    NavItem { key: "dashboard", label: "Dashboard", icon: "📊" },
    NavItem { key: "inventory", label: "Inventory", icon: "📦" },
    NavItem { key: "pos", label: "Point of Sale", icon: "🛒" },
    NavItem { key: "customers", label: "Customers", icon: "👥" },
    NavItem { key: "reports", label: "Reports", icon: "📈" },
    NavItem { key: "backup", label: "Backup", icon: "💾" },
    NavItem { key: "settings", label: "Settings", icon: "⚙️" },
    NavItem { key: "staff", label: "Staff", icon: "🧑‍⚕️" },
];

impl NavItem {
    /// Look up a catalog entry by key
    pub fn find(key: &str) -> Option<&'static NavItem> {
        NAV_ITEMS.iter().find(|item| item.key == key)
    }

    pub fn is_visible_to(&self, role: &Role) -> bool {
        is_visible(role, self.key)
    }
}

/// Whether `role` may see the nav item named `key`
pub fn is_visible(role: &Role, key: &str) -> bool {
    match role {
        Role::Staff => !STAFF_HIDDEN_KEYS.contains(&key),
        Role::Cashier => key == CASHIER_KEY,
        Role::Admin | Role::Guest | Role::Other(_) => true,
    }
}

/// Catalog entries `role` can see, in display order
pub fn visible_items(role: &Role) -> Vec<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| item.is_visible_to(role))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_keys(role: &Role) -> Vec<&'static str> {
        visible_items(role).into_iter().map(|item| item.key).collect()
    }

    #[test]
    fn test_admin_sees_everything() {
        assert_eq!(visible_keys(&Role::Admin).len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_staff_loses_admin_pages() {
        assert_eq!(
            visible_keys(&Role::Staff),
            vec!["dashboard", "inventory", "pos", "customers", "reports"]
        );
        for key in STAFF_HIDDEN_KEYS {
            assert!(!is_visible(&Role::Staff, key));
        }
    }

    #[test]
    fn test_cashier_only_sees_pos() {
        assert_eq!(visible_keys(&Role::Cashier), vec!["pos"]);
    }

    #[test]
    fn test_guest_and_unknown_roles_are_unrestricted() {
        assert_eq!(visible_keys(&Role::Guest).len(), NAV_ITEMS.len());
        assert_eq!(
            visible_keys(&Role::Other("pharmacist".into())).len(),
            NAV_ITEMS.len()
        );
    }

    #[test]
    fn test_policy_covers_keys_outside_catalog() {
        assert!(is_visible(&Role::Staff, "audit"));
        assert!(!is_visible(&Role::Cashier, "audit"));
    }

    #[test]
    fn test_catalog_keys_unique() {
        let mut keys: Vec<_> = NAV_ITEMS.iter().map(|item| item.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), NAV_ITEMS.len());
        assert_eq!(NavItem::find("pos").map(|item| item.label), Some("Point of Sale"));
        assert!(NavItem::find("nope").is_none());
    }
}
