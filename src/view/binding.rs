//! The presentation contract
//!
//! The controller never touches a rendering technology directly. It reads
//! form values and writes text, visibility, layout and charts through
//! [`ViewBinding`]. The element identifiers below are the markup contract of
//! the browser front-end; other front-ends use them as stable names.

use crate::dashboard::charts::{ChartSlot, ChartSpec};
use crate::dashboard::layout::SidebarStyle;
use crate::dashboard::nav::NAV_ITEMS;

pub const WELCOME_USER_ID: &str = "welcomeUser";
pub const USER_ROLE_LABEL_ID: &str = "userRoleLabel";
pub const SIDEBAR_ID: &str = "sidebar";
pub const COLLAPSE_BUTTON_ID: &str = "collapseBtn";

/// Class carried by every nav entry
pub const NAV_ITEM_CLASS: &str = "nav-item";
/// Attribute holding a nav entry's key
pub const NAV_KEY_ATTR: &str = "data-key";
pub const NAV_LABEL_CLASS: &str = "nav-label";
pub const NAV_ICON_CLASS: &str = "nav-ico";

/// Pages the controller can navigate between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Dashboard,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Login => "/",
            Page::Dashboard => "/dashboard",
        }
    }
}

/// Inputs of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Role,
    Username,
    Password,
}

impl FormField {
    pub fn element_id(&self) -> &'static str {
        match self {
            FormField::Role => "role",
            FormField::Username => "username",
            FormField::Password => "password",
        }
    }
}

/// Stat cards at the top of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatField {
    Sales,
    Products,
    Expiry,
    LowStock,
}

impl StatField {
    pub const ALL: [StatField; 4] = [
        StatField::Sales,
        StatField::Products,
        StatField::Expiry,
        StatField::LowStock,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            StatField::Sales => "val-sales",
            StatField::Products => "val-products",
            StatField::Expiry => "val-expiry",
            StatField::LowStock => "val-lowstock",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StatField::Sales => "Total Sales",
            StatField::Products => "Products",
            StatField::Expiry => "Near Expiry",
            StatField::LowStock => "Low Stock",
        }
    }
}

/// Everything the controller needs from a front-end
pub trait ViewBinding {
    /// Current text of a login form input
    fn form_value(&self, field: FormField) -> String;

    /// Keys of the nav entries present in the view
    fn nav_keys(&self) -> Vec<String> {
        NAV_ITEMS.iter().map(|item| item.key.to_string()).collect()
    }

    fn set_welcome_text(&mut self, text: &str);

    fn set_role_label(&mut self, text: &str);

    fn set_nav_item_visible(&mut self, key: &str, visible: bool);

    fn set_sidebar_collapsed(&mut self, style: &SidebarStyle);

    fn set_stat(&mut self, field: StatField, value: &str);

    /// Hand a chart config to the chart renderer
    fn draw_chart(&mut self, slot: ChartSlot, spec: &ChartSpec);

    /// Blocking user notification
    fn show_alert(&mut self, message: &str);

    fn navigate(&mut self, page: Page);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_ids() {
        assert_eq!(FormField::Username.element_id(), "username");
        let ids: Vec<_> = StatField::ALL.iter().map(|f| f.element_id()).collect();
        assert_eq!(ids, vec!["val-sales", "val-products", "val-expiry", "val-lowstock"]);
    }

    #[test]
    fn test_page_paths() {
        assert_eq!(Page::Login.path(), "/");
        assert_eq!(Page::Dashboard.path(), "/dashboard");
    }
}
