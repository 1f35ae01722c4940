//! Collapsible sidebar layout

use serde::Serialize;

/// Main-area left margin with the sidebar expanded (px)
pub const EXPANDED_MARGIN_PX: u32 = 260;

/// Main-area left margin with the sidebar collapsed (px)
pub const COLLAPSED_MARGIN_PX: u32 = 80;

/// Gap between a nav icon and its label when labels are shown (px)
pub const ICON_GAP_PX: u32 = 12;

/// Style values applied to the sidebar and main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SidebarStyle {
    pub collapsed: bool,
    pub main_margin_left_px: u32,
    pub labels_visible: bool,
    pub icon_margin_right_px: u32,
}

impl SidebarStyle {
    pub const EXPANDED: SidebarStyle = SidebarStyle {
        collapsed: false,
        main_margin_left_px: EXPANDED_MARGIN_PX,
        labels_visible: true,
        icon_margin_right_px: ICON_GAP_PX,
    };

    pub const COLLAPSED: SidebarStyle = SidebarStyle {
        collapsed: true,
        main_margin_left_px: COLLAPSED_MARGIN_PX,
        labels_visible: false,
        icon_margin_right_px: 0,
    };

    /// CSS `margin-left` for the main area
    pub fn margin_left_css(&self) -> String {
        format!("{}px", self.main_margin_left_px)
    }

    /// CSS `display` for nav labels
    pub fn label_display_css(&self) -> &'static str {
        if self.labels_visible {
            "inline"
        } else {
            "none"
        }
    }

    /// CSS `margin-right` for nav icons
    pub fn icon_margin_css(&self) -> String {
        if self.icon_margin_right_px == 0 {
            "0".to_string()
        } else {
            format!("{}px", self.icon_margin_right_px)
        }
    }
}

/// Collapsed/expanded state, held only for the lifetime of the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarLayout {
    collapsed: bool,
}

impl SidebarLayout {
    pub fn new(collapsed: bool) -> Self {
        Self { collapsed }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn style(&self) -> SidebarStyle {
        if self.collapsed {
            SidebarStyle::COLLAPSED
        } else {
            SidebarStyle::EXPANDED
        }
    }

    /// Flip the state and return the style to apply
    pub fn toggle(&mut self) -> SidebarStyle {
        self.collapsed = !self.collapsed;
        self.style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_expanded() {
        let layout = SidebarLayout::default();
        assert!(!layout.is_collapsed());
        assert_eq!(layout.style().margin_left_css(), "260px");
        assert_eq!(layout.style().label_display_css(), "inline");
        assert_eq!(layout.style().icon_margin_css(), "12px");
    }

    #[test]
    fn test_collapse_values() {
        let mut layout = SidebarLayout::default();
        let style = layout.toggle();
        assert!(style.collapsed);
        assert_eq!(style.margin_left_css(), "80px");
        assert_eq!(style.label_display_css(), "none");
        assert_eq!(style.icon_margin_css(), "0");
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut layout = SidebarLayout::default();
        let original = layout.style();
        layout.toggle();
        let restored = layout.toggle();
        assert_eq!(restored, original);
        assert_eq!(restored.margin_left_css(), "260px");
        assert_eq!(restored.label_display_css(), "inline");
    }
}
