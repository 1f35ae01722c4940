//! Signal-backed View
//!
//! Implements the controller's `ViewBinding` by writing into Leptos
//! signals; components render from those signals.

use leptos::*;
use std::collections::HashMap;

use biopharm::dashboard::{ChartSlot, ChartSpec, SidebarStyle};
use biopharm::view::{FormField, Page, StatField, ViewBinding};

/// Reactive view state provided to all components
#[derive(Clone, Copy)]
pub struct SignalView {
    pub role: RwSignal<String>,
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub welcome: RwSignal<String>,
    pub role_label: RwSignal<String>,
    /// Nav keys the controller has hidden
    pub hidden_nav: RwSignal<Vec<String>>,
    pub sidebar: RwSignal<SidebarStyle>,
    pub stats: RwSignal<HashMap<StatField, String>>,
    pub charts: RwSignal<HashMap<ChartSlot, ChartSpec>>,
    /// Route the app should move to next
    pub pending_page: RwSignal<Option<Page>>,
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            role: create_rw_signal(String::new()),
            username: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            welcome: create_rw_signal(String::new()),
            role_label: create_rw_signal(String::new()),
            hidden_nav: create_rw_signal(Vec::new()),
            sidebar: create_rw_signal(SidebarStyle::EXPANDED),
            stats: create_rw_signal(HashMap::new()),
            charts: create_rw_signal(HashMap::new()),
            pending_page: create_rw_signal(None),
        }
    }

    pub fn form_signal(&self, field: FormField) -> RwSignal<String> {
        match field {
            FormField::Role => self.role,
            FormField::Username => self.username,
            FormField::Password => self.password,
        }
    }

    pub fn is_nav_visible(&self, key: &str) -> bool {
        self.hidden_nav.with(|hidden| !hidden.iter().any(|k| k == key))
    }
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewBinding for SignalView {
    fn form_value(&self, field: FormField) -> String {
        self.form_signal(field).get_untracked()
    }

    fn set_welcome_text(&mut self, text: &str) {
        self.welcome.set(text.to_string());
    }

    fn set_role_label(&mut self, text: &str) {
        self.role_label.set(text.to_string());
    }

    fn set_nav_item_visible(&mut self, key: &str, visible: bool) {
        self.hidden_nav.update(|hidden| {
            hidden.retain(|k| k != key);
            if !visible {
                hidden.push(key.to_string());
            }
        });
    }

    fn set_sidebar_collapsed(&mut self, style: &SidebarStyle) {
        self.sidebar.set(*style);
    }

    fn set_stat(&mut self, field: StatField, value: &str) {
        self.stats.update(|stats| {
            stats.insert(field, value.to_string());
        });
    }

    fn draw_chart(&mut self, slot: ChartSlot, spec: &ChartSpec) {
        self.charts.update(|charts| {
            charts.insert(slot, spec.clone());
        });
    }

    fn show_alert(&mut self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                let _ = window.alert_with_message(message);
            }
            None => web_sys::console::warn_1(&message.into()),
        }
    }

    fn navigate(&mut self, page: Page) {
        self.pending_page.set(Some(page));
    }
}

/// Provide the view state to the component tree
pub fn provide_signal_view() -> SignalView {
    let view = SignalView::new();
    provide_context(view);
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_visibility_toggles() {
        let runtime = create_runtime();
        let mut view = SignalView::new();

        view.set_nav_item_visible("staff", false);
        view.set_nav_item_visible("staff", false);
        assert!(!view.is_nav_visible("staff"));
        assert_eq!(view.hidden_nav.get_untracked().len(), 1);

        view.set_nav_item_visible("staff", true);
        assert!(view.is_nav_visible("staff"));

        runtime.dispose();
    }

    #[test]
    fn test_form_values_and_navigation() {
        let runtime = create_runtime();
        let mut view = SignalView::new();

        view.username.set("carol".to_string());
        assert_eq!(view.form_value(FormField::Username), "carol");
        assert_eq!(view.form_value(FormField::Password), "");

        view.navigate(Page::Dashboard);
        assert_eq!(view.pending_page.get_untracked(), Some(Page::Dashboard));

        runtime.dispose();
    }
}
