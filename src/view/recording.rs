//! In-memory view
//!
//! `RecordingView` keeps the last value written to every element so tests
//! and the terminal renderer can inspect what a page would show.

use std::collections::{BTreeMap, HashMap};

use super::binding::{FormField, Page, StatField, ViewBinding};
use crate::dashboard::charts::{ChartSlot, ChartSpec};
use crate::dashboard::layout::SidebarStyle;
use crate::dashboard::nav::NAV_ITEMS;

#[derive(Debug, Clone)]
pub struct RecordingView {
    form: BTreeMap<FormField, String>,
    /// Nav keys in markup order with their current visibility
    nav: Vec<(String, bool)>,
    welcome_text: Option<String>,
    role_label: Option<String>,
    sidebar: SidebarStyle,
    stats: BTreeMap<StatField, String>,
    charts: HashMap<ChartSlot, ChartSpec>,
    alerts: Vec<String>,
    page: Option<Page>,
    navigations: Vec<Page>,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self::with_nav_keys(NAV_ITEMS.iter().map(|item| item.key))
    }
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// View whose markup holds exactly these nav entries, all shown
    pub fn with_nav_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            form: BTreeMap::new(),
            nav: keys.into_iter().map(|k| (k.into(), true)).collect(),
            welcome_text: None,
            role_label: None,
            sidebar: SidebarStyle::EXPANDED,
            stats: BTreeMap::new(),
            charts: HashMap::new(),
            alerts: Vec::new(),
            page: None,
            navigations: Vec::new(),
        }
    }

    /// Builder method: fill the login form
    pub fn with_form(
        mut self,
        role: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.fill_form(role, username, password);
        self
    }

    pub fn fill_form(
        &mut self,
        role: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) {
        self.form.insert(FormField::Role, role.into());
        self.form.insert(FormField::Username, username.into());
        self.form.insert(FormField::Password, password.into());
    }

    pub fn welcome_text(&self) -> Option<&str> {
        self.welcome_text.as_deref()
    }

    pub fn role_label(&self) -> Option<&str> {
        self.role_label.as_deref()
    }

    /// Visibility of a nav entry, `None` if the markup has no such key
    pub fn is_nav_visible(&self, key: &str) -> Option<bool> {
        self.nav.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    /// Visible nav keys in markup order
    pub fn visible_nav_keys(&self) -> Vec<&str> {
        self.nav
            .iter()
            .filter(|(_, visible)| *visible)
            .map(|(key, _)| key.as_str())
            .collect()
    }

    pub fn sidebar(&self) -> &SidebarStyle {
        &self.sidebar
    }

    pub fn stat(&self, field: StatField) -> Option<&str> {
        self.stats.get(&field).map(String::as_str)
    }

    pub fn chart(&self, slot: ChartSlot) -> Option<&ChartSpec> {
        self.charts.get(&slot)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Page last navigated to
    pub fn page(&self) -> Option<Page> {
        self.page
    }

    /// Every navigation in order
    pub fn navigations(&self) -> &[Page] {
        &self.navigations
    }
}

impl ViewBinding for RecordingView {
    fn form_value(&self, field: FormField) -> String {
        self.form.get(&field).cloned().unwrap_or_default()
    }

    fn nav_keys(&self) -> Vec<String> {
        self.nav.iter().map(|(key, _)| key.clone()).collect()
    }

    fn set_welcome_text(&mut self, text: &str) {
        self.welcome_text = Some(text.to_string());
    }

    fn set_role_label(&mut self, text: &str) {
        self.role_label = Some(text.to_string());
    }

    fn set_nav_item_visible(&mut self, key: &str, visible: bool) {
        if let Some(entry) = self.nav.iter_mut().find(|(k, _)| k == key) {
            entry.1 = visible;
        }
    }

    fn set_sidebar_collapsed(&mut self, style: &SidebarStyle) {
        self.sidebar = *style;
    }

    fn set_stat(&mut self, field: StatField, value: &str) {
        self.stats.insert(field, value.to_string());
    }

    fn draw_chart(&mut self, slot: ChartSlot, spec: &ChartSpec) {
        self.charts.insert(slot, spec.clone());
    }

    fn show_alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn navigate(&mut self, page: Page) {
        self.page = Some(page);
        self.navigations.push(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_defaults() {
        let view = RecordingView::new();
        assert_eq!(view.visible_nav_keys().len(), NAV_ITEMS.len());
        assert_eq!(view.sidebar(), &SidebarStyle::EXPANDED);
        assert_eq!(view.form_value(FormField::Password), "");
        assert!(view.page().is_none());
    }

    #[test]
    fn test_unknown_nav_key_ignored() {
        let mut view = RecordingView::with_nav_keys(["pos", "backup"]);
        view.set_nav_item_visible("reports", false);
        view.set_nav_item_visible("backup", false);

        assert_eq!(view.is_nav_visible("reports"), None);
        assert_eq!(view.visible_nav_keys(), vec!["pos"]);
    }

    #[test]
    fn test_records_navigation() {
        let mut view = RecordingView::new().with_form("admin", "root", "pw");
        assert_eq!(view.form_value(FormField::Role), "admin");

        view.navigate(Page::Dashboard);
        view.navigate(Page::Login);
        assert_eq!(view.page(), Some(Page::Login));
        assert_eq!(view.navigations(), &[Page::Dashboard, Page::Login]);
    }
}
