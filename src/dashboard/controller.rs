//! Session & view controller
//!
//! Drives the login → dashboard → logout flow over an injected
//! [`SessionStore`] and [`ViewBinding`]. Every operation runs to
//! completion on the caller's thread.
//!
//! ```text
//!              login (valid)
//!   LoggedOut ───────────────▶ LoggedIn(role, username)
//!       ▲                               │
//!       └────────────── logout ─────────┘
//! ```

use super::charts::{ChartSlot, DashboardStats, SampleData};
use super::error::{DashboardResult, ValidationError};
use super::layout::{SidebarLayout, SidebarStyle};
use super::nav;
use crate::session::{Role, SessionRecord, SessionResult, SessionState, SessionStore};
use crate::view::{FormField, Page, StatField, ViewBinding};

pub struct DashboardController<S, V> {
    store: S,
    view: V,
    sidebar: SidebarLayout,
    sample: SampleData,
}

impl<S: SessionStore, V: ViewBinding> DashboardController<S, V> {
    pub fn new(store: S, view: V) -> Self {
        Self {
            store,
            view,
            sidebar: SidebarLayout::default(),
            sample: SampleData::DEFAULT,
        }
    }

    /// Builder method: replace the chart sample data
    pub fn with_sample_data(mut self, sample: SampleData) -> Self {
        self.sample = sample;
        self
    }

    /// Builder method: start with the sidebar collapsed
    pub fn with_sidebar(mut self, layout: SidebarLayout) -> Self {
        self.sidebar = layout;
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (S, V) {
        (self.store, self.view)
    }

    /// Whether a session is currently stored
    pub fn state(&self) -> SessionResult<SessionState> {
        self.store.get().map(SessionState::from)
    }

    /// Store the chosen role and name, then open the dashboard
    ///
    /// The password is only checked for presence. On a validation failure
    /// an alert is shown and nothing is stored.
    pub fn login(&mut self, role: &str, username: &str, password: &str) -> DashboardResult<()> {
        let username = username.trim();

        if username.is_empty() || password.trim().is_empty() {
            let err = ValidationError::MissingCredentials;
            tracing::debug!("Login rejected: {}", err);
            self.view.show_alert(&err.to_string());
            return Err(err.into());
        }

        // The role text is persisted as typed; only reads interpret it.
        self.store.set_raw(role, username)?;
        tracing::info!(role = %Role::parse(role), username, "User logged in");

        self.view.navigate(Page::Dashboard);
        Ok(())
    }

    /// Read the login form from the view and submit it
    pub fn submit_login(&mut self) -> DashboardResult<()> {
        let role = self.view.form_value(FormField::Role);
        let username = self.view.form_value(FormField::Username);
        let password = self.view.form_value(FormField::Password);
        self.login(&role, &username, &password)
    }

    /// Apply the stored session to the dashboard
    ///
    /// A missing or unreadable session falls back to `User (guest)`.
    pub fn load_dashboard(&mut self) -> SessionRecord {
        let record = match self.store.get() {
            Ok(Some(record)) => record,
            Ok(None) => SessionRecord::anonymous(),
            Err(e) => {
                tracing::warn!("Failed to read session, using defaults: {}", e);
                SessionRecord::anonymous()
            }
        };

        self.view.set_welcome_text(&record.welcome_text());
        self.view.set_role_label(record.role.as_str());

        let mut shown = 0usize;
        let keys = self.view.nav_keys();
        for key in &keys {
            let visible = nav::is_visible(&record.role, key);
            tracing::debug!(key = %key, visible, "nav item");
            self.view.set_nav_item_visible(key, visible);
            shown += usize::from(visible);
        }

        self.view.set_sidebar_collapsed(&self.sidebar.style());

        tracing::info!(
            role = %record.role,
            visible = shown,
            total = keys.len(),
            "Dashboard loaded"
        );
        record
    }

    /// Collapse or expand the sidebar
    pub fn toggle_sidebar(&mut self) -> SidebarStyle {
        let style = self.sidebar.toggle();
        self.view.set_sidebar_collapsed(&style);
        tracing::debug!(collapsed = style.collapsed, "Sidebar toggled");
        style
    }

    /// Draw both charts and fill the stat cards from the sample data
    pub fn seed_charts(&mut self) -> DashboardStats {
        let stats = self.sample.stats();

        self.view.draw_chart(ChartSlot::Sales, &self.sample.sales_chart());
        self.view.draw_chart(ChartSlot::Inventory, &self.sample.inventory_chart());

        for (field, value) in [
            (StatField::Sales, stats.total_sales),
            (StatField::Products, stats.products),
            (StatField::Expiry, stats.near_expiry),
            (StatField::LowStock, stats.low_stock),
        ] {
            self.view.set_stat(field, &value.to_string());
        }

        stats
    }

    /// Page-load entry point for the dashboard: session, layout and charts
    pub fn open_dashboard(&mut self) -> (SessionRecord, DashboardStats) {
        let record = self.load_dashboard();
        let stats = self.seed_charts();
        (record, stats)
    }

    /// Forget the session and return to the login page
    pub fn logout(&mut self) -> DashboardResult<()> {
        self.store.clear()?;
        tracing::info!("User logged out");
        self.view.navigate(Page::Login);
        Ok(())
    }
}
