//! # BioPharm
//!
//! Role-scoped dashboard for a pharmacy back-office: a login form stores a
//! two-field session, and the dashboard shows or hides sidebar entries by
//! role, collapses its sidebar on demand and seeds two sample charts.
//!
//! ## Modules
//!
//! - [`session`]: session record, roles and the pluggable session stores
//! - [`dashboard`]: visibility policy, sidebar layout, charts and the controller
//! - [`view`]: the `ViewBinding` contract plus in-memory and text front-ends
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust
//! use biopharm::dashboard::DashboardController;
//! use biopharm::session::MemoryStore;
//! use biopharm::view::RecordingView;
//!
//! let mut controller = DashboardController::new(MemoryStore::new(), RecordingView::new());
//!
//! controller.login("cashier", "carol", "secret").unwrap();
//! let (session, stats) = controller.open_dashboard();
//!
//! assert_eq!(session.username, "carol");
//! assert_eq!(controller.view().visible_nav_keys(), vec!["pos"]);
//! assert_eq!(stats.total_sales, 1020);
//!
//! controller.logout().unwrap();
//! ```

pub mod config;
pub mod dashboard;
pub mod logging;
pub mod session;
pub mod view;

// Re-export top-level types for convenience
pub use session::{
    FileStore, KeyValueStore, MemoryStore, Role, SessionError, SessionRecord, SessionResult,
    SessionState, SessionStore,
};

pub use dashboard::{
    ChartSlot, ChartSpec, DashboardController, DashboardError, DashboardResult, DashboardStats,
    NavItem, SampleData, SidebarLayout, SidebarStyle, ValidationError,
};

pub use view::{FormField, Page, RecordingView, StatField, ViewBinding};

pub use config::{Config, ConfigError, DashboardConfig, LoggingConfig, SessionBackend, SessionConfig};
