//! BioPharm Dashboard
//!
//! - **nav**: sidebar catalog and the role-visibility policy
//! - **layout**: collapsible sidebar state and styles
//! - **charts**: sample data, stat values and chart configs
//! - **controller**: the session & view controller
//! - **error**: Error types
//!
//! # Architecture
//!
//! ```text
//! login form ─▶ SessionStore ─▶ load_dashboard ─▶ ViewBinding
//!                                                  ├─ welcome / role label
//!                                                  ├─ nav visibility
//!                                                  ├─ sidebar style
//!                                                  └─ charts + stat cards
//! ```

pub mod charts;
pub mod controller;
pub mod error;
pub mod layout;
pub mod nav;

pub use charts::{
    ChartKind, ChartOptions, ChartSlot, ChartSpec, DashboardStats, Dataset, Paint, SampleData,
};
pub use controller::DashboardController;
pub use error::{DashboardError, DashboardResult, ValidationError};
pub use layout::{SidebarLayout, SidebarStyle};
pub use nav::{is_visible, visible_items, NavItem, NAV_ITEMS};
