//! UI Components
//!
//! Reusable pieces of the dashboard page.

pub mod chart;
pub mod sidebar;
pub mod stat_card;

pub use chart::ChartCanvas;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
