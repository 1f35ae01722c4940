//! State Management
//!
//! Browser-side session store and the signal-backed view.

pub mod storage;
pub mod view;

pub use storage::LocalStorage;
pub use view::{provide_signal_view, SignalView};
