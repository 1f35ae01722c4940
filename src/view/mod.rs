//! View Layer
//!
//! - **binding**: the `ViewBinding` trait and the element-id contract
//! - **recording**: `RecordingView`, an in-memory front-end
//! - **text**: terminal rendering of a `RecordingView`

pub mod binding;
pub mod recording;
pub mod text;

pub use binding::{
    FormField, Page, StatField, ViewBinding, COLLAPSE_BUTTON_ID, NAV_ICON_CLASS, NAV_ITEM_CLASS,
    NAV_KEY_ATTR, NAV_LABEL_CLASS, SIDEBAR_ID, USER_ROLE_LABEL_ID, WELCOME_USER_ID,
};
pub use recording::RecordingView;
pub use text::{render_chart, render_dashboard};
