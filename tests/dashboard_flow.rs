//! End-to-end flow over the file-backed store
//!
//! Each step builds a fresh controller, the way every CLI invocation or
//! page load does, so state only travels through the session file.

use biopharm::dashboard::{DashboardController, NAV_ITEMS};
use biopharm::session::{FileStore, KeyValueStore, SessionState, ROLE_KEY, USERNAME_KEY};
use biopharm::view::{Page, RecordingView, StatField};
use tempfile::tempdir;

fn page_load(path: &std::path::Path) -> DashboardController<FileStore, RecordingView> {
    DashboardController::new(FileStore::new(path), RecordingView::new())
}

#[test]
fn staff_session_survives_reload_until_logout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    // Login page
    let mut login = DashboardController::new(
        FileStore::new(&path),
        RecordingView::new().with_form("staff", " sam ", "pw"),
    );
    login.submit_login().unwrap();
    assert_eq!(login.view().navigations(), &[Page::Dashboard]);

    // Dashboard page
    let mut dashboard = page_load(&path);
    let (session, stats) = dashboard.open_dashboard();
    assert_eq!(session.username, "sam");
    assert_eq!(stats.total_sales, 1020);

    let view = dashboard.view();
    assert_eq!(view.welcome_text(), Some("sam (staff)"));
    assert_eq!(view.visible_nav_keys().len(), NAV_ITEMS.len() - 3);
    assert_eq!(view.stat(StatField::Products), Some("120"));

    // Reload keeps the session
    let mut reload = page_load(&path);
    reload.load_dashboard();
    assert_eq!(reload.view().welcome_text(), Some("sam (staff)"));

    // Logout clears both keys
    reload.logout().unwrap();
    let store = FileStore::new(&path);
    assert_eq!(store.get_item(ROLE_KEY).unwrap(), None);
    assert_eq!(store.get_item(USERNAME_KEY).unwrap(), None);

    // Next load is a first-ever load
    let mut after = page_load(&path);
    assert_eq!(after.state().unwrap(), SessionState::LoggedOut);
    after.load_dashboard();
    assert_eq!(after.view().welcome_text(), Some("User (guest)"));
    assert_eq!(after.view().visible_nav_keys().len(), NAV_ITEMS.len());
}

#[test]
fn rejected_login_leaves_no_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut login = DashboardController::new(
        FileStore::new(&path),
        RecordingView::new().with_form("admin", "amina", ""),
    );
    assert!(login.submit_login().is_err());
    assert!(!path.exists());
    assert!(login.view().navigations().is_empty());
    assert_eq!(login.view().alerts().len(), 1);
}

#[test]
fn cashier_then_admin_relogin() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut ctl = page_load(&path);
    ctl.login("cashier", "carol", "pw").unwrap();
    ctl.load_dashboard();
    assert_eq!(ctl.view().visible_nav_keys(), vec!["pos"]);

    // Last writer wins
    let mut other = page_load(&path);
    other.login("admin", "amina", "pw").unwrap();

    let mut reload = page_load(&path);
    reload.load_dashboard();
    assert_eq!(reload.view().welcome_text(), Some("amina (admin)"));
    assert_eq!(reload.view().visible_nav_keys().len(), NAV_ITEMS.len());
}
