//! BioPharm walkthrough
//!
//! Runs the login → dashboard → sidebar toggle → logout flow once per role
//! against in-memory collaborators and logs what each role sees.

use biopharm::config::Config;
use biopharm::dashboard::DashboardController;
use biopharm::logging::init_logging;
use biopharm::session::MemoryStore;
use biopharm::view::RecordingView;

const WALKTHROUGH: [(&str, &str); 5] = [
    ("admin", "amina"),
    ("staff", "sam"),
    ("cashier", "carol"),
    ("guest", "gus"),
    ("pharmacist", "pat"),
];

fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_logging(&config.logging)?;

    tracing::info!("BioPharm Dashboard v{}", env!("CARGO_PKG_VERSION"));

    for (role, username) in WALKTHROUGH {
        let mut controller = DashboardController::new(MemoryStore::new(), RecordingView::new())
            .with_sidebar(config.dashboard.sidebar());

        controller.login(role, username, "demo")?;
        let (session, stats) = controller.open_dashboard();

        tracing::info!(
            "{} sees {:?} (total sales {})",
            session.welcome_text(),
            controller.view().visible_nav_keys(),
            stats.total_sales
        );

        let style = controller.toggle_sidebar();
        tracing::info!(
            "Sidebar {} → content margin {}",
            if style.collapsed { "collapsed" } else { "expanded" },
            style.margin_left_css()
        );

        controller.logout()?;
        tracing::info!("State after logout: {}", controller.state()?);
    }

    // A login without a password never reaches the dashboard
    let mut controller = DashboardController::new(MemoryStore::new(), RecordingView::new());
    if let Err(e) = controller.login("admin", "amina", "   ") {
        tracing::info!("Rejected login: {}", e);
    }

    tracing::info!("Walkthrough complete");
    Ok(())
}
