//! BioPharm CLI
//!
//! Terminal front-end for the dashboard:
//! - Log in / log out (session kept in the configured store)
//! - Show the current session
//! - Render the dashboard for the logged-in role
//! - Print chart configs as JSON

use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;

use biopharm::config::{generate_default_config, Config, SessionBackend};
use biopharm::dashboard::{ChartSlot, ChartSpec, DashboardController, SampleData, SidebarLayout};
use biopharm::logging::init_logging;
use biopharm::session::{KeyValueStore, SessionState};
use biopharm::view::{render_dashboard, RecordingView};

#[derive(Parser)]
#[command(name = "biopharm")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Role-scoped pharmacy dashboard")]
#[command(long_about = "BioPharm keeps a local role/username session and renders the\npharmacy dashboard with the sidebar entries that role may see.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Session file, overrides the configured one
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a session
    Login {
        /// Role: admin, staff, cashier or any other text
        #[arg(short, long, default_value = "")]
        role: String,
        /// Display name
        #[arg(short, long, default_value = "")]
        username: String,
        /// Password (only checked for presence)
        #[arg(short, long, default_value = "")]
        password: String,
    },

    /// End the session
    Logout,

    /// Show the stored session
    Status,

    /// Render the dashboard for the stored session
    Dashboard {
        /// Render with the sidebar collapsed
        #[arg(long)]
        collapsed: bool,
    },

    /// Print both chart configs as JSON
    Charts {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(path) = &cli.session_file {
        config.session.backend = SessionBackend::File;
        config.session.file = path.to_string_lossy().to_string();
    }

    init_logging(&config.logging)?;

    if config.session.backend == SessionBackend::Memory {
        tracing::warn!("Memory session backend: the session ends with this process");
    }

    let store = config.session.open_store();
    let controller = DashboardController::new(store, RecordingView::new())
        .with_sidebar(config.dashboard.sidebar());

    match cli.command {
        Commands::Login {
            role,
            username,
            password,
        } => login(controller, &role, &username, &password),

        Commands::Logout => {
            let mut controller = controller;
            controller.logout()?;
            println!("Logged out");
            Ok(())
        }

        Commands::Status => {
            match controller.state()? {
                SessionState::LoggedOut => println!("Not logged in"),
                state @ SessionState::LoggedIn { .. } => println!("{}", state),
            }
            println!("Session store: {}", describe_store(&config));
            Ok(())
        }

        Commands::Dashboard { collapsed } => {
            let mut controller = if collapsed {
                controller.with_sidebar(SidebarLayout::new(true))
            } else {
                controller
            };
            if !controller.state()?.is_logged_in() {
                tracing::info!("No session stored, showing the guest dashboard");
            }
            controller.open_dashboard();
            print!("{}", render_dashboard(controller.view()));
            Ok(())
        }

        Commands::Charts { pretty } => {
            let sample = SampleData::DEFAULT;
            let charts: BTreeMap<&str, ChartSpec> = [
                (ChartSlot::Sales.element_id(), sample.sales_chart()),
                (ChartSlot::Inventory.element_id(), sample.inventory_chart()),
            ]
            .into_iter()
            .collect();
            let text = if pretty {
                serde_json::to_string_pretty(&charts)?
            } else {
                serde_json::to_string(&charts)?
            };
            println!("{}", text);
            Ok(())
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
            Ok(())
        }
    }
}

fn login(
    mut controller: DashboardController<Box<dyn KeyValueStore>, RecordingView>,
    role: &str,
    username: &str,
    password: &str,
) -> anyhow::Result<()> {
    // Blank credentials come back as a validation error
    controller.login(role, username, password)?;

    println!("{}", controller.state()?);
    println!("Run `biopharm-cli dashboard` to open the dashboard.");
    Ok(())
}

fn describe_store(config: &Config) -> String {
    match config.session.backend {
        SessionBackend::File => format!("file {:?}", config.session.file_path()),
        SessionBackend::Memory => "memory".to_string(),
    }
}
