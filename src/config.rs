//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dashboard::SidebarLayout;
use crate::session::{FileStore, KeyValueStore, MemoryStore};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the session record is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    /// JSON key/value file, shared across invocations
    #[default]
    File,
    /// Process-local map, forgotten on exit
    Memory,
}

impl std::str::FromStr for SessionBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(SessionBackend::File),
            "memory" => Ok(SessionBackend::Memory),
            other => Err(format!("unknown session backend: {}", other)),
        }
    }
}

/// Session store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub backend: SessionBackend,

    #[serde(default = "default_session_file")]
    pub file: String,
}

fn default_session_file() -> String {
    dirs::data_local_dir()
        .map(|p| {
            p.join("biopharm")
                .join("session.json")
                .to_string_lossy()
                .to_string()
        })
        .unwrap_or_else(|| "./biopharm_session.json".to_string())
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: SessionBackend::default(),
            file: default_session_file(),
        }
    }
}

impl SessionConfig {
    /// Session file path with a leading `~/` expanded
    pub fn file_path(&self) -> PathBuf {
        match self.file.strip_prefix("~/") {
            Some(rest) => dirs::home_dir()
                .map(|home| home.join(rest))
                .unwrap_or_else(|| PathBuf::from(&self.file)),
            None => PathBuf::from(&self.file),
        }
    }

    /// Open the configured backend
    pub fn open_store(&self) -> Box<dyn KeyValueStore> {
        match self.backend {
            SessionBackend::File => Box::new(FileStore::new(self.file_path())),
            SessionBackend::Memory => Box::new(MemoryStore::new()),
        }
    }
}

/// Dashboard presentation configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardConfig {
    /// Render the sidebar collapsed on first load
    #[serde(default)]
    pub start_collapsed: bool,
}

impl DashboardConfig {
    pub fn sidebar(&self) -> SidebarLayout {
        SidebarLayout::new(self.start_collapsed)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("biopharm").join("config.toml")),
            Some(PathBuf::from("/etc/biopharm/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Session overrides
        if let Some(backend) = var("BIOPHARM_SESSION_BACKEND") {
            match backend.parse() {
                Ok(b) => self.session.backend = b,
                Err(e) => tracing::warn!("Ignoring BIOPHARM_SESSION_BACKEND: {}", e),
            }
        }
        if let Some(file) = var("BIOPHARM_SESSION_FILE") {
            self.session.file = file;
        }

        // Dashboard overrides
        if let Some(collapsed) = var("BIOPHARM_START_COLLAPSED") {
            if let Ok(c) = collapsed.parse() {
                self.dashboard.start_collapsed = c;
            }
        }

        // Logging overrides
        if let Some(level) = var("BIOPHARM_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("BIOPHARM_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# BioPharm Dashboard Configuration
#
# Environment variables override these settings:
# - BIOPHARM_SESSION_BACKEND
# - BIOPHARM_SESSION_FILE
# - BIOPHARM_START_COLLAPSED
# - BIOPHARM_LOG_LEVEL
# - BIOPHARM_LOG_FORMAT

[session]
# Session backend: file (persists between runs) or memory
backend = "file"

# Key/value file holding bio_user_role and bio_user_name
file = "~/.local/share/biopharm/session.json"

[dashboard]
# Render the sidebar collapsed on first load
start_collapsed = false

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/biopharm/biopharm.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.session.backend, SessionBackend::File);
        assert!(config.session.file.ends_with("session.json"));
        assert!(!config.dashboard.start_collapsed);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.session.backend, SessionBackend::File);
        assert_eq!(config.session.file, "~/.local/share/biopharm/session.json");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            r#"
            [session]
            backend = "memory"

            [dashboard]
            start_collapsed = true
            "#,
        )
        .unwrap();
        assert_eq!(config.session.backend, SessionBackend::Memory);
        assert!(config.dashboard.sidebar().is_collapsed());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_bad_backend_rejected() {
        assert!(Config::parse("[session]\nbackend = \"redis\"").is_err());
        assert!("redis".parse::<SessionBackend>().is_err());
        assert_eq!("Memory".parse::<SessionBackend>(), Ok(SessionBackend::Memory));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("BIOPHARM_SESSION_BACKEND", "memory"),
            ("BIOPHARM_SESSION_FILE", "/tmp/s.json"),
            ("BIOPHARM_START_COLLAPSED", "true"),
            ("BIOPHARM_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.session.backend, SessionBackend::Memory);
        assert_eq!(config.session.file, "/tmp/s.json");
        assert!(config.dashboard.start_collapsed);
        assert!(config.logging.is_json());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_session_file_tilde_expansion() {
        let config = SessionConfig {
            backend: SessionBackend::File,
            file: "~/biopharm/session.json".to_string(),
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.file_path(), home.join("biopharm/session.json"));
        }

        let config = SessionConfig {
            backend: SessionBackend::File,
            file: "/var/lib/biopharm/session.json".to_string(),
        };
        assert_eq!(
            config.file_path(),
            PathBuf::from("/var/lib/biopharm/session.json")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_open_memory_store() {
        use crate::session::{SessionRecord, SessionStore};

        let config = SessionConfig {
            backend: SessionBackend::Memory,
            file: String::new(),
        };
        let mut store = config.open_store();
        store.set(&SessionRecord::new("admin", "root")).unwrap();
        assert!(store.get().unwrap().is_some());
    }
}
