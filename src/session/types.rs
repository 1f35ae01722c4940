//! Core session types
//!
//! - `Role`: the role a user picked on the login form
//! - `SessionRecord`: the two persisted session fields
//! - `SessionState`: logged in or logged out

use serde::{Deserialize, Serialize};

/// Storage key holding the raw role string
pub const ROLE_KEY: &str = "bio_user_role";

/// Storage key holding the display name
pub const USERNAME_KEY: &str = "bio_user_name";

/// Name shown on the dashboard when no name is stored
pub const DEFAULT_DISPLAY_USERNAME: &str = "User";

/// Role selected at login
///
/// Matching is exact and case-sensitive. The empty string is `Guest`;
/// any other unrecognized text is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Admin,
    Staff,
    Cashier,
    #[default]
    Guest,
    /// Free text that names no known role
    Other(String),
}

impl Role {
    /// Derive a role from raw form or storage text
    pub fn parse(raw: &str) -> Self {
        match raw {
            "admin" => Role::Admin,
            "staff" => Role::Staff,
            "cashier" => Role::Cashier,
            "guest" | "" => Role::Guest,
            other => Role::Other(other.to_string()),
        }
    }

    /// Text written to storage and shown in labels
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Cashier => "cashier",
            Role::Guest => "guest",
            Role::Other(raw) => raw,
        }
    }

    /// Roles with a dedicated entry on the login form
    pub fn known() -> [Role; 3] {
        [Role::Admin, Role::Staff, Role::Cashier]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        Role::parse(raw)
    }
}

impl Serialize for Role {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::parse(&raw))
    }
}

/// The persisted session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub role: Role,
    pub username: String,
}

impl SessionRecord {
    pub fn new(role: impl Into<Role>, username: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            username: username.into(),
        }
    }

    /// Record substituted when nothing is stored
    pub fn anonymous() -> Self {
        Self {
            role: Role::Guest,
            username: DEFAULT_DISPLAY_USERNAME.to_string(),
        }
    }

    /// Welcome banner text, e.g. `"alice (staff)"`
    pub fn welcome_text(&self) -> String {
        format!("{} ({})", self.username, self.role)
    }
}

/// Whether anyone is logged in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn { role: Role, username: String },
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::LoggedIn { .. })
    }
}

impl From<Option<SessionRecord>> for SessionState {
    fn from(record: Option<SessionRecord>) -> Self {
        match record {
            Some(SessionRecord { role, username }) => SessionState::LoggedIn { role, username },
            None => SessionState::LoggedOut,
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::LoggedOut => write!(f, "logged out"),
            SessionState::LoggedIn { role, username } => {
                write!(f, "logged in as {} ({})", username, role)
            }
        }
    }
}
