use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard role controlling which section of the app a user may enter.
///
/// - `Admin` — the `/admin` section (users, alerts, AI content, settings).
/// - `Client` — the `/client` section (portfolio, alerts, market, insights, profile).
///
/// The set is closed. Role strings coming from outside (wire payloads, config)
/// that are not `"admin"` resolve to `Client`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Role {
    Admin,
    #[default]
    Client,
}

/// All roles in display order.
pub const ALL_ROLES: &[Role] = &[Role::Admin, Role::Client];

impl Role {
    /// Parse a role string. Anything other than exactly `admin` is a client.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            _ => Role::Client,
        }
    }

    /// Lowercase string for storage and wire payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Client => "client",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Client => "Client",
        }
    }

    /// Root path of the dashboard section owned by this role.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Client => "/client",
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::from_str_or_default(&s)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
