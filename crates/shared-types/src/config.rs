use serde::{Deserialize, Serialize};

use crate::error::ShellError;

/// Logging section of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Query cache defaults applied by the root cache client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryConfig {
    /// Seconds a cached value counts as fresh.
    #[serde(default)]
    pub stale_time_secs: u64,
    /// Extra attempts a failed query gets.
    #[serde(default = "default_retry")]
    pub retry: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            stale_time_secs: 0,
            retry: default_retry(),
        }
    }
}

fn default_retry() -> u32 {
    3
}

/// Local account for running the shell without an identity service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DevAccount {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub role: String,
}

/// Top-level structure of `config.toml`.
///
/// Every section defaults so a missing or partial file still yields a
/// working shell.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShellConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub dev_accounts: Vec<DevAccount>,
}

impl ShellConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ShellError> {
        Ok(toml::from_str(contents)?)
    }

    /// Append the `[[dev_accounts]]` found in `contents`. Other sections in
    /// `contents` are ignored.
    pub fn add_dev_accounts(&mut self, contents: &str) -> Result<(), ShellError> {
        let extra = Self::from_toml(contents)?;
        self.dev_accounts.extend(extra.dev_accounts);
        Ok(())
    }
}
