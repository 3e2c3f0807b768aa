use shared_types::{LoggingConfig, ShellConfig, ShellError};
use std::sync::OnceLock;

const BUNDLED_CONFIG: &str = include_str!("../../../config.toml");

#[cfg(debug_assertions)]
const DEV_ACCOUNTS: Option<&str> = Some(include_str!("../../../dev-accounts.toml"));
#[cfg(not(debug_assertions))]
const DEV_ACCOUNTS: Option<&str> = None;

static CONFIG: OnceLock<ShellConfig> = OnceLock::new();

/// Parse the bundled `config.toml` (plus `dev-accounts.toml` in debug builds)
/// and store it in the global `OnceLock`. Only the first call has effect.
///
/// On a parse error the shell runs on defaults; the error is returned so the
/// caller can log it once the subscriber is up.
pub fn load_shell_config() -> Result<(), ShellError> {
    let parsed = parse_bundled(BUNDLED_CONFIG, DEV_ACCOUNTS);
    let outcome = parsed.as_ref().map(|_| ()).map_err(Clone::clone);
    CONFIG.get_or_init(|| parsed.unwrap_or_default());
    outcome
}

fn parse_bundled(config: &str, dev_accounts: Option<&str>) -> Result<ShellConfig, ShellError> {
    let mut parsed = ShellConfig::from_toml(config)?;
    if let Some(accounts) = dev_accounts {
        parsed.add_dev_accounts(accounts)?;
    }
    Ok(parsed)
}

/// The loaded configuration, or defaults if `load_shell_config()` hasn't run.
pub fn shell_config() -> &'static ShellConfig {
    CONFIG.get_or_init(ShellConfig::default)
}

/// Subscriber level from `[logging]`; unknown names mean `info`.
pub fn log_level(logging: &LoggingConfig) -> tracing::Level {
    logging.level.trim().parse().unwrap_or(tracing::Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(level: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
        }
    }

    #[test]
    fn known_levels_parse() {
        assert_eq!(log_level(&logging("debug")), tracing::Level::DEBUG);
        assert_eq!(log_level(&logging("WARN")), tracing::Level::WARN);
        assert_eq!(log_level(&logging(" trace ")), tracing::Level::TRACE);
    }

    #[test]
    fn unknown_level_is_info() {
        assert_eq!(log_level(&logging("chatty")), tracing::Level::INFO);
        assert_eq!(log_level(&logging("")), tracing::Level::INFO);
    }

    #[test]
    fn bundled_config_loads() {
        assert!(load_shell_config().is_ok());
        assert_eq!(
            shell_config().dev_accounts.is_empty(),
            DEV_ACCOUNTS.is_none()
        );
    }

    #[test]
    fn release_builds_carry_no_accounts() {
        let config = parse_bundled(BUNDLED_CONFIG, None).unwrap();
        assert!(config.dev_accounts.is_empty());
    }

    #[test]
    fn dev_accounts_parse_into_the_config() {
        let accounts = r#"
            [[dev_accounts]]
            email = "a@example.com"
            password = "x"
        "#;
        let config = parse_bundled("[query]\nretry = 2", Some(accounts)).unwrap();
        assert_eq!(config.query.retry, 2);
        assert_eq!(config.dev_accounts.len(), 1);
    }
}
