use thiserror::Error;

/// Errors raised by the shell's ambient plumbing.
///
/// Navigation itself never fails: unknown roles fall back to the client
/// section and unknown URLs render the not-found page.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShellError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("an account already exists for {0}")]
    AccountExists(String),
}

impl ShellError {
    /// Message suitable for a toast. Configuration details stay in the logs.
    pub fn friendly_message(&self) -> String {
        match self {
            ShellError::Config(_) => "Something went wrong. Please try again.".to_string(),
            other => capitalize(&other.to_string()),
        }
    }

    /// Form field the error belongs to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ShellError::MissingField(field) => Some(field),
            ShellError::AccountExists(_) => Some("email"),
            ShellError::Config(_) | ShellError::InvalidCredentials => None,
        }
    }
}

impl From<toml::de::Error> for ShellError {
    fn from(e: toml::de::Error) -> Self {
        ShellError::Config(e.message().to_string())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
