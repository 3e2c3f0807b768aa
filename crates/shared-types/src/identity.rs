use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::DevAccount;
use crate::error::ShellError;
use crate::role::Role;

/// Authenticated user profile (safe to hold on the client).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub role: Role,
}

impl Identity {
    pub fn new(email: impl Into<String>, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            display_name: display_name.into(),
            role,
        }
    }

    /// Initials for the avatar badge, at most two characters.
    pub fn initials(&self) -> String {
        let initials: String = self
            .display_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            self.email
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default()
        } else {
            initials
        }
    }
}

/// Sign-in form payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Reject empty fields before they reach a provider.
    pub fn validate(&self) -> Result<(), ShellError> {
        if self.email.trim().is_empty() {
            return Err(ShellError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(ShellError::MissingField("password"));
        }
        Ok(())
    }
}

/// Registration form payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

impl Registration {
    pub fn validate(&self) -> Result<(), ShellError> {
        if self.display_name.trim().is_empty() {
            return Err(ShellError::MissingField("display name"));
        }
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
        .validate()
    }
}

/// Boundary to whatever actually verifies users.
///
/// The shell only needs an `Identity` back; tokens, sessions and transport
/// belong to the implementation.
pub trait IdentityProvider {
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, ShellError>;

    /// Self-service registration. New accounts are always clients.
    fn register(&mut self, registration: &Registration) -> Result<Identity, ShellError>;
}

#[derive(Debug, Clone, PartialEq)]
struct Account {
    identity: Identity,
    password: String,
}

/// In-memory accounts seeded from `[[dev_accounts]]` in `dev-accounts.toml`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DevAccounts {
    accounts: Vec<Account>,
}

impl DevAccounts {
    pub fn from_config(entries: &[DevAccount]) -> Self {
        let accounts = entries
            .iter()
            .map(|entry| Account {
                identity: Identity::new(
                    entry.email.trim().to_lowercase(),
                    entry.display_name.clone(),
                    Role::from_str_or_default(&entry.role),
                ),
                password: entry.password.clone(),
            })
            .collect();
        Self { accounts }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn identities(&self) -> impl Iterator<Item = &Identity> {
        self.accounts.iter().map(|a| &a.identity)
    }

    fn find(&self, email: &str) -> Option<&Account> {
        let email = email.trim().to_lowercase();
        self.accounts.iter().find(|a| a.identity.email == email)
    }
}

impl IdentityProvider for DevAccounts {
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, ShellError> {
        credentials.validate()?;
        match self.find(&credentials.email) {
            Some(account) if account.password == credentials.password => {
                Ok(account.identity.clone())
            }
            _ => Err(ShellError::InvalidCredentials),
        }
    }

    fn register(&mut self, registration: &Registration) -> Result<Identity, ShellError> {
        registration.validate()?;
        let email = registration.email.trim().to_lowercase();
        if self.find(&email).is_some() {
            return Err(ShellError::AccountExists(email));
        }
        let identity = Identity::new(email, registration.display_name.trim(), Role::Client);
        self.accounts.push(Account {
            identity: identity.clone(),
            password: registration.password.clone(),
        });
        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seeded() -> DevAccounts {
        DevAccounts::from_config(&[
            DevAccount {
                email: "Admin@Example.com".into(),
                password: "admin-pass".into(),
                display_name: "Ada Admin".into(),
                role: "admin".into(),
            },
            DevAccount {
                email: "client@example.com".into(),
                password: "client-pass".into(),
                display_name: "Cleo Client".into(),
                role: "client".into(),
            },
        ])
    }

    fn creds(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn identity_deserializes_from_json() {
        let json = r#"{
            "id": "6f1c2b9e-3a7d-4c1e-9b2f-0a1b2c3d4e5f",
            "email": "demo@example.com",
            "display_name": "Demo User",
            "role": "admin"
        }"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(identity.display_name, "Demo User");
    }

    #[test]
    fn identity_without_role_is_client() {
        let json = r#"{
            "id": "6f1c2b9e-3a7d-4c1e-9b2f-0a1b2c3d4e5f",
            "email": "demo@example.com",
            "display_name": "Demo User"
        }"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.role, Role::Client);
    }

    #[test]
    fn initials() {
        assert_eq!(Identity::new("a@b.c", "ada lovelace", Role::Admin).initials(), "AL");
        assert_eq!(Identity::new("a@b.c", "Cher", Role::Client).initials(), "C");
        assert_eq!(Identity::new("zed@b.c", "", Role::Client).initials(), "Z");
    }

    #[test]
    fn credentials_require_both_fields() {
        assert_eq!(
            creds("", "x").validate(),
            Err(ShellError::MissingField("email"))
        );
        assert_eq!(
            creds("a@b.c", "").validate(),
            Err(ShellError::MissingField("password"))
        );
        assert!(creds("a@b.c", "x").validate().is_ok());
    }

    #[test]
    fn authenticate_matches_email_case_insensitively() {
        let accounts = seeded();
        let identity = accounts
            .authenticate(&creds("ADMIN@example.com", "admin-pass"))
            .unwrap();
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(identity.email, "admin@example.com");
    }

    #[test]
    fn authenticate_rejects_wrong_password() {
        let accounts = seeded();
        assert_eq!(
            accounts.authenticate(&creds("client@example.com", "nope")),
            Err(ShellError::InvalidCredentials)
        );
    }

    #[test]
    fn authenticate_rejects_unknown_email() {
        let accounts = seeded();
        assert_eq!(
            accounts.authenticate(&creds("ghost@example.com", "client-pass")),
            Err(ShellError::InvalidCredentials)
        );
    }

    #[test]
    fn register_creates_client_and_allows_sign_in() {
        let mut accounts = seeded();
        let identity = accounts
            .register(&Registration {
                email: "new@example.com".into(),
                password: "secret".into(),
                display_name: "  Nia New ".into(),
            })
            .unwrap();
        assert_eq!(identity.role, Role::Client);
        assert_eq!(identity.display_name, "Nia New");
        assert_eq!(accounts.len(), 3);
        assert!(accounts.identities().any(|i| i.email == "new@example.com"));

        let signed_in = accounts
            .authenticate(&creds("new@example.com", "secret"))
            .unwrap();
        assert_eq!(signed_in, identity);
    }

    #[test]
    fn register_rejects_duplicate_email() {
        let mut accounts = seeded();
        let result = accounts.register(&Registration {
            email: "client@example.com".into(),
            password: "secret".into(),
            display_name: "Dup".into(),
        });
        assert_eq!(
            result,
            Err(ShellError::AccountExists("client@example.com".into()))
        );
    }

    #[test]
    fn register_requires_display_name() {
        let mut accounts = DevAccounts::default();
        let result = accounts.register(&Registration {
            email: "x@example.com".into(),
            password: "secret".into(),
            display_name: " ".into(),
        });
        assert_eq!(result, Err(ShellError::MissingField("display name")));
        assert!(accounts.is_empty());
    }
}
