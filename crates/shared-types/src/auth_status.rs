use crate::identity::Identity;
use crate::role::Role;

/// Resolved view of the auth provider's `(user, is_loading)` pair.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthStatus {
    /// Session resolution in progress. No navigation decision may be made.
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(Identity),
}

impl AuthStatus {
    /// Derive the status from the provider's raw signals.
    ///
    /// `is_loading` wins over a present user: a provider that is still
    /// resolving never yields a decision, even if a stale user is visible.
    pub fn from_parts(user: Option<&Identity>, is_loading: bool) -> Self {
        match (user, is_loading) {
            (_, true) => AuthStatus::Loading,
            (None, false) => AuthStatus::Unauthenticated,
            (Some(identity), false) => AuthStatus::Authenticated(identity.clone()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthStatus::Loading)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthStatus::Authenticated(identity) => Some(identity),
            AuthStatus::Loading | AuthStatus::Unauthenticated => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.identity().map(|i| i.role)
    }
}
