//! Redirect decisions for the root path and the role-guarded sections.
//!
//! Everything here is a pure function of [`AuthStatus`]; the UI layer turns
//! the result into a history-replacing navigation.

use crate::auth_status::AuthStatus;
use crate::role::Role;

pub const LOGIN_PATH: &str = "/auth/login";

/// Where the shell may send a visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    Home(Role),
}

impl Destination {
    pub fn home_for(role: Role) -> Self {
        Destination::Home(role)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Destination::Login => LOGIN_PATH,
            Destination::Home(role) => role.home_path(),
        }
    }
}

/// Outcome of evaluating `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootDecision {
    /// Auth still resolving; show the pending state, navigate nowhere.
    Pending,
    /// Replace the current history entry with this destination.
    Navigate(Destination),
}

/// Outcome of evaluating a role-guarded section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Pending,
    Render,
    /// Replace the current history entry; the guarded content is never shown.
    Redirect(Destination),
}

/// Decide where `/` sends the visitor.
pub fn root_redirect(status: &AuthStatus) -> RootDecision {
    match status {
        AuthStatus::Loading => RootDecision::Pending,
        AuthStatus::Unauthenticated => RootDecision::Navigate(Destination::Login),
        AuthStatus::Authenticated(identity) => {
            RootDecision::Navigate(Destination::home_for(identity.role))
        }
    }
}

/// Decide whether a section requiring `required` may render.
///
/// A signed-in user on the wrong section is sent to their own dashboard root.
pub fn guard(status: &AuthStatus, required: Role) -> GuardDecision {
    match status {
        AuthStatus::Loading => GuardDecision::Pending,
        AuthStatus::Unauthenticated => GuardDecision::Redirect(Destination::Login),
        AuthStatus::Authenticated(identity) if identity.role == required => GuardDecision::Render,
        AuthStatus::Authenticated(identity) => {
            GuardDecision::Redirect(Destination::home_for(identity.role))
        }
    }
}

/// Decide what a public auth page (login/register) does for this status.
///
/// Signed-in visitors have nothing to do there and go to their dashboard.
pub fn public_only(status: &AuthStatus) -> GuardDecision {
    match status {
        AuthStatus::Loading | AuthStatus::Unauthenticated => GuardDecision::Render,
        AuthStatus::Authenticated(identity) => {
            GuardDecision::Redirect(Destination::home_for(identity.role))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Identity;
    use crate::role::ALL_ROLES;

    fn signed_in(role: Role) -> AuthStatus {
        AuthStatus::Authenticated(Identity::new("u@example.com", "User", role))
    }

    fn signed_in_with_raw_role(raw: &str) -> AuthStatus {
        let json = format!(
            r#"{{"id":"6f1c2b9e-3a7d-4c1e-9b2f-0a1b2c3d4e5f","email":"u@example.com","display_name":"U","role":"{raw}"}}"#
        );
        AuthStatus::Authenticated(serde_json::from_str(&json).unwrap())
    }

    #[test]
    fn root_sends_admin_to_admin_section() {
        assert_eq!(
            root_redirect(&signed_in(Role::Admin)),
            RootDecision::Navigate(Destination::Home(Role::Admin))
        );
        assert_eq!(Destination::Home(Role::Admin).path(), "/admin");
    }

    #[test]
    fn root_sends_non_admin_to_client_section() {
        for raw in ["client", "viewer", "", "Client", "ADMIN", " admin"] {
            let decision = root_redirect(&signed_in_with_raw_role(raw));
            assert_eq!(
                decision,
                RootDecision::Navigate(Destination::Home(Role::Client)),
                "role {raw:?}"
            );
        }
    }

    #[test]
    fn root_waits_while_loading() {
        assert_eq!(root_redirect(&AuthStatus::Loading), RootDecision::Pending);
    }

    #[test]
    fn unauthenticated_goes_to_login_everywhere() {
        assert_eq!(
            root_redirect(&AuthStatus::Unauthenticated),
            RootDecision::Navigate(Destination::Login)
        );
        for role in ALL_ROLES {
            assert_eq!(
                guard(&AuthStatus::Unauthenticated, *role),
                GuardDecision::Redirect(Destination::Login)
            );
        }
        assert_eq!(Destination::Login.path(), LOGIN_PATH);
    }

    #[test]
    fn guard_waits_while_loading() {
        for role in ALL_ROLES {
            assert_eq!(guard(&AuthStatus::Loading, *role), GuardDecision::Pending);
        }
    }

    #[test]
    fn guard_renders_only_for_matching_role() {
        for user_role in ALL_ROLES {
            for required in ALL_ROLES {
                let decision = guard(&signed_in(*user_role), *required);
                if user_role == required {
                    assert_eq!(decision, GuardDecision::Render);
                } else {
                    assert_eq!(
                        decision,
                        GuardDecision::Redirect(Destination::Home(*user_role))
                    );
                }
            }
        }
    }

    #[test]
    fn client_on_admin_section_goes_home() {
        assert_eq!(
            guard(&signed_in(Role::Client), Role::Admin),
            GuardDecision::Redirect(Destination::Home(Role::Client))
        );
    }

    #[test]
    fn public_pages_bounce_signed_in_users() {
        assert_eq!(public_only(&AuthStatus::Unauthenticated), GuardDecision::Render);
        assert_eq!(public_only(&AuthStatus::Loading), GuardDecision::Render);
        assert_eq!(
            public_only(&signed_in(Role::Admin)),
            GuardDecision::Redirect(Destination::Home(Role::Admin))
        );
    }
}
