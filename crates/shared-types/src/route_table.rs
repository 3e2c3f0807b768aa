//! Static table of every path the shell serves.
//!
//! The `Routable` enum in the app is the router; this table is the same
//! surface as data, so access rules and titles can be checked without a
//! renderer. Tests in the app keep the two in lockstep.

use crate::role::Role;

/// Top-level subtree a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Root,
    Auth,
    Admin,
    Client,
}

/// Who may see a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Role(Role),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub section: Section,
    pub access: Access,
    pub title: &'static str,
}

const fn entry(path: &'static str, section: Section, title: &'static str) -> RouteEntry {
    let access = match section {
        Section::Root | Section::Auth => Access::Public,
        Section::Admin => Access::Role(Role::Admin),
        Section::Client => Access::Role(Role::Client),
    };
    RouteEntry {
        path,
        section,
        access,
        title,
    }
}

pub static ROUTES: &[RouteEntry] = &[
    entry("/", Section::Root, "Home"),
    entry("/auth/login", Section::Auth, "Sign in"),
    entry("/auth/register", Section::Auth, "Create account"),
    entry("/admin", Section::Admin, "Dashboard"),
    entry("/admin/users", Section::Admin, "Users"),
    entry("/admin/alerts", Section::Admin, "Alerts"),
    entry("/admin/ai-content", Section::Admin, "AI Content"),
    entry("/admin/settings", Section::Admin, "Settings"),
    entry("/client", Section::Client, "Dashboard"),
    entry("/client/portfolio", Section::Client, "Portfolio"),
    entry("/client/alerts", Section::Client, "Alerts"),
    entry("/client/market", Section::Client, "Market"),
    entry("/client/insights", Section::Client, "Insights"),
    entry("/client/profile", Section::Client, "Profile"),
];

/// Strip query, fragment and a trailing slash (except on `/` itself).
pub fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}

/// Find the entry serving `path`. `None` means the not-found page.
pub fn resolve(path: &str) -> Option<&'static RouteEntry> {
    let path = normalize(path);
    ROUTES.iter().find(|r| r.path == path)
}

/// Entries of one section in declaration order, for navigation menus.
pub fn section_entries(section: Section) -> impl Iterator<Item = &'static RouteEntry> {
    ROUTES.iter().filter(move |r| r.section == section)
}

/// Header title for a path; unknown paths get "Not found".
pub fn title_for(path: &str) -> &'static str {
    resolve(path).map(|r| r.title).unwrap_or("Not found")
}

impl RouteEntry {
    /// Role a visitor must hold, if any.
    pub fn required_role(&self) -> Option<Role> {
        match self.access {
            Access::Public => None,
            Access::Role(role) => Some(role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth_status::AuthStatus;
    use crate::identity::Identity;
    use crate::navigation::{guard, Destination, GuardDecision};
    use crate::role::ALL_ROLES;

    #[test]
    fn every_declared_path_resolves_to_itself() {
        for route in ROUTES {
            assert_eq!(resolve(route.path), Some(route));
        }
    }

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<_> = ROUTES.iter().map(|r| r.path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), ROUTES.len());
    }

    #[test]
    fn normalization() {
        assert_eq!(normalize("/admin/"), "/admin");
        assert_eq!(normalize("/admin/users?page=2"), "/admin/users");
        assert_eq!(normalize("/client#top"), "/client");
        assert_eq!(normalize("/"), "/");
        assert_eq!(resolve("/client/portfolio/").map(|r| r.title), Some("Portfolio"));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        for path in [
            "/nope",
            "/admin/unknown",
            "/client/users",
            "/admin/users/42",
            "/auth",
            "/Admin",
        ] {
            assert_eq!(resolve(path), None, "{path}");
            assert_eq!(title_for(path), "Not found");
        }
    }

    fn required_role(path: &str) -> Option<Role> {
        resolve(path)?.required_role()
    }

    #[test]
    fn sections_carry_their_role() {
        assert_eq!(required_role("/admin/ai-content"), Some(Role::Admin));
        assert_eq!(required_role("/client/market"), Some(Role::Client));
        assert_eq!(required_role("/auth/login"), None);
        assert_eq!(required_role("/"), None);
    }

    #[test]
    fn section_entries_are_in_table_order() {
        let admin: Vec<_> = section_entries(Section::Admin).map(|r| r.path).collect();
        assert_eq!(
            admin,
            [
                "/admin",
                "/admin/users",
                "/admin/alerts",
                "/admin/ai-content",
                "/admin/settings"
            ]
        );
        assert_eq!(section_entries(Section::Client).count(), 6);
    }

    #[test]
    fn protected_paths_never_render_for_the_other_role() {
        for route in ROUTES {
            let Access::Role(required) = route.access else {
                continue;
            };
            for role in ALL_ROLES.iter().filter(|r| **r != required) {
                let status =
                    AuthStatus::Authenticated(Identity::new("u@example.com", "U", *role));
                assert_ne!(guard(&status, required), GuardDecision::Render, "{}", route.path);
            }
        }
    }

    #[test]
    fn unauthenticated_portfolio_visit_goes_to_login() {
        let role = required_role("/client/portfolio").unwrap();
        assert_eq!(
            guard(&AuthStatus::Unauthenticated, role),
            GuardDecision::Redirect(Destination::Login)
        );
    }

    #[test]
    fn client_visiting_admin_users_is_sent_home() {
        let role = required_role("/admin/users").unwrap();
        let status =
            AuthStatus::Authenticated(Identity::new("c@example.com", "C", Role::Client));
        assert_eq!(
            guard(&status, role),
            GuardDecision::Redirect(Destination::Home(Role::Client))
        );
    }
}
