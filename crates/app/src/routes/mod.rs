pub mod admin;
pub mod client;
pub mod layout;
pub mod login;
pub mod not_found;
pub mod register;

use dioxus::prelude::*;
use shared_types::navigation::{self, Destination, GuardDecision, RootDecision};
use shared_types::route_table;
use shared_types::Role;
use shared_ui::{use_toast, Spinner, ToastOptions};

use crate::auth::use_auth;
use admin::{AdminAiContent, AdminAlerts, AdminDashboard, AdminSettings, AdminUsers};
use client::{
    ClientAlerts, ClientDashboard, ClientInsights, ClientMarket, ClientPortfolio, ClientProfile,
};
use layout::{AuthLayout, DashboardLayout};
use login::Login;
use not_found::NotFound;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    RootRedirect {},
    #[layout(AuthLayout)]
    #[route("/auth/login")]
    Login {},
    #[route("/auth/register")]
    Register {},
    #[end_layout]
    #[layout(AdminSection)]
    #[route("/admin")]
    AdminDashboard {},
    #[route("/admin/users")]
    AdminUsers {},
    #[route("/admin/alerts")]
    AdminAlerts {},
    #[route("/admin/ai-content")]
    AdminAiContent {},
    #[route("/admin/settings")]
    AdminSettings {},
    #[end_layout]
    #[layout(ClientSection)]
    #[route("/client")]
    ClientDashboard {},
    #[route("/client/portfolio")]
    ClientPortfolio {},
    #[route("/client/alerts")]
    ClientAlerts {},
    #[route("/client/market")]
    ClientMarket {},
    #[route("/client/insights")]
    ClientInsights {},
    #[route("/client/profile")]
    ClientProfile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Role a visitor must hold to see this route, if any.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::AdminDashboard {}
            | Route::AdminUsers {}
            | Route::AdminAlerts {}
            | Route::AdminAiContent {}
            | Route::AdminSettings {} => Some(Role::Admin),
            Route::ClientDashboard {}
            | Route::ClientPortfolio {}
            | Route::ClientAlerts {}
            | Route::ClientMarket {}
            | Route::ClientInsights {}
            | Route::ClientProfile {} => Some(Role::Client),
            Route::RootRedirect {} | Route::Login {} | Route::Register {} | Route::NotFound { .. } => {
                None
            }
        }
    }
}

/// Route a navigation decision lands on.
pub fn route_for(destination: Destination) -> Route {
    match destination {
        Destination::Login => Route::Login {},
        Destination::Home(Role::Admin) => Route::AdminDashboard {},
        Destination::Home(Role::Client) => Route::ClientDashboard {},
    }
}

/// `/` — sends the visitor to login or to their dashboard once auth resolves.
///
/// Renders the pending spinner in every case; the effect replaces the
/// history entry so back-navigation never returns here.
#[component]
fn RootRedirect() -> Element {
    let auth = use_auth();

    let decision = use_memo(move || {
        let status = auth.status();
        let decision = navigation::root_redirect(&status);
        tracing::debug!(role = ?status.role(), loading = status.is_loading(), ?decision, "Root redirect evaluated");
        decision
    });

    use_effect(move || {
        if let RootDecision::Navigate(destination) = decision() {
            tracing::debug!(to = destination.path(), "Root redirect");
            navigator().replace(route_for(destination));
        }
    });

    rsx! { Spinner {} }
}

/// Renders `children` only for a signed-in user holding `required`.
///
/// While auth is loading nothing is decided. Unauthenticated visitors go to
/// login; users of the other role go to their own dashboard.
#[component]
fn RoleGuard(required: Role, children: Element) -> Element {
    let auth = use_auth();
    let toast = use_toast();

    let decision = use_memo(move || navigation::guard(&auth.status(), required));

    use_effect(move || {
        if let GuardDecision::Redirect(destination) = decision() {
            tracing::debug!(%required, to = destination.path(), "Guard redirect");
            if let Destination::Home(_) = destination {
                toast.error(
                    format!("That page requires the {} role.", required.as_str()),
                    ToastOptions::new(),
                );
            }
            navigator().replace(route_for(destination));
        }
    });

    match decision() {
        GuardDecision::Render => rsx! { {children} },
        GuardDecision::Pending => rsx! { Spinner { label: "Checking access..." } },
        GuardDecision::Redirect(_) => rsx! { Spinner { label: "Redirecting..." } },
    }
}

/// Layout for `/admin/*`.
#[component]
fn AdminSection() -> Element {
    rsx! { GuardedSection { section: Role::Admin } }
}

/// Layout for `/client/*`.
#[component]
fn ClientSection() -> Element {
    rsx! { GuardedSection { section: Role::Client } }
}

/// Guard plus dashboard layout for one role's routes.
///
/// The current route must require `section` both on the enum and in the
/// route table; otherwise the page is treated as not found.
#[component]
fn GuardedSection(section: Role) -> Element {
    let route: Route = use_route();
    let path = route.to_string();
    let listed = route_table::resolve(&path).and_then(|entry| entry.required_role());

    if route.required_role() != Some(section) || listed != Some(section) {
        tracing::error!(%path, %section, "route is not declared for this section");
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        return rsx! { NotFound { segments } };
    }

    rsx! {
        RoleGuard { required: section,
            DashboardLayout { role: section }
        }
    }
}
