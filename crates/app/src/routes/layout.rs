use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBriefcase, LdLayoutDashboard, LdLightbulb, LdLogOut, LdSettings, LdSparkles,
    LdTrendingUp, LdUser, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::navigation::{self, GuardDecision};
use shared_types::route_table::{self, Section};
use shared_types::Role;
use shared_ui::{use_toast, Badge, BadgeVariant, Button, ButtonVariant, Tooltip, ToastOptions};

use crate::auth::{sign_out, use_auth};
use crate::query::use_query_client;
use crate::routes::{route_for, Route};

/// Public layout for `/auth/*`. Signed-in visitors are sent to their dashboard.
#[component]
pub fn AuthLayout() -> Element {
    let auth = use_auth();
    let decision = use_memo(move || navigation::public_only(&auth.status()));

    use_effect(move || {
        if let GuardDecision::Redirect(destination) = decision() {
            tracing::debug!(to = destination.path(), "Already signed in");
            navigator().replace(route_for(destination));
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/auth.css") }
        main { class: "auth-page",
            div { class: "auth-brand", "Pulse Dashboard" }
            Outlet::<Route> {}
        }
    }
}

fn section_of(role: Role) -> Section {
    match role {
        Role::Admin => Section::Admin,
        Role::Client => Section::Client,
    }
}

fn nav_icon(route: &Route) -> Element {
    match route {
        Route::AdminDashboard {} | Route::ClientDashboard {} => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
        },
        Route::AdminUsers {} => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        Route::AdminAlerts {} | Route::ClientAlerts {} => rsx! {
            Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
        },
        Route::AdminAiContent {} => rsx! {
            Icon::<LdSparkles> { icon: LdSparkles, width: 18, height: 18 }
        },
        Route::AdminSettings {} => rsx! {
            Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
        },
        Route::ClientPortfolio {} => rsx! {
            Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
        },
        Route::ClientMarket {} => rsx! {
            Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 }
        },
        Route::ClientInsights {} => rsx! {
            Icon::<LdLightbulb> { icon: LdLightbulb, width: 18, height: 18 }
        },
        Route::ClientProfile {} => rsx! { Icon::<LdUser> { icon: LdUser, width: 18, height: 18 } },
        Route::RootRedirect {} | Route::Login {} | Route::Register {} | Route::NotFound { .. } => {
            rsx! {}
        }
    }
}

/// Sidebar + header shell for one role's section.
///
/// Navigation items come from the route table so the menu always matches
/// what the router serves.
#[component]
pub fn DashboardLayout(role: Role) -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let mut query = use_query_client();
    let toast = use_toast();

    let items: Vec<(Route, &'static str, &'static str)> =
        route_table::section_entries(section_of(role))
            .filter_map(|entry| entry.path.parse::<Route>().ok().map(|r| (r, entry.title)))
            .map(|(target, title)| {
                let class = if target == route {
                    "dashboard-nav-item active"
                } else {
                    "dashboard-nav-item"
                };
                (target, title, class)
            })
            .collect();
    let page_title = route_table::title_for(&route.to_string());

    let user = auth.current_user.read().clone();
    let (display_name, initials) = user
        .as_ref()
        .map(|u| (u.display_name.clone(), u.initials()))
        .unwrap_or_default();

    let handle_sign_out = move |_: MouseEvent| {
        sign_out(&mut auth, &mut query);
        toast.success("Signed out".to_string(), ToastOptions::new());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/layout.css") }

        div { class: "dashboard", "data-section": role.as_str(),
            aside { class: "dashboard-sidebar",
                div { class: "dashboard-brand", "Pulse" }
                nav { class: "dashboard-nav",
                    for (target, title, class) in items {
                        Tooltip { key: "{target}", label: "{title}",
                            Link {
                                to: target.clone(),
                                class: class,
                                {nav_icon(&target)}
                                span { class: "dashboard-nav-label", "{title}" }
                            }
                        }
                    }
                }
            }

            div { class: "dashboard-main",
                header { class: "dashboard-header",
                    h1 { class: "dashboard-title", "{page_title}" }
                    div { class: "dashboard-user",
                        span { class: "dashboard-avatar", "{initials}" }
                        span { class: "dashboard-user-name", "{display_name}" }
                        Badge { variant: BadgeVariant::Outline, "{role.display_name()}" }
                        Button { variant: ButtonVariant::Ghost, onclick: handle_sign_out,
                            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                            "Sign out"
                        }
                    }
                }
                main { class: "dashboard-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_follow_roles() {
        assert_eq!(section_of(Role::Admin), Section::Admin);
        assert_eq!(section_of(Role::Client), Section::Client);
    }

    #[test]
    fn every_section_entry_parses_to_a_route() {
        for role in shared_types::ALL_ROLES {
            let entries = route_table::section_entries(section_of(*role)).count();
            let routes = route_table::section_entries(section_of(*role))
                .filter(|e| e.path.parse::<Route>().is_ok_and(|r| !matches!(r, Route::NotFound { .. })))
                .count();
            assert_eq!(entries, routes);
        }
    }
}
