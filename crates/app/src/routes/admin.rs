//! Pages of the `/admin` section. Rendered only behind the admin guard.

use dioxus::prelude::*;
use shared_types::Identity;
use shared_ui::{use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, ToastOptions};

use crate::auth::{use_accounts, use_auth};
use crate::query::use_query_client;

/// Query key for the account list; invalidated when someone registers.
pub const USERS_QUERY: &str = "admin/users";

#[component]
pub fn AdminDashboard() -> Element {
    let auth = use_auth();
    let name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.display_name.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "page-grid",
            Card { title: "Welcome, {name}", description: "Platform overview",
                p { "Use the sidebar to manage users, alerts, AI content and settings." }
            }
        }
    }
}

#[component]
pub fn AdminUsers() -> Element {
    let accounts = use_accounts();
    let mut query = use_query_client();

    let users = use_memo(move || {
        query.fetch(USERS_QUERY, || {
            Ok(accounts.read().identities().cloned().collect::<Vec<Identity>>())
        })
    });

    rsx! {
        Card { title: "Users", description: "Accounts known to the identity provider",
            {match users() {
                Ok(users) if users.is_empty() => rsx! { p { class: "page-empty", "No accounts yet." } },
                Ok(users) => rsx! {
                    table { class: "page-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Role" }
                            }
                        }
                        tbody {
                            for user in users {
                                tr { key: "{user.id}",
                                    td { "{user.display_name}" }
                                    td { "{user.email}" }
                                    td {
                                        Badge { variant: BadgeVariant::Outline, "{user.role}" }
                                    }
                                }
                            }
                        }
                    }
                },
                Err(e) => rsx! { p { class: "page-error", "{e.friendly_message()}" } },
            }}
        }
    }
}

#[component]
pub fn AdminAlerts() -> Element {
    rsx! {
        Card { title: "Alerts", description: "Market alerts published to clients",
            p { class: "page-empty", "No alerts have been published." }
        }
    }
}

#[component]
pub fn AdminAiContent() -> Element {
    rsx! {
        Card { title: "AI Content", description: "Generated insights awaiting review",
            p { class: "page-empty", "Nothing is waiting for review." }
        }
    }
}

/// Settings page; shows the query cache configuration and the number of local
/// accounts, and lets an admin drop everything cached in this session.
#[component]
pub fn AdminSettings() -> Element {
    let accounts = use_accounts();
    let mut query = use_query_client();
    let toast = use_toast();

    let stale = query.stale_time_secs();
    let retry = query.retry();
    let cached = query.len();
    let known_accounts = accounts.read().len();

    rsx! {
        Card {
            title: "Settings",
            description: "Client-side data cache",
            footer: rsx! {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_: MouseEvent| {
                        query.clear();
                        toast.success("Cache cleared".to_string(), ToastOptions::new());
                    },
                    "Clear cache"
                }
            },
            dl { class: "page-details",
                dt { "Stale time" }
                dd { "{stale} s" }
                dt { "Retries" }
                dd { "{retry}" }
                dt { "Cached queries" }
                dd { "{cached}" }
                dt { "Local accounts" }
                dd { "{known_accounts}" }
            }
        }
    }
}
