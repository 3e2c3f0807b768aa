//! Pages of the `/client` section. Rendered only behind the client guard.

use dioxus::prelude::*;
use shared_ui::{Badge, Card};

use crate::auth::use_auth;

#[component]
pub fn ClientDashboard() -> Element {
    let auth = use_auth();
    let name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.display_name.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "page-grid",
            Card { title: "Hello, {name}", description: "Your portfolio at a glance",
                p { "Track positions, follow the market and read tailored insights." }
            }
        }
    }
}

#[component]
pub fn ClientPortfolio() -> Element {
    rsx! {
        Card { title: "Portfolio", description: "Your holdings",
            p { class: "page-empty", "No positions yet." }
        }
    }
}

#[component]
pub fn ClientAlerts() -> Element {
    rsx! {
        Card { title: "Alerts", description: "Notifications about your holdings",
            p { class: "page-empty", "You're all caught up." }
        }
    }
}

#[component]
pub fn ClientMarket() -> Element {
    rsx! {
        Card { title: "Market", description: "Indices and movers",
            p { class: "page-empty", "Market data is not connected." }
        }
    }
}

#[component]
pub fn ClientInsights() -> Element {
    rsx! {
        Card { title: "Insights", description: "Analysis picked for you",
            p { class: "page-empty", "No insights yet." }
        }
    }
}

#[component]
pub fn ClientProfile() -> Element {
    let auth = use_auth();
    let user = auth.current_user.read().clone();

    rsx! {
        Card { title: "Profile", description: "Your account details",
            if let Some(user) = user {
                dl { class: "page-details",
                    dt { "Name" }
                    dd { "{user.display_name}" }
                    dt { "Email" }
                    dd { "{user.email}" }
                    dt { "Role" }
                    dd { Badge { "{user.role.display_name()}" } }
                }
            }
        }
    }
}
