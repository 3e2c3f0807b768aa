use dioxus::prelude::*;
use shared_ui::Card;

use crate::routes::Route;

/// 404 page for any path outside the route table.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/auth.css") }
        main { class: "auth-page",
            Card { class: "not-found-card", title: "404 · Page not found",
                p { class: "not-found-message",
                    "The page "
                    code { "{path}" }
                    " does not exist."
                }
                Link { to: Route::RootRedirect {}, class: "not-found-link", "Back to dashboard" }
            }
        }
    }
}
