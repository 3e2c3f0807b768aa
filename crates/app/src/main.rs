use dioxus::prelude::*;
use shared_types::DevAccounts;
use shared_ui::{ContentSide, ToastProvider, TooltipProvider};

mod auth;
mod config;
mod query;
mod routes;
use auth::AuthProvider;
use query::QueryClient;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    let loaded = config::load_shell_config();
    let level = config::log_level(&config::shell_config().logging);
    let _ = dioxus::logger::init(level);
    if let Err(e) = loaded {
        tracing::warn!(error = %e, "config.toml rejected, running on defaults");
    }

    dioxus::launch(App);
}

/// App shell: providers around the router.
///
/// The query client and identity provider are created once here and live
/// as long as the app. Auth state is owned by `AuthProvider`.
#[component]
fn App() -> Element {
    let config = config::shell_config();

    use_context_provider(|| QueryClient::new(&config.query));
    use_context_provider(|| Signal::new(DevAccounts::from_config(&config.dev_accounts)));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        TooltipProvider { side: ContentSide::Right,
            AuthProvider {
                ToastProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}
