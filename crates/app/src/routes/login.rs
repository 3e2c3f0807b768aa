use dioxus::prelude::*;
use shared_types::Credentials;
use shared_ui::{use_toast, Button, Card, ToastOptions};

use crate::auth::{sign_in, use_accounts, use_auth};
use crate::routes::Route;

/// Sign-in form.
///
/// A successful sign-in flips auth state; [`AuthLayout`](super::layout::AuthLayout)
/// then sends the user to their dashboard.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let accounts = use_accounts();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error_msg.set(None);

        let credentials = Credentials {
            email: email(),
            password: password(),
        };
        match sign_in(&mut auth, &*accounts.read(), &credentials) {
            Ok(identity) => {
                toast.success(
                    format!("Welcome back, {}", identity.display_name),
                    ToastOptions::new(),
                );
            }
            Err(e) => {
                password.set(String::new());
                error_msg.set(Some(e.friendly_message()));
            }
        }
    };

    rsx! {
        Card {
            class: "auth-card",
            title: "Sign in",
            description: "Use your account to open your dashboard",
            footer: rsx! {
                p { class: "auth-link",
                    "No account yet? "
                    Link { to: Route::Register {}, "Create one" }
                }
            },

            if let Some(err) = error_msg() {
                div { class: "auth-error", role: "alert", "{err}" }
            }

            form { class: "auth-form", onsubmit: handle_login,
                label { class: "auth-field",
                    span { "Email" }
                    input {
                        r#type: "email",
                        name: "email",
                        autocomplete: "username",
                        placeholder: "you@example.com",
                        value: email(),
                        oninput: move |e: FormEvent| email.set(e.value()),
                    }
                }
                label { class: "auth-field",
                    span { "Password" }
                    input {
                        r#type: "password",
                        name: "password",
                        autocomplete: "current-password",
                        value: password(),
                        oninput: move |e: FormEvent| password.set(e.value()),
                    }
                }
                Button { submit: true, class: "auth-submit", "Sign in" }
            }
        }
    }
}
