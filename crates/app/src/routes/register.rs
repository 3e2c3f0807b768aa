use dioxus::prelude::*;
use shared_types::Registration;
use shared_ui::{use_toast, Button, Card, ToastOptions};

use crate::auth::{register, use_accounts, use_auth};
use crate::query::use_query_client;
use crate::routes::admin::USERS_QUERY;
use crate::routes::Route;

/// Self-service registration. New accounts land in the client section.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let mut accounts = use_accounts();
    let mut query = use_query_client();
    let toast = use_toast();
    let mut display_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<(Option<&'static str>, String)>::None);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let registration = Registration {
            email: email(),
            password: password(),
            display_name: display_name(),
        };
        let result = register(&mut auth, &mut *accounts.write(), &registration);
        match result {
            Ok(identity) => {
                query.invalidate(USERS_QUERY);
                toast.success(
                    format!("Account created for {}", identity.email),
                    ToastOptions::new(),
                );
            }
            Err(e) => error.set(Some((e.field(), e.friendly_message()))),
        }
    };

    let field_error = move |field: &str| {
        error()
            .filter(|(f, _)| *f == Some(field))
            .map(|(_, msg)| msg)
    };
    let form_error = error().filter(|(f, _)| f.is_none()).map(|(_, msg)| msg);

    rsx! {
        Card {
            class: "auth-card",
            title: "Create account",
            description: "Register to follow your portfolio",
            footer: rsx! {
                p { class: "auth-link",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            },

            if let Some(err) = form_error {
                div { class: "auth-error", role: "alert", "{err}" }
            }

            form { class: "auth-form", onsubmit: handle_register,
                label { class: "auth-field",
                    span { "Display name" }
                    input {
                        name: "display_name",
                        value: display_name(),
                        oninput: move |e: FormEvent| display_name.set(e.value()),
                    }
                    if let Some(err) = field_error("display name") {
                        span { class: "auth-field-error", "{err}" }
                    }
                }
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
                    if let Some(err) = field_error("email") {
                        span { class: "auth-field-error", "{err}" }
                    }
                }
                label { class: "auth-field",
                    span { "Password" }
                    input {
                        r#type: "password",
                        name: "password",
                        autocomplete: "new-password",
                        value: password(),
                        oninput: move |e: FormEvent| password.set(e.value()),
                    }
                    if let Some(err) = field_error("password") {
                        span { class: "auth-field-error", "{err}" }
                    }
                }
                Button { submit: true, class: "auth-submit", "Create account" }
            }
        }
    }
}
