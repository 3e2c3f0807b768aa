use dioxus::prelude::*;

/// Centered spinner shown while a decision is pending. Styled by the app's
/// base stylesheet.
#[component]
pub fn Spinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div { class: "shell-spinner-screen", role: "status", aria_live: "polite",
            div { class: "shell-spinner" }
            span { class: "shell-spinner-label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_status_with_default_label() {
        let html = dioxus_ssr::render_element(rsx! { Spinner {} });
        assert!(html.contains(r#"role="status""#));
        assert!(html.contains("Loading..."));
    }

    #[test]
    fn renders_custom_label() {
        let html = dioxus_ssr::render_element(rsx! { Spinner { label: "Checking access" } });
        assert!(html.contains("Checking access"));
        assert!(!html.contains("Loading..."));
    }
}
