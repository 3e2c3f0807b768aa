use dioxus::prelude::*;

/// Panel with an optional heading block and footer.
#[component]
pub fn Card(
    #[props(default)] title: Option<String>,
    #[props(default)] description: Option<String>,
    #[props(default)] footer: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "shell-card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_header = title.is_some() || description.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            if has_header {
                header { class: "shell-card-header",
                    if let Some(title) = title {
                        h3 { class: "shell-card-title", "{title}" }
                    }
                    if let Some(description) = description {
                        p { class: "shell-card-description", "{description}" }
                    }
                }
            }
            div { class: "shell-card-content", {children} }
            if let Some(footer) = footer {
                footer { class: "shell-card-footer", {footer} }
            }
        }
    }
}
