use dioxus::prelude::*;
use dioxus_primitives::tooltip as prim;

pub use dioxus_primitives::ContentSide;

/// Tooltip defaults shared by every tooltip below a [`TooltipProvider`].
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipDefaults {
    pub side: ContentSide,
}

impl Default for TooltipDefaults {
    fn default() -> Self {
        Self {
            side: ContentSide::Top,
        }
    }
}

#[component]
pub fn TooltipProvider(
    #[props(default = ContentSide::Top)] side: ContentSide,
    children: Element,
) -> Element {
    use_context_provider(|| TooltipDefaults { side });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        {children}
    }
}

/// Wrap `children` with a text tooltip placed per the nearest provider.
#[component]
pub fn Tooltip(label: String, children: Element) -> Element {
    let defaults = try_use_context::<TooltipDefaults>().unwrap_or_default();

    rsx! {
        prim::Tooltip { class: "shell-tooltip",
            prim::TooltipTrigger { class: "shell-tooltip-trigger", {children} }
            prim::TooltipContent { class: "shell-tooltip-content", side: defaults.side, "{label}" }
        }
    }
}
