use dioxus::prelude::*;

use crate::dom::show_notice;
use crate::links::{check_outbound, LinkCheck, EXTERNAL_REL, EXTERNAL_TARGET, UNAVAILABLE_NOTICE};

#[component]
pub fn SectionTitle(id: String, title: String) -> Element {
    rsx! {
        h2 { id: "{id}", class: "section-title",
            span { class: "section-title-bar" }
            "{title}"
        }
    }
}

/// Outbound link that opens in a new context. Placeholder targets are
/// cancelled with a notice instead of navigating.
#[component]
pub fn ExternalLink(
    href: String,
    class: Option<String>,
    aria_label: Option<String>,
    children: Element,
) -> Element {
    let class = class.unwrap_or_else(|| "external-link".to_string());
    let target = href.clone();
    rsx! {
        a {
            href: "{href}",
            target: EXTERNAL_TARGET,
            rel: EXTERNAL_REL,
            class: "{class}",
            aria_label: aria_label,
            onclick: move |event: MouseEvent| {
                if check_outbound(&target) == LinkCheck::Blocked {
                    event.prevent_default();
                    tracing::debug!("links: blocked placeholder target");
                    show_notice(UNAVAILABLE_NOTICE);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div { class: "loading-screen", role: "status", aria_label: "Loading portfolio",
            div { class: "loading-spinner" }
            p { class: "loading-text", "Loading portfolio..." }
        }
    }
}
