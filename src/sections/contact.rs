use dioxus::prelude::*;

use crate::components::{ExternalLink, SectionTitle};
use crate::config::SiteConfig;
use crate::content::PROFILE;
use crate::dom;
use crate::links::mailto;
use crate::scroll_spy::Section;
use crate::state::AppState;

#[component]
pub fn Contact() -> Element {
    let config = use_context::<SiteConfig>();
    let email_href = mailto(PROFILE.email);

    rsx! {
        section { id: Section::Contact.id(), class: "section", aria_labelledby: "contact-title",
            SectionTitle { id: "contact-title", title: "Get In Touch" }
            p { class: "section-lead",
                "I'm open to internships, collaborations and interesting backend problems. The fastest way to reach me is email."
            }
            div { class: "contact-grid",
                a { href: "{email_href}", class: "card contact-card", aria_label: "Send email to {PROFILE.email}",
                    span { class: "contact-icon", aria_hidden: "true", "✉" }
                    span { class: "contact-label", "Email" }
                    span { class: "contact-value", "{PROFILE.email}" }
                }
                ExternalLink {
                    href: "{PROFILE.github_url}",
                    class: "card contact-card",
                    aria_label: "Visit GitHub profile",
                    span { class: "contact-icon", aria_hidden: "true", "⌥" }
                    span { class: "contact-label", "GitHub" }
                    span { class: "contact-value", "{PROFILE.github_label}" }
                }
                ExternalLink {
                    href: "{PROFILE.linkedin_url}",
                    class: "card contact-card",
                    aria_label: "Visit LinkedIn profile",
                    span { class: "contact-icon", aria_hidden: "true", "in" }
                    span { class: "contact-label", "LinkedIn" }
                    span { class: "contact-value", "{PROFILE.linkedin_label}" }
                }
            }
            div { class: "resume-download",
                a {
                    href: "{config.resume_path}",
                    download: "",
                    class: "button-primary",
                    aria_label: "Download resume as PDF",
                    "DOWNLOAD RESUME"
                }
            }
        }
    }
}

#[component]
pub fn BackToTop() -> Element {
    let state = use_context::<Signal<AppState>>();
    let visible = state.read().show_back_to_top();

    rsx! {
        button {
            r#type: "button",
            class: if visible { "back-to-top visible" } else { "back-to-top" },
            aria_label: "Back to top",
            aria_hidden: "{!visible}",
            tabindex: if visible { "0" } else { "-1" },
            onclick: move |_| dom::scroll_to_top(),
            "↑"
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer", role: "contentinfo",
            p { "© {PROFILE.name}. Built with Rust and Dioxus." }
        }
    }
}
