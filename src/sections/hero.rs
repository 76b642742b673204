use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::content::PROFILE;
use crate::scroll_spy::Section;
use crate::sections::header::navigate_to;
use crate::state::AppState;

#[component]
pub fn Hero() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let config = use_context::<SiteConfig>();
    let has_image = state.read().has_profile_image();

    rsx! {
        section { class: "hero", aria_labelledby: "hero-title",
            div { class: "hero-copy",
                div { class: "hero-avatar",
                    button {
                        r#type: "button",
                        class: "avatar-button",
                        aria_label: "Click to enlarge profile photo",
                        onclick: move |_| state.write().enlarge_profile(),
                        if has_image {
                            img {
                                src: "{config.profile_photo}",
                                alt: "Profile photo",
                                class: "avatar",
                                onerror: move |_| {
                                    tracing::debug!("hero: profile photo failed, using initials");
                                    state.write().profile_image_failed();
                                },
                            }
                        } else {
                            InitialsGlyph { class: "avatar avatar-initials" }
                        }
                    }
                }
                h1 { id: "hero-title", class: "hero-title", "{PROFILE.name}" }
                p { class: "hero-role",
                    span { class: "status-dot" }
                    "{PROFILE.role}"
                }
                p { class: "hero-summary", "{PROFILE.summary}" }
                div { class: "hero-actions",
                    button {
                        r#type: "button",
                        class: "button-primary",
                        onclick: move |_| navigate_to(state, Section::Projects),
                        "VIEW PROJECTS"
                    }
                    button {
                        r#type: "button",
                        class: "button-outline",
                        onclick: move |_| navigate_to(state, Section::Contact),
                        "GET IN TOUCH"
                    }
                }
            }
            figure { class: "developer-animation", aria_hidden: "true",
                div { class: "developer",
                    div { class: "developer-head" }
                    div { class: "developer-body" }
                    div { class: "developer-laptop" }
                }
                div { class: "floating-icons",
                    span { class: "floating-icon", "</>" }
                    span { class: "floating-icon", "JS" }
                    span { class: "floating-icon", "⚙" }
                }
            }
        }
    }
}

#[component]
fn InitialsGlyph(class: String) -> Element {
    rsx! {
        div { class: "{class}", aria_hidden: "true",
            span { "{PROFILE.initials}" }
        }
    }
}

/// Full-screen view of the profile photo. Clicking anywhere closes it.
#[component]
pub fn ProfileOverlay() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let config = use_context::<SiteConfig>();
    if !state.read().profile_enlarged() {
        return rsx! {};
    }
    let has_image = state.read().has_profile_image();

    rsx! {
        div {
            class: "profile-overlay",
            role: "dialog",
            aria_modal: "true",
            aria_label: "Enlarged profile photo",
            onclick: move |_| state.write().dismiss_profile(),
            div { class: "profile-overlay-content",
                if has_image {
                    img { src: "{config.profile_photo}", alt: "Profile photo enlarged", class: "avatar-large" }
                } else {
                    InitialsGlyph { class: "avatar-large avatar-initials" }
                }
                p { class: "profile-overlay-hint", "Click anywhere to close" }
            }
        }
    }
}
