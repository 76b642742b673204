use dioxus::prelude::*;

use crate::content::PROFILE;
use crate::dom;
use crate::hooks::MOBILE_NAV_ID;
use crate::scroll_spy::Section;
use crate::state::AppState;
use crate::theme::PageTheme;

/// Scrolls to `section` and closes the mobile menu when the target exists.
pub fn navigate_to(mut state: Signal<AppState>, section: Section) {
    if dom::scroll_to_section(section.id()) {
        state.write().close_mobile_menu();
    }
}

#[component]
pub fn SiteHeader() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let mut theme = use_context::<Signal<PageTheme>>();
    let active = state.read().active_section();
    let dark = state.read().dark_mode();
    let menu_open = state.read().mobile_menu_open();

    rsx! {
        header { class: "site-header", role: "banner",
            div { class: "site-header-inner",
                div { class: "site-header-row",
                    a { href: "/", class: "brand", aria_label: "{PROFILE.name} - Home",
                        span { class: "brand-accent", "{PROFILE.first_name}" }
                        span { class: "brand-rest", "{PROFILE.last_name}" }
                    }
                    nav { class: "nav-desktop", role: "navigation", aria_label: "Main navigation",
                        for section in Section::ALL {
                            NavButton { key: "{section}", section, active: active == section, class: "nav-button" }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "menu-button",
                        aria_expanded: "{menu_open}",
                        aria_controls: MOBILE_NAV_ID,
                        aria_label: if menu_open { "Close menu" } else { "Open menu" },
                        onclick: move |_| state.write().toggle_mobile_menu(),
                        span { class: if menu_open { "hamburger open" } else { "hamburger" } }
                    }
                    button {
                        r#type: "button",
                        class: "theme-toggle",
                        aria_label: if dark { "Switch to light mode" } else { "Switch to dark mode" },
                        onclick: move |_| {
                            let current = state.peek().dark_mode();
                            let next = theme.write().toggle(current);
                            state.write().set_dark_mode(next);
                        },
                        if dark { "☀️" } else { "🌙" }
                    }
                }
                nav {
                    id: MOBILE_NAV_ID,
                    class: if menu_open { "nav-mobile open" } else { "nav-mobile" },
                    role: "navigation",
                    aria_label: "Mobile navigation",
                    for section in Section::ALL {
                        NavButton { key: "mobile-{section}", section, active: active == section, class: "nav-button nav-button-mobile" }
                    }
                }
            }
        }
    }
}

#[component]
fn NavButton(section: Section, active: bool, class: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let class = if active { format!("{class} active") } else { class };
    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            aria_current: if active { "page" },
            onclick: move |_| navigate_to(state, section),
            "{section.label()}"
        }
    }
}
