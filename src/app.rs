use dioxus::prelude::*;

use crate::components::LoadingScreen;
use crate::config::{use_site_config, SiteConfig};
use crate::content::PROFILE;
use crate::hooks::{
    use_back_to_top, use_loading_gate, use_menu_focus_trap, use_profile_overlay,
    use_section_observer,
};
use crate::sections::{
    About, Achievements, BackToTop, Contact, Education, Footer, Hero, HowIWork, ProfileOverlay,
    Projects, SiteHeader, Skills,
};
use crate::state::AppState;
use crate::theme::{PageTheme, Theme};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_site_config();

    rsx! {
        document::Title { "{PROFILE.name} | {PROFILE.role}" }
        document::Meta { name: "description", content: "{PROFILE.summary}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        match config() {
            None => rsx! { LoadingScreen {} },
            Some(config) => rsx! { Portfolio { config } },
        }
    }
}

#[component]
fn Portfolio(config: SiteConfig) -> Element {
    let delay_ms = config.loading_delay_ms;
    let offset = config.back_to_top_offset;
    use_context_provider(|| config);

    let mut theme = use_context_provider(|| Signal::new(PageTheme::for_page()));
    let state = use_context_provider(|| {
        let dark = theme.peek().initial();
        Signal::new(AppState::new(dark).with_back_to_top_offset(offset))
    });

    // A stored dark preference reaches the document before first paint.
    use_effect(move || {
        tracing::debug!("portfolio: mount");
        if state.peek().dark_mode() {
            theme.write().apply(Theme::Dark);
        }
    });

    use_loading_gate(state, delay_ms);
    use_back_to_top(state);
    use_section_observer(state);
    use_profile_overlay(state);
    use_menu_focus_trap(state);

    if state.read().is_loading() {
        return rsx! { LoadingScreen {} };
    }

    rsx! {
        a { href: "#main-content", class: "skip-link", "Skip to main content" }
        SiteHeader {}
        main { id: "main-content", class: "page",
            Hero {}
            About {}
            HowIWork {}
            Skills {}
            Projects {}
            Education {}
            Achievements {}
            Contact {}
        }
        ProfileOverlay {}
        BackToTop {}
        Footer {}
    }
}
