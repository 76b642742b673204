use std::cell::RefCell;
use std::rc::Rc;

use portfolio_app::config::SiteConfig;
use portfolio_app::content::PROJECTS;
use portfolio_app::focus_trap::wrap_target;
use portfolio_app::links::{check_outbound, LinkCheck};
use portfolio_app::scroll_spy::{observe_all, OffsetWatcher, Section, SectionBounds};
use portfolio_app::state::AppState;
use portfolio_app::theme::{DocumentRoot, MemoryThemeStore, ThemeController};
use pretty_assertions::assert_eq;

const VIEWPORT: f64 = 1000.0;

/// Lays the five sections out back to back, 600px each, starting at the top
/// of the document, then shifts them by the current scroll offset.
fn layout(scroll: f64) -> impl Fn(Section) -> Option<SectionBounds> {
    move |section| {
        let index = Section::ALL.iter().position(|candidate| *candidate == section)? as f64;
        let top = index * 600.0 - scroll;
        Some(SectionBounds {
            top,
            bottom: top + 600.0,
        })
    }
}

#[test]
fn fresh_page_starts_light_and_loading() {
    let theme = ThemeController::new(MemoryThemeStore::default(), DocumentRoot);
    let mut state = AppState::new(theme.initial());

    assert!(!state.dark_mode());
    assert!(state.is_loading());
    assert_eq!(state.active_section(), Section::About);

    assert!(state.finish_loading());
    assert!(!state.is_loading());
}

#[test]
fn stored_dark_preference_survives_reload() {
    let theme = ThemeController::new(MemoryThemeStore::with_value("dark"), DocumentRoot);
    assert!(AppState::new(theme.initial()).dark_mode());
}

#[test]
fn double_toggle_restores_theme_and_persists_last_value() {
    let mut theme = ThemeController::new(MemoryThemeStore::default(), DocumentRoot);
    let mut state = AppState::new(theme.initial());

    let next = theme.toggle(state.dark_mode());
    state.set_dark_mode(next);
    assert!(state.dark_mode());
    assert_eq!(theme.store().value(), Some("dark"));

    let next = theme.toggle(state.dark_mode());
    state.set_dark_mode(next);
    assert!(!state.dark_mode());
    assert_eq!(theme.store().value(), Some("light"));
}

#[test]
fn scrolling_moves_the_active_section_through_the_band() {
    let state = Rc::new(RefCell::new(AppState::default()));
    let sink = state.clone();
    let mut watcher = OffsetWatcher::new(move |entries| {
        sink.borrow_mut().apply_section_entries(&entries);
    });
    observe_all(&mut watcher);

    watcher.evaluate(VIEWPORT, layout(0.0));
    assert_eq!(state.borrow().active_section(), Section::About);

    // Projects spans 1200..1800; at 1100 its top sits at 100, over the band.
    watcher.evaluate(VIEWPORT, layout(1100.0));
    assert_eq!(state.borrow().active_section(), Section::Projects);

    watcher.evaluate(VIEWPORT, layout(2350.0));
    assert_eq!(state.borrow().active_section(), Section::Contact);

    watcher.evaluate(VIEWPORT, layout(0.0));
    assert_eq!(state.borrow().active_section(), Section::About);
}

#[test]
fn back_to_top_follows_the_configured_threshold() {
    let config = SiteConfig::default();
    let mut state = AppState::default().with_back_to_top_offset(config.back_to_top_offset);

    assert!(!state.track_scroll(120.0));
    assert!(!state.show_back_to_top());

    assert!(state.track_scroll(401.0));
    assert!(state.show_back_to_top());
    assert!(!state.track_scroll(900.0));

    assert!(state.track_scroll(400.0));
    assert!(!state.show_back_to_top());
}

#[test]
fn only_one_project_is_ever_expanded() {
    let mut state = AppState::default();
    let first = PROJECTS[0].id;
    let second = PROJECTS[1].id;

    state.toggle_project(first);
    state.toggle_project(second);
    assert_eq!(state.expanded_project(), Some(second));
    assert!(!state.is_expanded(first));

    state.toggle_project(second);
    assert_eq!(state.expanded_project(), None);
}

#[test]
fn empty_demo_links_are_blocked_and_real_ones_pass() {
    assert_eq!(check_outbound(""), LinkCheck::Blocked);
    assert_eq!(check_outbound("#"), LinkCheck::Blocked);
    for project in PROJECTS {
        assert_eq!(check_outbound(project.github), LinkCheck::Proceed);
        assert_eq!(check_outbound(project.demo), LinkCheck::Proceed, "{}", project.id);
    }
}

#[test]
fn mobile_menu_tab_wraps_both_ways() {
    let mut state = AppState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open());

    let controls = Section::ALL.len();
    assert_eq!(wrap_target(Some(controls - 1), controls, false), Some(0));
    assert_eq!(wrap_target(Some(0), controls, true), Some(controls - 1));
    assert_eq!(wrap_target(Some(2), controls, false), None);

    state.close_mobile_menu();
    assert!(!state.mobile_menu_open());
}

#[test]
fn profile_overlay_closes_on_escape_or_click() {
    let mut state = AppState::default();

    state.enlarge_profile();
    assert!(state.profile_enlarged());
    assert!(!state.handle_overlay_key("Enter"));
    assert!(state.handle_overlay_key("Escape"));
    assert!(!state.profile_enlarged());

    state.enlarge_profile();
    state.dismiss_profile();
    assert!(!state.profile_enlarged());
}

#[test]
fn broken_profile_photo_falls_back_to_initials() {
    let mut state = AppState::default();
    assert!(state.has_profile_image());
    state.profile_image_failed();
    assert!(!state.has_profile_image());
}
