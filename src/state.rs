use crate::content::{ProjectId, SkillKey};
use crate::scroll_spy::{resolve_active, Section, SectionEntry};

pub const BACK_TO_TOP_OFFSET: f64 = 400.0;

/// Page-wide UI state. Owned by the top-level view and shared through context;
/// the methods below are the only way to change it.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    active_section: Section,
    dark_mode: bool,
    mobile_menu_open: bool,
    is_loading: bool,
    expanded_project: Option<ProjectId>,
    hovered_skill: Option<SkillKey>,
    show_back_to_top: bool,
    profile_enlarged: bool,
    has_profile_image: bool,
    back_to_top_offset: f64,
}

impl AppState {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            active_section: Section::About,
            dark_mode,
            mobile_menu_open: false,
            is_loading: true,
            expanded_project: None,
            hovered_skill: None,
            show_back_to_top: false,
            profile_enlarged: false,
            has_profile_image: true,
            back_to_top_offset: BACK_TO_TOP_OFFSET,
        }
    }

    pub fn with_back_to_top_offset(mut self, offset: f64) -> Self {
        self.back_to_top_offset = offset;
        self
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn expanded_project(&self) -> Option<ProjectId> {
        self.expanded_project
    }

    pub fn is_expanded(&self, id: ProjectId) -> bool {
        self.expanded_project == Some(id)
    }

    pub fn hovered_skill(&self) -> Option<SkillKey> {
        self.hovered_skill
    }

    pub fn is_hovered(&self, key: SkillKey) -> bool {
        self.hovered_skill == Some(key)
    }

    pub fn show_back_to_top(&self) -> bool {
        self.show_back_to_top
    }

    pub fn profile_enlarged(&self) -> bool {
        self.profile_enlarged
    }

    pub fn has_profile_image(&self) -> bool {
        self.has_profile_image
    }

    pub fn set_active_section(&mut self, section: Section) {
        self.active_section = section;
    }

    pub fn apply_section_entries(&mut self, entries: &[SectionEntry]) {
        self.active_section = resolve_active(self.active_section, entries);
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Returns `true` only on the transition out of loading.
    pub fn finish_loading(&mut self) -> bool {
        let was_loading = self.is_loading;
        self.is_loading = false;
        was_loading
    }

    pub fn toggle_project(&mut self, id: ProjectId) {
        self.expanded_project = if self.expanded_project == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn hover_skill(&mut self, key: SkillKey) {
        self.hovered_skill = Some(key);
    }

    pub fn clear_skill_hover(&mut self) {
        self.hovered_skill = None;
    }

    pub fn back_to_top_visible_at(&self, scroll_offset: f64) -> bool {
        scroll_offset > self.back_to_top_offset
    }

    /// Returns whether the visibility flag changed.
    pub fn track_scroll(&mut self, scroll_offset: f64) -> bool {
        let visible = self.back_to_top_visible_at(scroll_offset);
        let changed = visible != self.show_back_to_top;
        self.show_back_to_top = visible;
        changed
    }

    pub fn enlarge_profile(&mut self) {
        self.profile_enlarged = true;
    }

    pub fn dismiss_profile(&mut self) {
        self.profile_enlarged = false;
    }

    /// Escape closes the enlarged photo; other keys are ignored.
    pub fn handle_overlay_key(&mut self, key: &str) -> bool {
        if self.profile_enlarged && key == "Escape" {
            self.profile_enlarged = false;
            return true;
        }
        false
    }

    pub fn profile_image_failed(&mut self) {
        self.has_profile_image = false;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(false)
    }
}
