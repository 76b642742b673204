use crate::error::SiteError;

pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Durable key-value storage for the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Result<Option<String>, SiteError>;
    fn save(&mut self, value: &str) -> Result<(), SiteError>;
}

/// Whatever renders the theme: the document root in the browser.
pub trait ThemeSurface {
    fn apply(&mut self, theme: Theme);
}

pub struct ThemeController<S, D> {
    store: S,
    surface: D,
}

impl<S: ThemeStore, D: ThemeSurface> ThemeController<S, D> {
    pub fn new(store: S, surface: D) -> Self {
        Self { store, surface }
    }

    /// Only an exact `"dark"` counts; anything else, including a failed read,
    /// falls back to light.
    pub fn initial(&self) -> bool {
        match self.store.load() {
            Ok(value) => value.as_deref() == Some(Theme::Dark.as_str()),
            Err(err) => {
                tracing::debug!("theme: read failed: {err}");
                false
            }
        }
    }

    pub fn apply(&mut self, theme: Theme) {
        self.surface.apply(theme);
    }

    pub fn toggle(&mut self, current: bool) -> bool {
        let next = Theme::from_dark_mode(!current);
        self.surface.apply(next);
        if let Err(err) = self.store.save(next.as_str()) {
            tracing::debug!("theme: write failed: {err}");
        }
        next.is_dark()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }
}

#[cfg(target_arch = "wasm32")]
pub struct LocalThemeStore;

#[cfg(target_arch = "wasm32")]
impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Result<Option<String>, SiteError> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .get_item(THEME_STORAGE_KEY)
            .map_err(SiteError::storage)
    }

    fn save(&mut self, value: &str) -> Result<(), SiteError> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .set_item(THEME_STORAGE_KEY, value)
            .map_err(SiteError::storage)
    }
}

/// Keeps the preference for the lifetime of the process only.
#[cfg(any(test, not(target_arch = "wasm32")))]
#[derive(Default)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

#[cfg(any(test, not(target_arch = "wasm32")))]
impl MemoryThemeStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

#[cfg(any(test, not(target_arch = "wasm32")))]
impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<String>, SiteError> {
        Ok(self.value.clone())
    }

    fn save(&mut self, value: &str) -> Result<(), SiteError> {
        self.value = Some(value.to_string());
        Ok(())
    }
}

/// Sets `data-theme` on `<html>`.
pub struct DocumentRoot;

impl ThemeSurface for DocumentRoot {
    fn apply(&mut self, theme: Theme) {
        #[cfg(target_arch = "wasm32")]
        {
            let root = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element());
            if let Some(root) = root {
                let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = theme;
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub type PageTheme = ThemeController<LocalThemeStore, DocumentRoot>;

/// Host builds only exist to run the controllers under test; the crate ships
/// the web renderer alone, so nothing here outlives the process.
#[cfg(not(target_arch = "wasm32"))]
pub type PageTheme = ThemeController<MemoryThemeStore, DocumentRoot>;

impl PageTheme {
    pub fn for_page() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            ThemeController::new(LocalThemeStore, DocumentRoot)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            ThemeController::new(MemoryThemeStore::default(), DocumentRoot)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingSurface {
        applied: Vec<Theme>,
    }

    impl ThemeSurface for RecordingSurface {
        fn apply(&mut self, theme: Theme) {
            self.applied.push(theme);
        }
    }

    struct BrokenStore;

    impl ThemeStore for BrokenStore {
        fn load(&self) -> Result<Option<String>, SiteError> {
            Err(SiteError::Storage("quota".to_string()))
        }

        fn save(&mut self, _value: &str) -> Result<(), SiteError> {
            Err(SiteError::Storage("quota".to_string()))
        }
    }

    #[test]
    fn fresh_storage_starts_light() {
        let controller = ThemeController::new(MemoryThemeStore::default(), RecordingSurface::default());
        assert!(!controller.initial());
    }

    #[test]
    fn only_exact_dark_value_is_dark() {
        let dark = ThemeController::new(MemoryThemeStore::with_value("dark"), RecordingSurface::default());
        assert!(dark.initial());
        let shouty = ThemeController::new(MemoryThemeStore::with_value("DARK"), RecordingSurface::default());
        assert!(!shouty.initial());
        let quoted = ThemeController::new(MemoryThemeStore::with_value("\"dark\""), RecordingSurface::default());
        assert!(!quoted.initial());
    }

    #[test]
    fn toggle_persists_and_applies_once() {
        let mut controller =
            ThemeController::new(MemoryThemeStore::default(), RecordingSurface::default());
        let next = controller.toggle(false);
        assert!(next);
        assert_eq!(controller.store().value(), Some("dark"));
        assert_eq!(controller.surface().applied, vec![Theme::Dark]);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn host_page_theme_keeps_its_preference_in_memory() {
        let mut page = PageTheme::for_page();
        assert!(page.toggle(false));
        assert_eq!(page.store().value(), Some("dark"));
        assert!(page.initial());

        let next_page = PageTheme::for_page();
        assert_eq!(next_page.store().value(), None);
        assert!(!next_page.initial());
    }

    #[test]
    fn storage_failures_are_swallowed() {
        let mut controller = ThemeController::new(BrokenStore, RecordingSurface::default());
        assert!(!controller.initial());
        assert!(controller.toggle(false));
        assert_eq!(controller.surface().applied, vec![Theme::Dark]);
    }
}
