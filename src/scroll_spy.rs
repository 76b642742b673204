use std::fmt;

/// Navigable sections in document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    About,
    Skills,
    Projects,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Education,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Fraction of the viewport cut from the top of the observation band.
pub const BAND_TOP_INSET: f64 = 0.2;
/// Fraction of the viewport cut from the bottom of the observation band.
pub const BAND_BOTTOM_INSET: f64 = 0.6;

pub fn root_margin() -> String {
    format!(
        "-{}% 0px -{}% 0px",
        (BAND_TOP_INSET * 100.0).round(),
        (BAND_BOTTOM_INSET * 100.0).round()
    )
}

/// Top and bottom edges of an element relative to the viewport top, the same
/// frame `getBoundingClientRect` reports.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportBand {
    pub top: f64,
    pub bottom: f64,
}

impl ViewportBand {
    pub fn for_viewport(height: f64) -> Self {
        Self {
            top: height * BAND_TOP_INSET,
            bottom: height * (1.0 - BAND_BOTTOM_INSET),
        }
    }

    pub fn intersects(&self, bounds: SectionBounds) -> bool {
        bounds.top < self.bottom && bounds.bottom > self.top
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionEntry {
    pub section: Section,
    pub intersecting: bool,
}

/// Folds a batch of watcher entries into the active section. Entries that are
/// not intersecting are ignored; among the rest the last one wins.
pub fn resolve_active(current: Section, entries: &[SectionEntry]) -> Section {
    entries
        .iter()
        .rev()
        .find(|entry| entry.intersecting)
        .map(|entry| entry.section)
        .unwrap_or(current)
}

pub type EntryCallback = Box<dyn FnMut(Vec<SectionEntry>)>;

/// Reports sections entering the observation band to the callback it was
/// built with.
pub trait SectionWatcher {
    fn observe(&mut self, section: Section);
    fn disconnect(&mut self);
}

pub fn observe_all<W: SectionWatcher + ?Sized>(watcher: &mut W) {
    for section in Section::ALL {
        watcher.observe(section);
    }
}

/// Compares section bounds against the band by hand on every evaluation.
pub struct OffsetWatcher {
    observed: Vec<(Section, Option<bool>)>,
    on_entries: EntryCallback,
}

impl OffsetWatcher {
    pub fn new(on_entries: impl FnMut(Vec<SectionEntry>) + 'static) -> Self {
        Self {
            observed: Vec::new(),
            on_entries: Box::new(on_entries),
        }
    }

    /// Sections whose bounds cannot be resolved keep their previous state.
    pub fn evaluate(&mut self, viewport_height: f64, bounds: impl Fn(Section) -> Option<SectionBounds>) {
        let band = ViewportBand::for_viewport(viewport_height);
        let mut changed = Vec::new();
        for (section, last) in self.observed.iter_mut() {
            let Some(rect) = bounds(*section) else {
                continue;
            };
            let intersecting = band.intersects(rect);
            if *last != Some(intersecting) {
                *last = Some(intersecting);
                changed.push(SectionEntry {
                    section: *section,
                    intersecting,
                });
            }
        }
        if !changed.is_empty() {
            (self.on_entries)(changed);
        }
    }
}

impl SectionWatcher for OffsetWatcher {
    fn observe(&mut self, section: Section) {
        if self.observed.iter().any(|(existing, _)| *existing == section) {
            return;
        }
        self.observed.push((section, None));
    }

    fn disconnect(&mut self) {
        self.observed.clear();
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::IntersectionWatcher;

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::rc::Rc;

    use wasm_bindgen::{closure::Closure, JsCast, JsValue};

    use super::{root_margin, EntryCallback, Section, SectionEntry, SectionWatcher};
    use crate::error::SiteError;

    type ObserverClosure = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

    pub struct IntersectionWatcher {
        observer: web_sys::IntersectionObserver,
        _closure: Rc<ObserverClosure>,
    }

    impl IntersectionWatcher {
        pub fn new(on_entries: impl FnMut(Vec<SectionEntry>) + 'static) -> Result<Self, SiteError> {
            let mut on_entries: EntryCallback = Box::new(on_entries);
            let closure = Rc::new(Closure::wrap(Box::new(
                move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                    let batch: Vec<SectionEntry> = entries
                        .iter()
                        .filter_map(|entry| {
                            let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                            let section = Section::from_id(&entry.target().id())?;
                            Some(SectionEntry {
                                section,
                                intersecting: entry.is_intersecting(),
                            })
                        })
                        .collect();
                    if !batch.is_empty() {
                        on_entries(batch);
                    }
                },
            ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>));

            let options = web_sys::IntersectionObserverInit::new();
            options.set_root_margin(&root_margin());
            options.set_threshold(&JsValue::from_f64(0.0));
            let observer = web_sys::IntersectionObserver::new_with_options(
                closure.as_ref().as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|_| SiteError::Dom("intersection observer rejected"))?;
            Ok(Self {
                observer,
                _closure: closure,
            })
        }
    }

    impl SectionWatcher for IntersectionWatcher {
        fn observe(&mut self, section: Section) {
            let target = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(section.id()));
            if let Some(target) = target {
                self.observer.observe(&target);
            }
        }

        fn disconnect(&mut self) {
            self.observer.disconnect();
        }
    }

    impl Drop for IntersectionWatcher {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn entry(section: Section, intersecting: bool) -> SectionEntry {
        SectionEntry {
            section,
            intersecting,
        }
    }

    #[test]
    fn margin_matches_band() {
        assert_eq!(root_margin(), "-20% 0px -60% 0px");
        assert_eq!(
            ViewportBand::for_viewport(1000.0),
            ViewportBand {
                top: 200.0,
                bottom: 400.0
            }
        );
    }

    #[test]
    fn ids_round_trip_in_order() {
        let ids: Vec<_> = Section::ALL.iter().map(|section| section.id()).collect();
        assert_eq!(ids, vec!["about", "skills", "projects", "education", "contact"]);
        assert_eq!(Section::from_id("education"), Some(Section::Education));
        assert_eq!(Section::from_id("hero"), None);
    }

    #[test]
    fn last_intersecting_entry_wins() {
        let batch = [
            entry(Section::Skills, true),
            entry(Section::Projects, true),
            entry(Section::Education, false),
        ];
        assert_eq!(resolve_active(Section::About, &batch), Section::Projects);
    }

    #[test]
    fn leaving_entries_keep_current() {
        let batch = [entry(Section::About, false)];
        assert_eq!(resolve_active(Section::Skills, &batch), Section::Skills);
        assert_eq!(resolve_active(Section::Skills, &[]), Section::Skills);
    }

    #[test]
    fn offset_watcher_reports_only_changes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut watcher = OffsetWatcher::new(move |batch| sink.borrow_mut().push(batch));
        observe_all(&mut watcher);

        let layout = |section: Section| {
            let index = Section::ALL.iter().position(|s| *s == section)? as f64;
            Some(SectionBounds {
                top: index * 1000.0,
                bottom: index * 1000.0 + 1000.0,
            })
        };
        watcher.evaluate(1000.0, layout);
        watcher.evaluate(1000.0, layout);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].len(), Section::ALL.len());
        assert_eq!(seen[0][0], entry(Section::About, true));
        assert!(seen[0][1..].iter().all(|e| !e.intersecting));
    }

    #[test]
    fn disconnect_stops_reports() {
        let seen = Rc::new(RefCell::new(0usize));
        let sink = seen.clone();
        let mut watcher = OffsetWatcher::new(move |_| *sink.borrow_mut() += 1);
        watcher.observe(Section::Contact);
        watcher.observe(Section::Contact);
        watcher.disconnect();
        watcher.evaluate(800.0, |_| Some(SectionBounds { top: 0.0, bottom: 800.0 }));
        assert_eq!(*seen.borrow(), 0);
    }
}
