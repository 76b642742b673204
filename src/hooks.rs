use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;

#[cfg(target_arch = "wasm32")]
use crate::dom::{self, ListenerHandle, ScrollLock};
#[cfg(any(test, target_arch = "wasm32"))]
use crate::error::SiteError;
#[cfg(target_arch = "wasm32")]
use crate::scroll_spy::{observe_all, IntersectionWatcher, OffsetWatcher};
use crate::state::AppState;

pub const MOBILE_NAV_ID: &str = "mobile-nav";
#[cfg(target_arch = "wasm32")]
const MOBILE_NAV_CONTROLS: &str = "#mobile-nav button";

#[cfg(target_arch = "wasm32")]
enum SpyHandle {
    Intersection(IntersectionWatcher),
    Offset {
        _scroll: ListenerHandle,
        _watcher: Rc<RefCell<OffsetWatcher>>,
    },
}

#[cfg(target_arch = "wasm32")]
struct OverlayGuard {
    _escape: ListenerHandle,
    _lock: ScrollLock,
}

/// Makes `slot` hold a guard exactly while `active` is true. Installing only
/// happens on the inactive-to-active edge and releasing is dropping the guard,
/// so repeated calls with the same flag are no-ops. A failed install leaves the
/// slot empty; the next active call retries.
#[cfg(any(test, target_arch = "wasm32"))]
fn sync_guard<G>(
    active: bool,
    slot: &mut Option<G>,
    install: impl FnOnce() -> Result<G, SiteError>,
) -> Result<(), SiteError> {
    match (active, slot.is_some()) {
        (true, false) => {
            *slot = Some(install()?);
            Ok(())
        }
        (false, true) => {
            slot.take();
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(target_arch = "wasm32")]
fn release<T: 'static>(mut slot: Signal<Option<T>>) {
    if let Ok(mut value) = slot.try_write() {
        value.take();
    }
}

/// Flips `is_loading` once after `delay_ms`. The pending timer is cancelled
/// if the page goes away first.
pub fn use_loading_gate(mut state: Signal<AppState>, delay_ms: u32) {
    #[cfg(target_arch = "wasm32")]
    {
        let mut timer = use_signal(|| None::<Timeout>);
        use_effect(move || {
            let loading = state.read().is_loading();
            let _ = sync_guard(loading, &mut *timer.write(), || {
                Ok(Timeout::new(delay_ms, move || {
                    if state.write().finish_loading() {
                        tracing::debug!("portfolio: loading gate released");
                    }
                }))
            });
        });
        use_drop(move || release(timer));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = delay_ms;
        use_effect(move || {
            if state.peek().is_loading() {
                state.write().finish_loading();
            }
        });
    }
}

/// Keeps `show_back_to_top` in sync with the window scroll offset.
pub fn use_back_to_top(state: Signal<AppState>) {
    #[cfg(target_arch = "wasm32")]
    {
        let mut listener = use_signal(|| None::<ListenerHandle>);
        use_effect(move || {
            let mut state = state;
            let installed = sync_guard(true, &mut *listener.write(), || {
                ListenerHandle::on_window_passive("scroll", move |_event| {
                    let offset = dom::scroll_offset();
                    let current = state.peek();
                    let changed =
                        current.back_to_top_visible_at(offset) != current.show_back_to_top();
                    drop(current);
                    if changed {
                        state.write().track_scroll(offset);
                    }
                })
            });
            if let Err(err) = installed {
                tracing::debug!("back-to-top: {err}");
            }
        });
        use_drop(move || release(listener));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = state;
}

/// Attaches the scroll spy once the main view is on screen.
pub fn use_section_observer(state: Signal<AppState>) {
    #[cfg(target_arch = "wasm32")]
    {
        let mut handle = use_signal(|| None::<SpyHandle>);
        use_effect(move || {
            let ready = !state.read().is_loading();
            if let Err(err) = sync_guard(ready, &mut *handle.write(), || attach_spy(state)) {
                tracing::debug!("scroll-spy: {err}");
            }
        });
        use_drop(move || release(handle));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = state;
}

#[cfg(target_arch = "wasm32")]
fn attach_spy(state: Signal<AppState>) -> Result<SpyHandle, SiteError> {
    let mut on_intersection = state;
    match IntersectionWatcher::new(move |entries| {
        on_intersection.write().apply_section_entries(&entries);
    }) {
        Ok(mut watcher) => {
            observe_all(&mut watcher);
            tracing::debug!("scroll-spy: intersection observer attached");
            Ok(SpyHandle::Intersection(watcher))
        }
        Err(err) => {
            tracing::debug!("scroll-spy: {err}, falling back to offsets");
            let mut on_offset = state;
            let watcher = Rc::new(RefCell::new(OffsetWatcher::new(move |entries| {
                on_offset.write().apply_section_entries(&entries);
            })));
            observe_all(&mut *watcher.borrow_mut());
            watcher
                .borrow_mut()
                .evaluate(dom::viewport_height(), dom::section_bounds);
            let for_scroll = watcher.clone();
            let scroll = ListenerHandle::on_window_passive("scroll", move |_event| {
                for_scroll
                    .borrow_mut()
                    .evaluate(dom::viewport_height(), dom::section_bounds);
            })?;
            Ok(SpyHandle::Offset {
                _scroll: scroll,
                _watcher: watcher,
            })
        }
    }
}

/// While the profile photo is enlarged: Escape closes it and the page does
/// not scroll.
pub fn use_profile_overlay(state: Signal<AppState>) {
    #[cfg(target_arch = "wasm32")]
    {
        let mut guard = use_signal(|| None::<OverlayGuard>);
        use_effect(move || {
            let enlarged = state.read().profile_enlarged();
            let synced = sync_guard(enlarged, &mut *guard.write(), || {
                let mut on_key = state;
                let escape = ListenerHandle::on_document("keydown", move |event| {
                    if let Some(key) = dom::key_of(&event) {
                        on_key.write().handle_overlay_key(&key);
                    }
                })?;
                Ok(OverlayGuard {
                    _escape: escape,
                    _lock: ScrollLock::acquire()?,
                })
            });
            if let Err(err) = synced {
                tracing::debug!("profile overlay: {err}");
            }
        });
        use_drop(move || release(guard));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = state;
}

/// Traps Tab inside the mobile nav while the menu is open.
pub fn use_menu_focus_trap(state: Signal<AppState>) {
    #[cfg(target_arch = "wasm32")]
    {
        let mut trap = use_signal(|| None::<ListenerHandle>);
        use_effect(move || {
            let open = state.read().mobile_menu_open();
            let synced = sync_guard(open, &mut *trap.write(), || {
                ListenerHandle::on_document("keydown", |event| {
                    dom::trap_tab(&event, MOBILE_NAV_CONTROLS)
                })
            });
            if let Err(err) = synced {
                tracing::debug!("focus trap: {err}");
            }
        });
        use_drop(move || release(trap));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = state;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts installs and releases the way a listener or timer handle would.
    struct CountingGuard {
        released: Rc<Cell<usize>>,
    }

    impl Drop for CountingGuard {
        fn drop(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    struct Counters {
        installed: Rc<Cell<usize>>,
        released: Rc<Cell<usize>>,
    }

    impl Counters {
        fn new() -> Self {
            Self {
                installed: Rc::new(Cell::new(0)),
                released: Rc::new(Cell::new(0)),
            }
        }

        fn sync(&self, active: bool, slot: &mut Option<CountingGuard>) -> Result<(), SiteError> {
            let installed = self.installed.clone();
            let released = self.released.clone();
            sync_guard(active, slot, move || {
                installed.set(installed.get() + 1);
                Ok(CountingGuard { released })
            })
        }
    }

    #[test]
    fn staying_active_installs_once() {
        let counters = Counters::new();
        let mut slot = None;
        counters.sync(true, &mut slot).unwrap();
        counters.sync(true, &mut slot).unwrap();
        counters.sync(true, &mut slot).unwrap();
        assert_eq!(counters.installed.get(), 1);
        assert_eq!(counters.released.get(), 0);
        assert!(slot.is_some());
    }

    #[test]
    fn turning_inactive_releases_exactly_once() {
        let counters = Counters::new();
        let mut slot = None;
        counters.sync(true, &mut slot).unwrap();
        counters.sync(false, &mut slot).unwrap();
        counters.sync(false, &mut slot).unwrap();
        assert_eq!(counters.released.get(), 1);
        assert!(slot.is_none());
    }

    #[test]
    fn inactive_never_installs() {
        let counters = Counters::new();
        let mut slot = None;
        counters.sync(false, &mut slot).unwrap();
        assert_eq!(counters.installed.get(), 0);
        assert!(slot.is_none());
    }

    #[test]
    fn reopening_installs_a_fresh_guard() {
        let counters = Counters::new();
        let mut slot = None;
        for active in [true, false, true, false] {
            counters.sync(active, &mut slot).unwrap();
        }
        assert_eq!(counters.installed.get(), 2);
        assert_eq!(counters.released.get(), 2);
    }

    #[test]
    fn teardown_while_active_releases_the_guard() {
        let counters = Counters::new();
        let mut slot = None;
        counters.sync(true, &mut slot).unwrap();
        drop(slot);
        assert_eq!(counters.released.get(), 1);
    }

    #[test]
    fn failed_install_leaves_slot_empty_and_retries() {
        let mut slot: Option<CountingGuard> = None;
        let err = sync_guard(true, &mut slot, || Err(SiteError::Dom("document missing")))
            .unwrap_err();
        assert_eq!(err, SiteError::Dom("document missing"));
        assert!(slot.is_none());

        let counters = Counters::new();
        counters.sync(true, &mut slot).unwrap();
        assert_eq!(counters.installed.get(), 1);
        assert!(slot.is_some());
    }
}
