//! Thin wrappers over the browser globals. Everything that owns a browser
//! resource releases it on `Drop`, so clearing the slot that holds a handle is
//! the teardown.

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

#[cfg(target_arch = "wasm32")]
use crate::error::SiteError;
#[cfg(target_arch = "wasm32")]
use crate::focus_trap::wrap_target;
#[cfg(target_arch = "wasm32")]
use crate::scroll_spy::{Section, SectionBounds};

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

#[cfg(target_arch = "wasm32")]
pub struct ListenerHandle {
    target: web_sys::EventTarget,
    event: &'static str,
    closure: Rc<Closure<dyn FnMut(web_sys::Event)>>,
}

#[cfg(target_arch = "wasm32")]
impl ListenerHandle {
    pub fn on_document(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, SiteError> {
        let document = document().ok_or(SiteError::Dom("document missing"))?;
        Self::install(document.into(), event, handler, false)
    }

    pub fn on_window_passive(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or(SiteError::Dom("window missing"))?;
        Self::install(window.into(), event, handler, true)
    }

    fn install(
        target: web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
        passive: bool,
    ) -> Result<Self, SiteError> {
        let closure = Rc::new(Closure::wrap(
            Box::new(handler) as Box<dyn FnMut(web_sys::Event)>
        ));
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|_| SiteError::Dom("listener rejected"))?;
        Ok(Self {
            target,
            event,
            closure,
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.closure.as_ref().as_ref().unchecked_ref(),
        );
    }
}

/// Hides body overflow until dropped.
#[cfg(target_arch = "wasm32")]
pub struct ScrollLock {
    body: web_sys::HtmlElement,
}

#[cfg(target_arch = "wasm32")]
impl ScrollLock {
    pub fn acquire() -> Result<Self, SiteError> {
        let body = document()
            .and_then(|document| document.body())
            .ok_or(SiteError::Dom("document body missing"))?;
        body.style()
            .set_property("overflow", "hidden")
            .map_err(|_| SiteError::Dom("overflow lock rejected"))?;
        Ok(Self { body })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollLock {
    fn drop(&mut self) {
        let _ = self.body.style().remove_property("overflow");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

#[cfg(target_arch = "wasm32")]
pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

#[cfg(target_arch = "wasm32")]
pub fn section_bounds(section: Section) -> Option<SectionBounds> {
    let rect = document()?
        .get_element_by_id(section.id())?
        .get_bounding_client_rect();
    Some(SectionBounds {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

#[cfg(target_arch = "wasm32")]
pub fn key_of(event: &web_sys::Event) -> Option<String> {
    event
        .dyn_ref::<web_sys::KeyboardEvent>()
        .map(|event| event.key())
}

/// Keeps Tab and Shift+Tab cycling through the controls matched by `selector`.
#[cfg(target_arch = "wasm32")]
pub fn trap_tab(event: &web_sys::Event, selector: &str) {
    let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
        return;
    };
    if event.key() != "Tab" {
        return;
    }
    let Some(document) = document() else {
        return;
    };
    let Ok(controls) = document.query_selector_all(selector) else {
        return;
    };
    let count = controls.length() as usize;
    let focused = document
        .active_element()
        .and_then(|active| position_of(&controls, active.as_ref()));
    let Some(target) = wrap_target(focused, count, event.shift_key()) else {
        return;
    };
    event.prevent_default();
    if let Some(control) = controls
        .item(target as u32)
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = control.focus();
    }
}

#[cfg(target_arch = "wasm32")]
fn position_of(controls: &web_sys::NodeList, active: &JsValue) -> Option<usize> {
    (0..controls.length()).find_map(|index| {
        let node = controls.item(index)?;
        let node: &JsValue = node.as_ref();
        (node == active).then_some(index as usize)
    })
}

/// Smooth-scrolls to the element with `id`. Returns `false` when there is no
/// such element.
pub fn scroll_to_section(id: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(element) = document().and_then(|document| document.get_element_by_id(id)) else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        false
    }
}

pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Blocking notice for the user.
pub fn show_notice(message: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("notice: {message}");
}
