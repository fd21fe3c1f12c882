//! Thin `web-sys` helpers shared by the controllers' browser glue.
//!
//! Lookups return `Option` because a missing hook is normal on pages that
//! omit a section. Only failed JavaScript calls surface as [`DomError`].

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, NodeList};

use crate::error::DomError;

/// Current window's document.
pub(crate) fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// Anything that answers CSS selector queries.
pub(crate) trait Queryable {
    fn select(&self, selector: &str) -> Result<Option<Element>, wasm_bindgen::JsValue>;
    fn select_all(&self, selector: &str) -> Result<NodeList, wasm_bindgen::JsValue>;
}

impl Queryable for Document {
    fn select(&self, selector: &str) -> Result<Option<Element>, wasm_bindgen::JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, wasm_bindgen::JsValue> {
        self.query_selector_all(selector)
    }
}

impl Queryable for Element {
    fn select(&self, selector: &str) -> Result<Option<Element>, wasm_bindgen::JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, wasm_bindgen::JsValue> {
        self.query_selector_all(selector)
    }
}

/// First element matching `selector`, or `None` when absent or the selector is invalid.
pub(crate) fn query(root: &impl Queryable, selector: &str) -> Option<Element> {
    match root.select(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("selector {selector:?} rejected: {}", DomError::from(err));
            None
        }
    }
}

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(root: &impl Queryable, selector: &str) -> Vec<Element> {
    let list = match root.select_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("selector {selector:?} rejected: {}", DomError::from(err));
            return Vec::new();
        }
    };
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i)
            && let Ok(el) = node.dyn_into::<Element>()
        {
            out.push(el);
        }
    }
    out
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Current value of the form control with `id`; empty when the control is absent.
pub(crate) fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

/// Add or remove `class` on `el`.
pub(crate) fn set_class(el: &Element, class: &str, on: bool) -> Result<(), DomError> {
    if on {
        el.class_list().add_1(class)?;
    } else {
        el.class_list().remove_1(class)?;
    }
    Ok(())
}

/// Holds at most one pending timeout. Scheduling a new one drops, and so
/// cancels, the previous one.
#[derive(Default)]
pub(crate) struct TimerSlot {
    pending: std::cell::RefCell<Option<gloo_timers::callback::Timeout>>,
}

impl TimerSlot {
    pub(crate) fn schedule<F>(&self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let timeout = gloo_timers::callback::Timeout::new(delay_ms, callback);
        *self.pending.borrow_mut() = Some(timeout);
    }
}
