//! Scroll-triggered fade-in.
//!
//! Cards and feature blocks receive the revealed class the first time the
//! observer reports them as intersecting. The observer's own threshold
//! decides when a report is delivered, so the core does not second-guess the
//! ratio. The state is monotonic: once revealed, an element stays revealed
//! for the life of the page and later reports are ignored. Observation is
//! never torn down.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashMap;
use std::hash::Hash;

/// Per-element reveal flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    #[must_use]
    pub fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Feed one observer report. Returns `true` only on the transition to revealed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Reveal flags for a fixed set of observed elements.
#[derive(Clone, Debug)]
pub struct RevealTracker<K> {
    states: HashMap<K, RevealState>,
}

impl<K> Default for RevealTracker<K> {
    fn default() -> Self {
        Self { states: HashMap::new() }
    }
}

impl<K: Eq + Hash> RevealTracker<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a report for `key`; `true` when the element should be revealed now.
    pub fn observe(&mut self, key: K, intersecting: bool) -> bool {
        self.states.entry(key).or_default().observe(intersecting)
    }

    #[must_use]
    pub fn is_revealed(&self, key: &K) -> bool {
        self.states.get(key).is_some_and(|s| s.is_revealed())
    }
}

#[cfg(feature = "hydrate")]
pub use browser::attach;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use js_sys::Array;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::RevealTracker;
    use crate::config::RevealConfig;
    use crate::dom;
    use crate::error::{self, DomError};

    /// Observe every reveal target in `document`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if the observer cannot be constructed.
    pub fn attach(document: &Document, config: &RevealConfig) -> Result<(), DomError> {
        let targets = Rc::new(dom::query_all(document, &config.selector));
        if targets.is_empty() {
            return Ok(());
        }

        let tracker = RefCell::new(RevealTracker::<usize>::new());
        let revealed_class = config.revealed_class.clone();
        let observed = Rc::clone(&targets);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(index) = observed.iter().position(|el| *el == target) else {
                    continue;
                };
                if tracker.borrow_mut().observe(index, entry.is_intersecting()) {
                    error::report("reveal", dom::set_class(&target, &revealed_class, true));
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        callback.forget();

        for el in targets.iter() {
            observer.observe(el);
        }
        log::debug!("observing {} reveal targets", targets.len());
        Ok(())
    }
}
