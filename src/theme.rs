//! Light/dark theme switch.
//!
//! Reads the persisted [`ThemePreference`] once at startup, marks `<body>`
//! with the light-mode class when needed, and flips + persists on each click
//! of the theme toggle. Without a toggle control the whole feature is inert.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;

use crate::preference::{PreferenceBackend, PreferenceStore, ThemePreference};

/// Current visual mode plus the store it is persisted to.
#[derive(Debug)]
pub struct ThemeController<B> {
    store: PreferenceStore<B>,
    current: Cell<ThemePreference>,
}

impl<B: PreferenceBackend> ThemeController<B> {
    /// Load the persisted preference (default `Dark`).
    pub fn new(store: PreferenceStore<B>) -> Self {
        let current = Cell::new(store.get());
        Self { store, current }
    }

    pub fn current(&self) -> ThemePreference {
        self.current.get()
    }

    /// Whether the page needs restyling at startup. The markup ships in dark
    /// mode, so only a stored `Light` requires work.
    pub fn needs_startup_apply(&self) -> bool {
        self.current().is_light()
    }

    /// Flip the mode and persist it. A failed write is logged; the in-page
    /// mode still changes.
    pub fn toggle(&self) -> ThemePreference {
        let next = self.current().toggled();
        self.current.set(next);
        if let Err(err) = self.store.set(next) {
            log::warn!("theme preference not saved: {err}");
        }
        next
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &PreferenceStore<B> {
        &self.store
    }
}

#[cfg(feature = "hydrate")]
pub use browser::attach;

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use web_sys::{Document, Element};

    use super::ThemeController;
    use crate::config::ThemeConfig;
    use crate::dom;
    use crate::error::{self, DomError};
    use crate::preference::{LocalStorageBackend, PreferenceStore, ThemePreference};

    /// Wire the theme toggle found in `document`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if restyling or listener registration fails.
    pub fn attach(document: &Document, config: &ThemeConfig) -> Result<(), DomError> {
        let Some(toggle) = dom::query(document, &config.toggle_selector) else {
            return Ok(());
        };
        let Some(body) = document.body() else {
            return Ok(());
        };

        let store = PreferenceStore::new(LocalStorageBackend, config.storage_key.as_str());
        let controller = Rc::new(ThemeController::new(store));
        if controller.needs_startup_apply() {
            render(&body, &toggle, &config.light_class, controller.current())?;
        }

        let light_class = config.light_class.clone();
        let toggle_for_click = toggle.clone();
        dom::listen(&toggle, "click", move |_| {
            let next = controller.toggle();
            error::report("theme toggle", render(&body, &toggle_for_click, &light_class, next));
        })
    }

    fn render(body: &Element, toggle: &Element, light_class: &str, mode: ThemePreference) -> Result<(), DomError> {
        dom::set_class(body, light_class, mode.is_light())?;
        toggle.set_inner_html(mode.glyph());
        Ok(())
    }
}
