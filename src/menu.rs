//! Mobile navigation menu toggle.
//!
//! The toggle control flips the link panel open/closed and swaps its icon;
//! any link inside the panel closes it again. Both hooks must exist or the
//! feature stays inert.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::consts::{MENU_CLOSE_GLYPH, MENU_OPEN_GLYPH};

/// Whether the navigation panel is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the panel; returns the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Icon for the toggle: a close glyph while open, the bars glyph otherwise.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        if self.open { MENU_CLOSE_GLYPH } else { MENU_OPEN_GLYPH }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::attach;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::Cell;
    use std::rc::Rc;

    use web_sys::{Document, Element};

    use super::MenuState;
    use crate::config::MenuConfig;
    use crate::dom;
    use crate::error::{self, DomError};

    /// Wire the menu toggle and its panel links.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if a listener cannot be registered.
    pub fn attach(document: &Document, config: &MenuConfig) -> Result<(), DomError> {
        let (Some(toggle), Some(panel)) = (
            dom::query(document, &config.toggle_selector),
            dom::query(document, &config.links_selector),
        ) else {
            return Ok(());
        };

        let state = Rc::new(Cell::new(MenuState::default()));

        {
            let state = Rc::clone(&state);
            let toggle_el = toggle.clone();
            let panel = panel.clone();
            let open_class = config.open_class.clone();
            dom::listen(&toggle, "click", move |_| {
                let mut menu = state.get();
                menu.toggle();
                state.set(menu);
                error::report("menu toggle", render(&toggle_el, &panel, &open_class, menu));
            })?;
        }

        for link in dom::query_all(&panel, "a") {
            let state = Rc::clone(&state);
            let toggle = toggle.clone();
            let panel = panel.clone();
            let open_class = config.open_class.clone();
            dom::listen(&link, "click", move |_| {
                let mut menu = state.get();
                menu.close();
                state.set(menu);
                error::report("menu close", render(&toggle, &panel, &open_class, menu));
            })?;
        }
        Ok(())
    }

    fn render(toggle: &Element, panel: &Element, open_class: &str, menu: MenuState) -> Result<(), DomError> {
        dom::set_class(panel, open_class, menu.is_open())?;
        toggle.set_inner_html(menu.glyph());
        Ok(())
    }
}
