//! Clickable service cards.
//!
//! Clicking a card anywhere except on a link nested inside it smoothly
//! scrolls to the contact section. Clicks inside a link are left to the link.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions};

use crate::config::CardsConfig;
use crate::dom;
use crate::error::DomError;

/// Wire every card in `document`.
///
/// # Errors
///
/// Returns a [`DomError`] if a listener cannot be registered.
pub fn attach(document: &Document, config: &CardsConfig) -> Result<(), DomError> {
    for card in dom::query_all(document, &config.card_selector) {
        let document = document.clone();
        let anchor_selector = config.anchor_selector.clone();
        dom::listen(&card, "click", move |event| {
            if lands_in_link(&event) {
                return;
            }
            if let Some(anchor) = dom::query(&document, &anchor_selector) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                anchor.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(())
}

fn lands_in_link(event: &Event) -> bool {
    let Some(target) = event.target() else {
        return false;
    };
    let Some(el) = target.dyn_ref::<Element>() else {
        return false;
    };
    matches!(el.closest("a"), Ok(Some(_)))
}
