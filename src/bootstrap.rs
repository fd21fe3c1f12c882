//! Module entry point and page-ready sequencing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The menu and both forms are wired as soon as the module starts. The theme
//! switch, card navigation, reveal animation, footer year, and injected
//! stylesheet wait for `DOMContentLoaded`, or run at once when the document
//! has already finished parsing.
//!
//! ERROR HANDLING
//! ==============
//! Each feature is wired independently; a failure in one is logged and the
//! rest still attach.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::config::SiteConfig;

/// Parse stage of the document when the module starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    Loading,
    Interactive,
    Complete,
}

impl Readiness {
    /// Map `document.readyState`. Unknown values count as complete.
    #[must_use]
    pub fn from_state(state: &str) -> Self {
        match state {
            "loading" => Self::Loading,
            "interactive" => Self::Interactive,
            _ => Self::Complete,
        }
    }

    /// Whether `DOMContentLoaded` has already fired.
    #[must_use]
    pub fn is_ready(self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// Config from an optional inline JSON override. Invalid JSON is logged and
/// the defaults are used.
#[must_use]
pub fn resolve_config(raw: Option<&str>) -> SiteConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(raw) {
        Ok(config) => {
            log::debug!("site config override applied");
            config
        }
        Err(err) => {
            log::warn!("ignoring invalid site config: {err}");
            SiteConfig::default()
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::start;

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::Document;

    use super::{Readiness, resolve_config};
    use crate::config::SiteConfig;
    use crate::consts::CONFIG_SCRIPT_ID;
    use crate::error::{self, DomError};
    use crate::styles::stylesheet;
    use crate::{cards, contact, dom, menu, newsletter, reveal, theme};

    /// WASM entry point.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
        if let Err(err) = console_log::init_with_level(level) {
            log::debug!("logger already installed: {err}");
        }
        error::report("startup", run());
    }

    fn run() -> Result<(), DomError> {
        let document = dom::document()?;
        let config = Rc::new(load_config(&document));

        error::report("menu", menu::attach(&document, &config.menu));
        error::report("contact form", contact::attach(&document, &config.contact));
        error::report("newsletter form", newsletter::attach(&document, &config.newsletter));

        if readiness(&document).is_ready() {
            page_ready(&document, &config);
            return Ok(());
        }
        let doc = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_| page_ready(&doc, &config))
    }

    fn page_ready(document: &Document, config: &SiteConfig) {
        set_footer_year(document, &config.footer_year_id.0);
        error::report("theme toggle", theme::attach(document, &config.theme));
        error::report("service cards", cards::attach(document, &config.cards));
        error::report("reveal animation", reveal::attach(document, &config.reveal));
        error::report("stylesheet", inject_styles(document, config));
        log::debug!("page enhancements ready");
    }

    fn readiness(document: &Document) -> Readiness {
        Readiness::from_state(&document.ready_state())
    }

    fn load_config(document: &Document) -> SiteConfig {
        let raw = document
            .get_element_by_id(CONFIG_SCRIPT_ID)
            .and_then(|el| el.text_content());
        resolve_config(raw.as_deref())
    }

    fn set_footer_year(document: &Document, id: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            let year = js_sys::Date::new_0().get_full_year();
            el.set_text_content(Some(&year.to_string()));
        }
    }

    fn inject_styles(document: &Document, config: &SiteConfig) -> Result<(), DomError> {
        let Some(head) = document.head() else {
            return Ok(());
        };
        let style = document.create_element("style")?;
        style.set_text_content(Some(&stylesheet(config)));
        head.append_child(&style)?;
        Ok(())
    }
}
