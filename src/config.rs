//! Page hook configuration.
//!
//! DESIGN
//! ======
//! Every selector, id, and timing the controllers depend on lives here so a
//! page can rename a hook without rebuilding the module. Overrides arrive as
//! an inline JSON block; any key left out keeps its default from
//! [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;

/// Full set of DOM hooks and durations used by the controllers.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub menu: MenuConfig,
    pub contact: ContactConfig,
    pub newsletter: NewsletterConfig,
    pub cards: CardsConfig,
    pub reveal: RevealConfig,
    pub footer_year_id: FooterYearId,
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override.
    ///
    /// # Errors
    ///
    /// Returns the serde error if `raw` is not valid JSON for this shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub storage_key: String,
    pub toggle_selector: String,
    pub light_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            toggle_selector: consts::THEME_TOGGLE_SELECTOR.to_owned(),
            light_class: consts::LIGHT_MODE_CLASS.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuConfig {
    pub toggle_selector: String,
    pub links_selector: String,
    pub open_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toggle_selector: consts::MENU_TOGGLE_SELECTOR.to_owned(),
            links_selector: consts::NAV_LINKS_SELECTOR.to_owned(),
            open_class: consts::NAV_OPEN_CLASS.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactConfig {
    pub form_id: String,
    pub feedback_id: String,
    pub name_id: String,
    pub email_id: String,
    pub phone_id: String,
    pub device_id: String,
    pub issue_id: String,
    pub feedback_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: consts::CONTACT_FORM_ID.to_owned(),
            feedback_id: consts::CONTACT_FEEDBACK_ID.to_owned(),
            name_id: consts::CONTACT_NAME_ID.to_owned(),
            email_id: consts::CONTACT_EMAIL_ID.to_owned(),
            phone_id: consts::CONTACT_PHONE_ID.to_owned(),
            device_id: consts::CONTACT_DEVICE_ID.to_owned(),
            issue_id: consts::CONTACT_ISSUE_ID.to_owned(),
            feedback_ms: consts::CONTACT_FEEDBACK_MS,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsletterConfig {
    pub form_id: String,
    pub email_id: String,
    pub feedback_id: String,
    pub button_selector: String,
    pub feedback_ms: u32,
    pub button_flash_ms: u32,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            form_id: consts::NEWSLETTER_FORM_ID.to_owned(),
            email_id: consts::NEWSLETTER_EMAIL_ID.to_owned(),
            feedback_id: consts::NEWSLETTER_FEEDBACK_ID.to_owned(),
            button_selector: consts::NEWSLETTER_BUTTON_SELECTOR.to_owned(),
            feedback_ms: consts::NEWSLETTER_FEEDBACK_MS,
            button_flash_ms: consts::NEWSLETTER_BUTTON_FLASH_MS,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CardsConfig {
    pub card_selector: String,
    pub anchor_selector: String,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            card_selector: consts::CARD_SELECTOR.to_owned(),
            anchor_selector: consts::CARD_ANCHOR_SELECTOR.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub selector: String,
    pub revealed_class: String,
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: consts::REVEAL_SELECTOR.to_owned(),
            revealed_class: consts::REVEALED_CLASS.to_owned(),
            threshold: consts::REVEAL_THRESHOLD,
            root_margin: consts::REVEAL_ROOT_MARGIN.to_owned(),
        }
    }
}

/// Id of the footer element that receives the current year.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FooterYearId(pub String);

impl Default for FooterYearId {
    fn default() -> Self {
        Self(consts::FOOTER_YEAR_ID.to_owned())
    }
}
