//! Shared constants: DOM hooks, glyph markup, timings.

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` slot holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Theme ───────────────────────────────────────────────────────

pub const THEME_TOGGLE_SELECTOR: &str = ".theme-toggle";
/// Class placed on `<body>` while the light visual mode is active.
pub const LIGHT_MODE_CLASS: &str = "light-mode";
pub const SUN_GLYPH: &str = r#"<i class="fas fa-sun"></i>"#;
pub const MOON_GLYPH: &str = r#"<i class="fas fa-moon"></i>"#;

// ── Navigation menu ─────────────────────────────────────────────

pub const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
/// Class placed on the link panel while it is shown.
pub const NAV_OPEN_CLASS: &str = "active";
pub const MENU_OPEN_GLYPH: &str = r#"<i class="fas fa-bars"></i>"#;
pub const MENU_CLOSE_GLYPH: &str = r#"<i class="fas fa-times"></i>"#;

// ── Contact form ────────────────────────────────────────────────

pub const CONTACT_FORM_ID: &str = "contactForm";
pub const CONTACT_FEEDBACK_ID: &str = "formFeedback";
pub const CONTACT_NAME_ID: &str = "name";
pub const CONTACT_EMAIL_ID: &str = "email";
pub const CONTACT_PHONE_ID: &str = "phone";
pub const CONTACT_DEVICE_ID: &str = "device";
pub const CONTACT_ISSUE_ID: &str = "issue";
pub const CONTACT_FEEDBACK_MS: u32 = 5_000;

// ── Newsletter form ─────────────────────────────────────────────

pub const NEWSLETTER_FORM_ID: &str = "newsletterForm";
pub const NEWSLETTER_EMAIL_ID: &str = "newsletterEmail";
pub const NEWSLETTER_FEEDBACK_ID: &str = "newsletterFeedback";
pub const NEWSLETTER_BUTTON_SELECTOR: &str = ".newsletter-btn";
pub const NEWSLETTER_FEEDBACK_MS: u32 = 4_000;
pub const NEWSLETTER_BUTTON_FLASH_MS: u32 = 3_000;
pub const NEWSLETTER_CONFIRM_LABEL: &str = r#"<i class="fas fa-check"></i> Subscribed!"#;
/// Teal used for the submit button while it shows the confirmation label.
pub const NEWSLETTER_CONFIRM_BACKGROUND: &str = "#00d4aa";

// ── Cards and reveal ────────────────────────────────────────────

pub const CARD_SELECTOR: &str = ".service-card";
pub const CARD_ANCHOR_SELECTOR: &str = "#contact";
pub const REVEAL_SELECTOR: &str = ".service-card, .review-card, .detail-card, .feature";
pub const REVEALED_CLASS: &str = "fade-in";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Bootstrap ───────────────────────────────────────────────────

pub const FOOTER_YEAR_ID: &str = "currentYear";
/// Inline JSON block that may override [`crate::config::SiteConfig`] defaults.
pub const CONFIG_SCRIPT_ID: &str = "site-enhance-config";
