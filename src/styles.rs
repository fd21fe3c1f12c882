//! Stylesheet appended to `<head>` at page-ready.
//!
//! Holds the reveal keyframes, the service-card hover border sweep, and the
//! success/error colour themes for both feedback regions. Selectors come from
//! the active [`SiteConfig`] so renamed hooks keep their styling.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

use crate::config::SiteConfig;

const KEYFRAMES: &str = "
@keyframes fadeInUp {
    from {
        opacity: 0;
        transform: translateY(30px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

@keyframes border-circle {
    0% {
        transform: translateX(-100%);
    }
    25% {
        transform: translateX(100%) translateY(0);
    }
    50% {
        transform: translateX(100%) translateY(calc(100% - 3px));
    }
    75% {
        transform: translateX(-100%) translateY(calc(100% - 3px));
    }
    100% {
        transform: translateX(-100%) translateY(0);
    }
}
";

const SUCCESS_RULES: &str = "
    color: #00d4aa;
    background-color: rgba(0, 212, 170, 0.1);
    border: 1px solid rgba(0, 212, 170, 0.3);
    padding: 10px;
    border-radius: 4px;
    margin-top: 15px;
";

const ERROR_RULES: &str = "
    color: #ff6b35;
    background-color: rgba(255, 107, 53, 0.1);
    border: 1px solid rgba(255, 107, 53, 0.3);
    padding: 10px;
    border-radius: 4px;
    margin-top: 15px;
";

/// Stylesheet text for `config`.
#[must_use]
pub fn stylesheet(config: &SiteConfig) -> String {
    let revealed = &config.reveal.revealed_class;
    let hover = suffixed(&config.cards.card_selector, ":hover::before");
    let contact = &config.contact.feedback_id;
    let newsletter = &config.newsletter.feedback_id;

    format!(
        "{KEYFRAMES}
.{revealed} {{
    animation: fadeInUp 0.8s ease forwards;
}}

{hover} {{
    animation: border-circle 2s linear infinite;
}}

#{contact}.success,
#{newsletter}.success {{{SUCCESS_RULES}}}

#{contact}.error,
#{newsletter}.error {{{ERROR_RULES}}}
"
    )
}

/// Append `suffix` to every selector in a comma-separated group.
fn suffixed(group: &str, suffix: &str) -> String {
    group
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| format!("{part}{suffix}"))
        .collect::<Vec<_>>()
        .join(",\n")
}
