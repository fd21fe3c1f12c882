//! Error types for browser glue and preference persistence.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here ever reaches the user. Controllers stop at the handler
//! boundary: a failed JavaScript call is logged at `warn` and dropped, and
//! a missing element is not an error at all.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference write rejected: {0}")]
    Rejected(String),
}

/// Log a glue failure and swallow it.
#[cfg(feature = "hydrate")]
pub(crate) fn report(context: &str, result: Result<(), DomError>) {
    if let Err(err) = result {
        log::warn!("{context}: {err}");
    }
}
