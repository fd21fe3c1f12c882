//! Optional human-verification widget.
//!
//! The contact form consults a [`Verifier`] when one is on the page. In the
//! browser that is the global `grecaptcha` object, looked up at submit time
//! because the widget script loads asynchronously.

/// A bot-check the visitor must complete before a form is accepted.
pub trait Verifier {
    /// Token for the completed challenge; empty while unverified.
    fn response(&self) -> String;

    /// Clear the challenge so it can be solved again.
    fn reset(&self);

    fn is_verified(&self) -> bool {
        !self.response().is_empty()
    }
}

#[cfg(feature = "hydrate")]
pub use browser::Recaptcha;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::prelude::*;

    use super::Verifier;
    use crate::error::DomError;

    #[wasm_bindgen]
    extern "C" {
        type Grecaptcha;

        #[wasm_bindgen(method, catch, js_name = getResponse)]
        fn get_response(this: &Grecaptcha) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(method, catch, js_name = reset)]
        fn reset_widget(this: &Grecaptcha) -> Result<(), JsValue>;
    }

    /// Handle to `window.grecaptcha`.
    pub struct Recaptcha {
        widget: Grecaptcha,
    }

    impl Recaptcha {
        /// The widget if its script has loaded, else `None`.
        pub fn detect() -> Option<Self> {
            let window = web_sys::window()?;
            let value = match js_sys::Reflect::get(&window, &JsValue::from_str("grecaptcha")) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("grecaptcha lookup failed: {}", DomError::from(err));
                    return None;
                }
            };
            if value.is_undefined() || value.is_null() {
                return None;
            }
            Some(Self { widget: value.unchecked_into() })
        }
    }

    impl Verifier for Recaptcha {
        fn response(&self) -> String {
            match self.widget.get_response() {
                Ok(token) => token.as_string().unwrap_or_default(),
                Err(err) => {
                    log::warn!("grecaptcha.getResponse failed: {}", DomError::from(err));
                    String::new()
                }
            }
        }

        fn reset(&self) {
            if let Err(err) = self.widget.reset_widget() {
                log::warn!("grecaptcha.reset failed: {}", DomError::from(err));
            }
        }
    }
}
