//! Newsletter sign-up form.
//!
//! The email check is deliberately weak: non-empty and containing `@`. A
//! successful sign-up also flashes the submit button with a confirmation
//! label for a few seconds, on a timer independent of the feedback clear.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

use crate::feedback::{ClearTicket, FeedbackMessage};

pub const SUBSCRIBED_MESSAGE: &str = "🎉 Thanks! You've subscribed to our tech newsletter.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NewsletterRejection {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// # Errors
///
/// [`NewsletterRejection::InvalidEmail`] when `email` is empty or lacks `@`.
pub fn review(email: &str) -> Result<(), NewsletterRejection> {
    if email.is_empty() || !email.contains('@') {
        return Err(NewsletterRejection::InvalidEmail);
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsletterOutcome {
    pub feedback: FeedbackMessage,
    pub clear_form: bool,
    pub flash_button: bool,
}

pub fn submit(email: &str) -> NewsletterOutcome {
    match review(email) {
        Ok(()) => NewsletterOutcome {
            feedback: FeedbackMessage::success(SUBSCRIBED_MESSAGE),
            clear_form: true,
            flash_button: true,
        },
        Err(rejection) => NewsletterOutcome {
            feedback: FeedbackMessage::error(rejection.to_string()),
            clear_form: false,
            flash_button: false,
        },
    }
}

/// Temporary confirmation state of the submit button.
///
/// The label captured when a flash begins is the one restored when it ends.
/// A flash that starts while one is already running keeps the first captured
/// label, so overlapping sign-ups never "restore" to the confirmation text.
#[derive(Clone, Debug, Default)]
pub struct ButtonFlash {
    original_label: Option<String>,
    generation: u64,
}

impl ButtonFlash {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or extend) a flash. `current_label` is the button's markup right now.
    pub fn begin(&mut self, current_label: &str) -> ClearTicket {
        if self.original_label.is_none() {
            self.original_label = Some(current_label.to_owned());
        }
        ClearTicket::next(&mut self.generation)
    }

    /// End the flash for `ticket`, yielding the label to restore. Stale
    /// tickets yield `None`.
    pub fn finish(&mut self, ticket: ClearTicket) -> Option<String> {
        if !ticket.is_current(self.generation) {
            return None;
        }
        self.original_label.take()
    }
}

#[cfg(feature = "hydrate")]
pub use browser::attach;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, HtmlFormElement};

    use super::{ButtonFlash, submit};
    use crate::config::NewsletterConfig;
    use crate::consts::{NEWSLETTER_CONFIRM_BACKGROUND, NEWSLETTER_CONFIRM_LABEL};
    use crate::dom::{self, TimerSlot};
    use crate::error::{self, DomError};
    use crate::feedback::FeedbackEmitter;

    struct ButtonFlasher {
        button: HtmlElement,
        delay_ms: u32,
        state: RefCell<ButtonFlash>,
        timer: TimerSlot,
    }

    impl ButtonFlasher {
        fn flash(self: &Rc<Self>) -> Result<(), DomError> {
            let ticket = self.state.borrow_mut().begin(&self.button.inner_html());
            self.button.set_inner_html(NEWSLETTER_CONFIRM_LABEL);
            self.button.style().set_property("background", NEWSLETTER_CONFIRM_BACKGROUND)?;

            let weak: Weak<Self> = Rc::downgrade(self);
            self.timer.schedule(self.delay_ms, move || {
                let Some(flasher) = weak.upgrade() else {
                    return;
                };
                let restored = flasher.state.borrow_mut().finish(ticket);
                if let Some(label) = restored {
                    flasher.button.set_inner_html(&label);
                    error::report("newsletter button revert", flasher.clear_background());
                }
            });
            Ok(())
        }

        fn clear_background(&self) -> Result<(), DomError> {
            self.button.style().set_property("background", "")?;
            Ok(())
        }
    }

    /// Wire the newsletter form's submit handler.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if the listener cannot be registered.
    pub fn attach(document: &Document, config: &NewsletterConfig) -> Result<(), DomError> {
        let Some(form) = document.get_element_by_id(&config.form_id) else {
            return Ok(());
        };
        let feedback = FeedbackEmitter::find(document, &config.feedback_id, config.feedback_ms);
        let flasher = match dom::query(&form, &config.button_selector).map(|el| el.dyn_into::<HtmlElement>()) {
            Some(Ok(button)) => Some(Rc::new(ButtonFlasher {
                button,
                delay_ms: config.button_flash_ms,
                state: RefCell::new(ButtonFlash::new()),
                timer: TimerSlot::default(),
            })),
            _ => None,
        };
        let document = document.clone();
        let email_id = config.email_id.clone();
        let form_el = form.clone();

        dom::listen(&form, "submit", move |event| {
            event.prevent_default();

            let outcome = submit(&dom::field_value(&document, &email_id));
            if let Some(feedback) = &feedback {
                feedback.show(outcome.feedback);
            }
            if outcome.clear_form
                && let Some(form) = form_el.dyn_ref::<HtmlFormElement>()
            {
                form.reset();
            }
            if outcome.flash_button
                && let Some(flasher) = &flasher
            {
                error::report("newsletter button flash", flasher.flash());
            }
        })
    }
}
