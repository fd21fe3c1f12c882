//! Repair request contact form.
//!
//! Submission is simulated: nothing leaves the browser. A visible bot-check,
//! when present, is consulted first and short-circuits everything else. Then
//! name, email, device, and issue must all be filled in. Phone is collected
//! but optional.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::feedback::FeedbackMessage;
use crate::verification::Verifier;

/// Field values read from the form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub device: String,
    pub issue: String,
}

impl ContactSubmission {
    fn has_required_fields(&self) -> bool {
        [&self.name, &self.email, &self.device, &self.issue]
            .iter()
            .all(|field| !field.is_empty())
    }

    /// Confirmation shown once the request is accepted.
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!(
            "Thanks, {}! Your {} repair request has been received. We'll contact you at {} soon.",
            self.name, self.device, self.email
        )
    }
}

/// Why a submission was turned away. `Display` is the visitor-facing text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactRejection {
    #[error("Please complete the reCAPTCHA verification.")]
    VerificationIncomplete,
    #[error("Please fill in all required fields.")]
    MissingFields,
}

/// Validate `submission`, checking the verifier first when one is present.
///
/// # Errors
///
/// [`ContactRejection::VerificationIncomplete`] when the verifier has no
/// response (field contents are not looked at), otherwise
/// [`ContactRejection::MissingFields`] when a required field is empty.
pub fn review(submission: &ContactSubmission, verifier: Option<&dyn Verifier>) -> Result<(), ContactRejection> {
    if verifier.is_some_and(|v| !v.is_verified()) {
        return Err(ContactRejection::VerificationIncomplete);
    }
    if !submission.has_required_fields() {
        return Err(ContactRejection::MissingFields);
    }
    Ok(())
}

/// What the page should do after a submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactOutcome {
    pub feedback: FeedbackMessage,
    /// Reset every form control. Only set on acceptance.
    pub clear_form: bool,
}

/// Handle one submit. On acceptance the verifier, if any, is reset.
pub fn submit(submission: &ContactSubmission, verifier: Option<&dyn Verifier>) -> ContactOutcome {
    match review(submission, verifier) {
        Ok(()) => {
            if let Some(verifier) = verifier {
                verifier.reset();
            }
            log::debug!("contact request accepted for device {:?}", submission.device);
            ContactOutcome {
                feedback: FeedbackMessage::success(submission.confirmation()),
                clear_form: true,
            }
        }
        Err(rejection) => ContactOutcome {
            feedback: FeedbackMessage::error(rejection.to_string()),
            clear_form: false,
        },
    }
}

#[cfg(feature = "hydrate")]
pub use browser::attach;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlFormElement};

    use super::{ContactSubmission, submit};
    use crate::config::ContactConfig;
    use crate::dom;
    use crate::error::DomError;
    use crate::feedback::FeedbackEmitter;
    use crate::verification::{Recaptcha, Verifier};

    /// Wire the contact form's submit handler.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if the listener cannot be registered.
    pub fn attach(document: &Document, config: &ContactConfig) -> Result<(), DomError> {
        let Some(form) = document.get_element_by_id(&config.form_id) else {
            return Ok(());
        };
        let feedback = FeedbackEmitter::find(document, &config.feedback_id, config.feedback_ms);
        let document = document.clone();
        let config = config.clone();
        let form_el = form.clone();

        dom::listen(&form, "submit", move |event| {
            event.prevent_default();

            let submission = ContactSubmission {
                name: dom::field_value(&document, &config.name_id),
                email: dom::field_value(&document, &config.email_id),
                phone: dom::field_value(&document, &config.phone_id),
                device: dom::field_value(&document, &config.device_id),
                issue: dom::field_value(&document, &config.issue_id),
            };
            let widget = Recaptcha::detect();
            let outcome = submit(&submission, widget.as_ref().map(|w| w as &dyn Verifier));

            if let Some(feedback) = &feedback {
                feedback.show(outcome.feedback);
            }
            if outcome.clear_form
                && let Some(form) = form_el.dyn_ref::<HtmlFormElement>()
            {
                form.reset();
            }
        })
    }
}
