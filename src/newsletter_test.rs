use super::*;
use crate::feedback::FeedbackKind;

// =============================================================
// Email check
// =============================================================

#[test]
fn address_with_at_sign_is_accepted() {
    assert_eq!(review("a@b.com"), Ok(()));
    assert_eq!(review("@"), Ok(()));
}

#[test]
fn empty_or_at_less_address_is_rejected() {
    assert_eq!(review(""), Err(NewsletterRejection::InvalidEmail));
    assert_eq!(review("not-an-email"), Err(NewsletterRejection::InvalidEmail));
}

#[test]
fn success_outcome_clears_and_flashes() {
    let outcome = submit("a@b.com");
    assert_eq!(outcome.feedback.kind, FeedbackKind::Success);
    assert_eq!(outcome.feedback.text, SUBSCRIBED_MESSAGE);
    assert!(outcome.clear_form);
    assert!(outcome.flash_button);
}

#[test]
fn failure_outcome_leaves_form_and_button_alone() {
    let outcome = submit("not-an-email");
    assert_eq!(outcome.feedback.kind, FeedbackKind::Error);
    assert_eq!(outcome.feedback.text, "Please enter a valid email address.");
    assert!(!outcome.clear_form);
    assert!(!outcome.flash_button);
}

// =============================================================
// ButtonFlash
// =============================================================

#[test]
fn flash_restores_original_label() {
    let mut flash = ButtonFlash::new();
    let ticket = flash.begin("Subscribe");
    assert_eq!(flash.finish(ticket).as_deref(), Some("Subscribe"));
    let next = flash.begin("Join");
    assert_eq!(flash.finish(next).as_deref(), Some("Join"));
}

#[test]
fn overlapping_flash_keeps_first_label() {
    let mut flash = ButtonFlash::new();
    let first = flash.begin("Subscribe");
    let second = flash.begin(crate::consts::NEWSLETTER_CONFIRM_LABEL);

    assert_eq!(flash.finish(first), None);
    assert_eq!(flash.finish(second).as_deref(), Some("Subscribe"));
}

#[test]
fn finishing_twice_restores_once() {
    let mut flash = ButtonFlash::new();
    let ticket = flash.begin("Join");
    assert!(flash.finish(ticket).is_some());
    assert!(flash.finish(ticket).is_none());
}
