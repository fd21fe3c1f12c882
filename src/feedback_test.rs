use super::*;

#[test]
fn kind_maps_to_single_class() {
    assert_eq!(FeedbackKind::Success.css_class(), "success");
    assert_eq!(FeedbackKind::Error.css_class(), "error");
}

#[test]
fn new_region_renders_nothing() {
    let region = FeedbackRegion::new();
    assert!(region.current().is_none());
    assert_eq!(region.text(), "");
    assert_eq!(region.class_name(), "");
}

#[test]
fn show_renders_text_and_class() {
    let mut region = FeedbackRegion::new();
    region.show(FeedbackMessage::error("Please enter a valid email address."));
    assert_eq!(region.text(), "Please enter a valid email address.");
    assert_eq!(region.class_name(), "error");
}

#[test]
fn expiry_clears_text_and_class() {
    let mut region = FeedbackRegion::new();
    let ticket = region.show(FeedbackMessage::success("done"));
    assert!(region.expire(ticket));
    assert_eq!(region.text(), "");
    assert_eq!(region.class_name(), "");
}

#[test]
fn newer_message_replaces_class() {
    let mut region = FeedbackRegion::new();
    region.show(FeedbackMessage::error("bad"));
    region.show(FeedbackMessage::success("good"));
    assert_eq!(region.class_name(), "success");
    assert_eq!(region.text(), "good");
}

#[test]
fn stale_ticket_does_not_clear_newer_message() {
    let mut region = FeedbackRegion::new();
    let first = region.show(FeedbackMessage::error("bad"));
    let second = region.show(FeedbackMessage::success("good"));

    assert!(!region.expire(first));
    assert_eq!(region.text(), "good");

    assert!(region.expire(second));
    assert_eq!(region.text(), "");
}

#[test]
fn expiring_twice_is_harmless() {
    let mut region = FeedbackRegion::new();
    let ticket = region.show(FeedbackMessage::success("done"));
    assert!(region.expire(ticket));
    assert!(!region.expire(ticket));
    assert!(region.current().is_none());
}
