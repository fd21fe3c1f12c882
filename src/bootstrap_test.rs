use super::*;

#[test]
fn only_loading_defers_page_ready() {
    assert!(!Readiness::Loading.is_ready());
    assert!(Readiness::Interactive.is_ready());
    assert!(Readiness::Complete.is_ready());
}

#[test]
fn ready_state_strings_map_to_readiness() {
    assert_eq!(Readiness::from_state("loading"), Readiness::Loading);
    assert_eq!(Readiness::from_state("interactive"), Readiness::Interactive);
    assert_eq!(Readiness::from_state("complete"), Readiness::Complete);
    assert!(Readiness::from_state("").is_ready());
}

#[test]
fn missing_or_blank_override_uses_defaults() {
    assert_eq!(resolve_config(None), SiteConfig::default());
    assert_eq!(resolve_config(Some("   \n ")), SiteConfig::default());
}

#[test]
fn valid_override_is_applied() {
    let config = resolve_config(Some(r##"{ "cards": { "anchorSelector": "#book" } }"##));
    assert_eq!(config.cards.anchor_selector, "#book");
    assert_eq!(config.cards.card_selector, ".service-card");
}

#[test]
fn invalid_override_falls_back_to_defaults() {
    assert_eq!(resolve_config(Some("{ broken")), SiteConfig::default());
}
