use super::*;

#[test]
fn starts_closed_with_bars_glyph() {
    let menu = MenuState::default();
    assert!(!menu.is_open());
    assert!(menu.glyph().contains("fa-bars"));
}

#[test]
fn toggle_opens_then_closes() {
    let mut menu = MenuState::default();
    assert!(menu.toggle());
    assert!(menu.glyph().contains("fa-times"));
    assert!(!menu.toggle());
    assert!(menu.glyph().contains("fa-bars"));
}

#[test]
fn close_forces_closed_from_any_state() {
    let mut menu = MenuState::default();
    menu.close();
    assert!(!menu.is_open());

    menu.toggle();
    menu.close();
    assert!(!menu.is_open());
    assert_eq!(menu.glyph(), MENU_OPEN_GLYPH);
}
