use super::*;
use crate::error::StorageError;
use crate::preference::MemoryBackend;

fn controller_with(stored: Option<&str>) -> ThemeController<MemoryBackend> {
    let backend = match stored {
        Some(value) => MemoryBackend::with("theme", value),
        None => MemoryBackend::new(),
    };
    ThemeController::new(PreferenceStore::new(backend, "theme"))
}

#[test]
fn starts_dark_without_stored_value() {
    let controller = controller_with(None);
    assert_eq!(controller.current(), ThemePreference::Dark);
    assert!(!controller.needs_startup_apply());
}

#[test]
fn stored_light_applies_at_startup() {
    let controller = controller_with(Some("light"));
    assert_eq!(controller.current(), ThemePreference::Light);
    assert!(controller.needs_startup_apply());
}

#[test]
fn toggle_flips_and_persists() {
    let controller = controller_with(None);
    assert_eq!(controller.toggle(), ThemePreference::Light);
    assert_eq!(controller.current(), ThemePreference::Light);
    assert_eq!(controller.store().backend().value("theme").as_deref(), Some("light"));
}

#[test]
fn toggling_twice_restores_mode_and_storage() {
    let controller = controller_with(Some("dark"));
    controller.toggle();
    controller.toggle();
    assert_eq!(controller.current(), ThemePreference::Dark);
    assert_eq!(controller.store().get(), ThemePreference::Dark);
    assert_eq!(controller.store().backend().value("theme").as_deref(), Some("dark"));
}

#[test]
fn toggle_survives_rejected_write() {
    struct ReadOnly;
    impl PreferenceBackend for ReadOnly {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(Some("light".to_owned()))
        }
        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    let controller = ThemeController::new(PreferenceStore::new(ReadOnly, "theme"));
    assert_eq!(controller.current(), ThemePreference::Light);
    assert_eq!(controller.toggle(), ThemePreference::Dark);
    assert_eq!(controller.current(), ThemePreference::Dark);
}
