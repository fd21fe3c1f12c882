//! Persisted theme preference.
//!
//! DESIGN
//! ======
//! The preference is a single string slot (`"light"` | `"dark"`). Storage
//! sits behind [`PreferenceBackend`] so the browser build talks to
//! `localStorage` while tests use [`MemoryBackend`].
//!
//! TRADE-OFFS
//! ==========
//! Reads never fail from the caller's view: a missing, unreadable, or
//! unrecognised value resolves to the default (`Dark`). Writes do report
//! failure so the caller can log it, but the visual toggle proceeds anyway.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::consts::{MOON_GLYPH, SUN_GLYPH};
use crate::error::StorageError;

/// Visual mode the visitor last chose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// Stored string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but the two known strings is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        self == Self::Light
    }

    /// Icon markup shown on the theme toggle while this mode is active.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Light => SUN_GLYPH,
            Self::Dark => MOON_GLYPH,
        }
    }
}

/// Durable string key-value storage.
pub trait PreferenceBackend {
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the storage cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] when the value could not be persisted.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory backend for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with one slot.
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let backend = Self::new();
        backend.slots.borrow_mut().insert(key.to_owned(), value.to_owned());
        backend
    }

    /// Raw stored value for `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl PreferenceBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.value(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Typed access to the theme slot.
#[derive(Debug)]
pub struct PreferenceStore<B> {
    backend: B,
    key: String,
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    /// Stored preference, or `Dark` when absent or unreadable.
    pub fn get(&self) -> ThemePreference {
        match self.backend.read(&self.key) {
            Ok(Some(raw)) => ThemePreference::parse(&raw).unwrap_or_default(),
            Ok(None) => ThemePreference::default(),
            Err(err) => {
                log::debug!("theme preference read failed: {err}");
                ThemePreference::default()
            }
        }
    }

    /// Persist `value`.
    ///
    /// # Errors
    ///
    /// Propagates the backend's [`StorageError`].
    pub fn set(&self, value: ThemePreference) -> Result<(), StorageError> {
        self.backend.write(&self.key, value.as_str())
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }
}

/// `window.localStorage` backend.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageBackend;

#[cfg(feature = "hydrate")]
impl LocalStorageBackend {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) | Err(_) => Err(StorageError::Unavailable),
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Rejected(crate::error::DomError::from(err).to_string()))
    }
}
