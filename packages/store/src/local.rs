//! # Browser `localStorage` preference store
//!
//! [`LocalStorage`] is the [`PreferenceStore`] used on the **web platform**.
//! Values live in `window.localStorage` under the plain keys (`"locale"`,
//! `"theme"`, `"accessToken"`), so they survive reloads and are shared by
//! every tab of the origin.
//!
//! The struct holds no handle: `web_sys::Storage` is not `Send` and is cheap
//! to look up, so each call fetches it from the window. When storage is
//! unavailable (private mode, sandboxed iframe) reads return `None` and
//! writes are logged and dropped.

use crate::prefs::PreferenceStore;

/// `window.localStorage`-backed PreferenceStore.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable; dropping {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage rejected write of {key}");
        }
    }
}
