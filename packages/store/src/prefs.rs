//! # Preference store: small durable key/value settings
//!
//! [`PreferenceStore`] is the seam between the UI shell and whatever keeps
//! preferences alive across restarts. The shell never reaches for a global:
//! a store is constructed by the platform layer and handed in explicitly.
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`crate::MemoryStore`] | tests, ephemeral sessions |
//! | [`crate::FileStore`] | desktop (TOML file under the data dir) |
//! | `LocalStorage` | web (`window.localStorage`, `web` feature) |
//!
//! Both operations are synchronous. Backends swallow I/O failures (a `get`
//! returns `None`, a `set` is dropped) and log them instead of propagating,
//! so a broken store degrades to defaults rather than breaking the UI.

/// Well-known key for the UI locale.
pub const LOCALE_KEY: &str = "locale";
/// Well-known key for the colour theme.
pub const THEME_KEY: &str = "theme";
/// Well-known key for the API access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Synchronous string key/value store for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}
