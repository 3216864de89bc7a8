//! # Preference models
//!
//! The two user-facing preferences the shell persists, plus the
//! [`Preferences`] value that bundles them.
//!
//! | Type | Stored as | Default |
//! |------|-----------|---------|
//! | [`Locale`] | `"id"` / `"en"` under [`LOCALE_KEY`] | `"id"` |
//! | [`Theme`] | `"light"` / `"dark"` under [`THEME_KEY`] | `"light"` |
//!
//! [`Preferences::load`] reads both keys from a [`PreferenceStore`];
//! unrecognised stored values fall back to the default. The toggle methods
//! flip a value and write it back immediately, so the store and the
//! in-memory value never disagree after a toggle returns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::prefs::{PreferenceStore, LOCALE_KEY, THEME_KEY};

/// UI language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Id,
    En,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Id => "id",
            Locale::En => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::Id => Locale::En,
            Locale::En => Locale::Id,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Locale::Id),
            "en" => Ok(Locale::En),
            other => Err(format!("Unknown locale: {other}")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour theme, mirrored to the document's `data-theme` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {other}")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plain preference value shared with descendant components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub locale: Locale,
    pub theme: Theme,
}

impl Preferences {
    /// Load both preferences, defaulting missing or unknown values.
    pub fn load(store: &impl PreferenceStore) -> Self {
        Self {
            locale: read_or_default(store, LOCALE_KEY),
            theme: read_or_default(store, THEME_KEY),
        }
    }

    /// Flip the locale and persist it. Returns the new locale.
    pub fn toggle_locale(&mut self, store: &impl PreferenceStore) -> Locale {
        self.locale = self.locale.toggled();
        store.set(LOCALE_KEY, self.locale.as_str());
        self.locale
    }

    /// Flip the theme and persist it. Returns the new theme.
    pub fn toggle_theme(&mut self, store: &impl PreferenceStore) -> Theme {
        self.theme = self.theme.toggled();
        store.set(THEME_KEY, self.theme.as_str());
        self.theme
    }
}

fn read_or_default<T>(store: &impl PreferenceStore, key: &str) -> T
where
    T: FromStr<Err = String> + Default,
{
    match store.get(key) {
        Some(raw) => raw.parse().unwrap_or_else(|e: String| {
            tracing::warn!("Ignoring stored {key}: {e}");
            T::default()
        }),
        None => T::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_defaults_when_store_empty() {
        let prefs = Preferences::load(&MemoryStore::new());
        assert_eq!(prefs.locale, Locale::Id);
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn test_load_persisted_values() {
        let store = MemoryStore::with_values([("locale", "en"), ("theme", "dark")]);
        let prefs = Preferences::load(&store);
        assert_eq!(prefs.locale, Locale::En);
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn test_unknown_value_falls_back() {
        let store = MemoryStore::with_values([("locale", "fr"), ("theme", "sepia")]);
        assert_eq!(Preferences::load(&store), Preferences::default());
    }

    #[test]
    fn test_locale_alternates_and_persists() {
        let store = MemoryStore::with_values([("locale", "en")]);
        let mut prefs = Preferences::load(&store);

        let mut expected = Locale::En;
        for _ in 0..5 {
            expected = expected.toggled();
            assert_eq!(prefs.toggle_locale(&store), expected);
            assert_eq!(store.get("locale").as_deref(), Some(expected.as_str()));
        }
        assert_eq!(prefs.locale, Locale::Id);
    }

    #[test]
    fn test_theme_alternates_and_persists() {
        let store = MemoryStore::new();
        let mut prefs = Preferences::load(&store);

        assert_eq!(prefs.toggle_theme(&store), Theme::Dark);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(prefs.toggle_theme(&store), Theme::Light);
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        // Locale untouched by theme toggles
        assert!(store.get("locale").is_none());
    }

    #[test]
    fn test_string_forms() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert!("EN".parse::<Locale>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
