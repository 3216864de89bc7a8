//! Preference context for descendant components.
//!
//! Readers get a plain [`Preferences`] value; writers go through
//! [`PreferenceActions`]. Both are provided by [`App`](crate::App).

use dioxus::prelude::*;
use store::Preferences;

/// Dispatch handle for the two preference toggles.
#[derive(Clone, Copy, PartialEq)]
pub struct PreferenceActions {
    pub toggle_locale: Callback<()>,
    pub toggle_theme: Callback<()>,
}

/// Current preferences. Re-renders the caller when they change.
pub fn use_preferences() -> Preferences {
    let prefs = use_context::<Signal<Preferences>>();
    prefs()
}

pub fn use_preference_actions() -> PreferenceActions {
    use_context::<PreferenceActions>()
}
