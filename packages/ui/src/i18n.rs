//! Indonesian/English strings.

use dioxus::prelude::*;
use store::Locale;

use crate::preferences::use_preferences;

/// Pick the string for `locale`.
pub fn tr(locale: Locale, id: &'static str, en: &'static str) -> &'static str {
    match locale {
        Locale::Id => id,
        Locale::En => en,
    }
}

/// Header title shown on every page.
pub fn app_title(locale: Locale) -> &'static str {
    tr(locale, "Aplikasi Catatan", "Note App")
}

/// Inline text in the current locale.
#[component]
pub fn Lang(id: &'static str, en: &'static str) -> Element {
    let locale = use_preferences().locale;
    rsx! { "{tr(locale, id, en)}" }
}
