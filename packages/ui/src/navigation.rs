//! Navigation bar for signed-in pages.

use dioxus::prelude::*;
use store::{Locale, Theme};

use crate::i18n::tr;
use crate::icons::{FaBoxArchive, FaLanguage, FaMoon, FaPlus, FaRightFromBracket, FaSun};
use crate::preferences::{use_preference_actions, use_preferences};
use crate::routes::AuthedRoute;
use crate::Icon;

/// Links to the note pages, the two preference toggles and the logout button.
///
/// The logout button shows `name`, the signed-in user's display name.
#[component]
pub fn Navigation(name: String, logout: EventHandler<()>) -> Element {
    let prefs = use_preferences();
    let actions = use_preference_actions();
    let locale = prefs.locale;

    let archive_label = tr(locale, "Arsip", "Archive");
    let add_label = tr(locale, "Tambah", "Add");
    // Each toggle names the value it switches to.
    let locale_label = match locale {
        Locale::Id => "EN",
        Locale::En => "ID",
    };
    let theme_title = match prefs.theme {
        Theme::Light => tr(locale, "Mode gelap", "Dark mode"),
        Theme::Dark => tr(locale, "Mode terang", "Light mode"),
    };
    let logout_title = tr(locale, "Keluar", "Logout");

    rsx! {
        nav {
            class: "navigation",
            ul {
                li {
                    Link {
                        to: AuthedRoute::Archive {},
                        Icon { icon: FaBoxArchive, width: 14, height: 14 }
                        span { "{archive_label}" }
                    }
                }
                li {
                    Link {
                        to: AuthedRoute::NoteAdd {},
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        span { "{add_label}" }
                    }
                }
                li {
                    button {
                        class: "toggle-locale",
                        title: "{locale_label}",
                        onclick: move |_| actions.toggle_locale.call(()),
                        Icon { icon: FaLanguage, width: 14, height: 14 }
                        span { "{locale_label}" }
                    }
                }
                li {
                    button {
                        class: "toggle-theme",
                        title: "{theme_title}",
                        onclick: move |_| actions.toggle_theme.call(()),
                        if prefs.theme == Theme::Light {
                            Icon { icon: FaMoon, width: 14, height: 14 }
                        } else {
                            Icon { icon: FaSun, width: 14, height: 14 }
                        }
                    }
                }
                li {
                    button {
                        class: "button-logout",
                        title: "{logout_title}",
                        onclick: move |_| logout.call(()),
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                        span { "{name}" }
                    }
                }
            }
        }
    }
}
