//! Persistent chrome around each route table.

use dioxus::prelude::*;

use crate::auth::{use_session, use_session_actions};
use crate::i18n::{app_title, tr};
use crate::navigation::Navigation;
use crate::preferences::use_preferences;
use crate::routes::{AuthedRoute, GuestRoute};
use crate::session::SessionState;

/// Title-only header for the login and registration pages.
#[component]
pub fn GuestLayout() -> Element {
    let session = use_session();
    let locale = use_preferences().locale;
    let title = app_title(locale);
    let notice = tr(
        locale,
        "Tidak dapat memeriksa sesi Anda. Silakan masuk kembali.",
        "Could not check your session. Please sign in again.",
    );

    rsx! {
        div {
            class: "app-container",
            header {
                h1 { "{title}" }
            }
            main {
                if let SessionState::Unavailable { reason } = session() {
                    div {
                        class: "notice notice-warning",
                        role: "status",
                        p { "{notice}" }
                        small { "{reason}" }
                    }
                }
                Outlet::<GuestRoute> {}
            }
        }
    }
}

/// Header with the home link and navigation bar, shown on every member page.
#[component]
pub fn MemberLayout() -> Element {
    let session = use_session();
    let actions = use_session_actions();
    let title = app_title(use_preferences().locale);

    // The member tree is only mounted with a user; render nothing in the
    // frame between logout and the shell swapping trees.
    let Some(name) = session().user().map(|u| u.display_name().to_string()) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "app-container",
            header {
                h1 {
                    Link { to: AuthedRoute::Home {}, "{title}" }
                }
                Navigation { name, logout: actions.logout }
            }
            main {
                Outlet::<AuthedRoute> {}
            }
        }
    }
}
