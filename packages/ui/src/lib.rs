//! This crate contains the root shell and all shared UI for the workspace.

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod app;
pub use app::{App, AppShell};

mod auth;
pub use auth::{use_session, use_session_actions, LoginStatus, SessionActions};

pub mod i18n;
pub use i18n::{app_title, tr, Lang};

mod navigation;
pub use navigation::Navigation;

mod platform;
pub use platform::{load_config, make_store, Gateway, PlatformStore, Services};

mod preferences;
pub use preferences::{use_preference_actions, use_preferences, PreferenceActions};

pub mod routes;
pub use routes::{AuthedRoute, GuestRoute};

pub mod session;
pub use session::{RouteTree, SessionError, SessionState};

mod shell;
pub use shell::{RootShell, StateCell};

mod theme;
pub use theme::{DocumentTheme, ThemeAttribute};

pub mod views;
