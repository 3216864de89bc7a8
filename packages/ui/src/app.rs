//! The root shell component.
//!
//! Builds a [`RootShell`] over two signals, provides those signals (and the
//! actions that drive the shell) as context, mounts the shell once and shows
//! the route table that matches the session.

use dioxus::prelude::*;
use store::Preferences;

use crate::auth::{LoginStatus, SessionActions};
use crate::platform::{Gateway, PlatformStore, Services};
use crate::preferences::PreferenceActions;
use crate::routes::{AuthedRoute, GuestRoute};
use crate::session::{RouteTree, SessionState};
use crate::shell::RootShell;
use crate::theme::DocumentTheme;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

/// The shell as the running app uses it: state lives in signals.
pub type AppShell = RootShell<
    Gateway,
    PlatformStore,
    DocumentTheme,
    Signal<SessionState>,
    Signal<Preferences>,
>;

#[component]
pub fn App() -> Element {
    let services = use_context_provider(Services::load);
    let shell: AppShell = use_hook(|| {
        let preferences = Preferences::load(&services.store);
        RootShell::with_cells(
            services.gateway.clone(),
            services.store.clone(),
            services.theme,
            Signal::new(SessionState::Initializing),
            Signal::new(preferences),
        )
    });
    let session = use_context_provider(|| *shell.session_cell());
    use_context_provider(|| *shell.preference_cell());
    let mut status = use_signal(LoginStatus::default);

    // One-shot mount. The shell only peeks at its signals, so the resource
    // never re-runs, and it is dropped together with this scope.
    let _ = use_resource({
        let shell = shell.clone();
        move || {
            let shell = shell.clone();
            async move { shell.mount().await }
        }
    });

    let toggle_locale = use_callback({
        let shell = shell.clone();
        move |_: ()| {
            shell.toggle_locale();
        }
    });
    let toggle_theme = use_callback({
        let shell = shell.clone();
        move |_: ()| {
            shell.toggle_theme();
        }
    });
    use_context_provider(|| PreferenceActions {
        toggle_locale,
        toggle_theme,
    });

    let login_success = use_callback({
        let shell = shell.clone();
        move |token: String| {
            status.set(LoginStatus::Pending);
            let shell = shell.clone();
            spawn(async move {
                match shell.handle_login_success(&token).await {
                    Ok(()) => status.set(LoginStatus::Idle),
                    Err(e) => status.set(LoginStatus::Failed(e.to_string())),
                }
            });
        }
    });
    let logout = use_callback({
        let shell = shell.clone();
        move |_: ()| {
            shell.handle_logout();
            status.set(LoginStatus::Idle);
        }
    });
    use_context_provider(|| SessionActions {
        login_success,
        logout,
        status,
    });

    // Nothing at all while the session is unresolved.
    let routes = match session.read().route_tree() {
        None => return rsx! {},
        Some(RouteTree::Guest) => rsx! { Router::<GuestRoute> {} },
        Some(RouteTree::Member) => rsx! { Router::<AuthedRoute> {} },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        {routes}
    }
}
