//! Login page view with email/password form.

use api::auth::LoginRequest;
use dioxus::prelude::*;

use crate::auth::use_session_actions;
use crate::i18n::{tr, Lang};
use crate::platform::Services;
use crate::preferences::use_preferences;
use crate::routes::GuestRoute;

/// Login page component.
///
/// Exchanges the credentials for an access token and hands it to the shell,
/// which stores it and loads the account. Errors from either step are shown
/// above the form.
#[component]
pub fn Login() -> Element {
    let services = use_context::<Services>();
    let actions = use_session_actions();
    let locale = use_preferences().locale;
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let busy_label = tr(locale, "Memproses...", "Signing in...");

    let status = (actions.status)();
    let busy = loading() || status.is_pending();
    let shown_error = status.banner(error());

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = services.gateway.clone();
        let mut status = actions.status;
        spawn(async move {
            error.set(None);
            status.write().clear_failure();

            let request = match LoginRequest::new(&email(), &password()) {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(true);
            match gateway.login(&request).await {
                Ok(token) => {
                    loading.set(false);
                    actions.login_success.call(token);
                }
                Err(e) => {
                    tracing::warn!("Login rejected: {}", e);
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        section {
            class: "auth-page",

            h2 { Lang { id: "Yuk, login untuk menggunakan aplikasi.", en: "Login to use the app, please." } }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = shown_error {
                    div { class: "notice notice-error", role: "alert", "{err}" }
                }

                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: busy,
                    if busy { "{busy_label}" } else { "Login" }
                }
            }

            p {
                Lang { id: "Belum punya akun? ", en: "Don't have an account? " }
                Link {
                    to: GuestRoute::Register {},
                    onclick: move |_| {
                        let mut status = actions.status;
                        status.write().clear_failure();
                    },
                    Lang { id: "Daftar di sini", en: "Register here" }
                }
            }
        }
    }
}

/// Any unknown guest path renders the login page.
#[component]
pub fn LoginFallback(segments: Vec<String>) -> Element {
    tracing::debug!("No guest route for /{}", segments.join("/"));
    rsx! { Login {} }
}
