//! Registration page view with name/email/password form.

use api::auth::RegisterRequest;
use dioxus::prelude::*;

use crate::i18n::{tr, Lang};
use crate::platform::Services;
use crate::preferences::use_preferences;
use crate::routes::GuestRoute;

/// Register page component. Sends the user back to the login page on success.
#[component]
pub fn Register() -> Element {
    let services = use_context::<Services>();
    let nav = use_navigator();
    let locale = use_preferences().locale;
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let name_label = tr(locale, "Nama", "Name");
    let confirm_label = tr(locale, "Konfirmasi Password", "Confirm Password");
    let submit_label = if loading() {
        tr(locale, "Mendaftarkan...", "Creating account...")
    } else {
        tr(locale, "Daftar", "Register")
    };

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = services.gateway.clone();
        spawn(async move {
            error.set(None);

            let request = match RegisterRequest::new(
                &name(),
                &email(),
                &password(),
                &confirm_password(),
            ) {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(true);
            match gateway.register(&request).await {
                Ok(()) => {
                    loading.set(false);
                    nav.push(GuestRoute::Login {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        section {
            class: "auth-page",

            h2 { Lang { id: "Isi form untuk mendaftar akun.", en: "Fill the form to register account." } }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    div { class: "notice notice-error", role: "alert", "{err}" }
                }

                label { r#for: "name", "{name_label}" }
                input {
                    id: "name",
                    r#type: "text",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
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

                label { r#for: "confirm-password", "{confirm_label}" }
                input {
                    id: "confirm-password",
                    r#type: "password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    "{submit_label}"
                }
            }

            p {
                Lang { id: "Kembali ke ", en: "Back to " }
                Link { to: GuestRoute::Login {}, "Login" }
            }
        }
    }
}
