use dioxus::prelude::*;

use crate::i18n::Lang;
use crate::routes::AuthedRoute;

/// Unknown path inside the member routes.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        section {
            class: "notes-page",
            h2 { "404" }
            p {
                Lang { id: "Halaman tidak ditemukan: ", en: "Page not found: " }
                code { "{path}" }
            }
            Link { to: AuthedRoute::Home {}, Lang { id: "Kembali ke beranda", en: "Back to home" } }
        }
    }
}
