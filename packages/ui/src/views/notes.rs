//! Note pages. Listing, editing and archiving notes are handled elsewhere;
//! these views mark where each page mounts.

use dioxus::prelude::*;

use crate::i18n::Lang;
use crate::routes::AuthedRoute;

/// Empty state shared by the note pages.
#[component]
fn NotesPlaceholder(title: Element, children: Element) -> Element {
    rsx! {
        section {
            class: "notes-page",
            h2 { {title} }
            {children}
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        NotesPlaceholder {
            title: rsx! { Lang { id: "Catatan Aktif", en: "Active Notes" } },
            p { class: "notes-empty", Lang { id: "Tidak ada catatan", en: "No notes" } }
            Link {
                class: "action",
                to: AuthedRoute::NoteAdd {},
                Lang { id: "Tambah catatan", en: "Add note" }
            }
        }
    }
}

#[component]
pub fn Archive() -> Element {
    rsx! {
        NotesPlaceholder {
            title: rsx! { Lang { id: "Catatan Arsip", en: "Archived Notes" } },
            p { class: "notes-empty", Lang { id: "Arsip kosong", en: "Archive is empty" } }
        }
    }
}

#[component]
pub fn NoteAdd() -> Element {
    rsx! {
        NotesPlaceholder {
            title: rsx! { Lang { id: "Catatan Baru", en: "New Note" } },
            p { class: "notes-empty", Lang { id: "Formulir catatan belum tersedia", en: "The note form is not available yet" } }
        }
    }
}

#[component]
pub fn NoteDetail(id: String) -> Element {
    rsx! {
        NotesPlaceholder {
            title: rsx! { Lang { id: "Detail Catatan", en: "Note Details" } },
            p { class: "note-id", code { "{id}" } }
        }
    }
}
