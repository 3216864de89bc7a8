//! The two route tables. Exactly one is mounted at a time, chosen by
//! [`SessionState::route_tree`](crate::SessionState::route_tree).

use dioxus::prelude::*;

use crate::views::{
    Archive, GuestLayout, Home, Login, LoginFallback, MemberLayout, NotFound, NoteAdd,
    NoteDetail, Register,
};

/// Routes reachable without a session. Any unknown path shows the login page.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum GuestRoute {
    #[layout(GuestLayout)]
        #[route("/register")]
        Register {},
        #[route("/")]
        Login {},
        #[route("/:..segments")]
        LoginFallback { segments: Vec<String> },
}

/// Routes reachable with a session, rendered under the navigation header.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum AuthedRoute {
    #[layout(MemberLayout)]
        #[route("/")]
        Home {},
        #[route("/arsip")]
        Archive {},
        #[route("/note/add")]
        NoteAdd {},
        #[route("/note/:id")]
        NoteDetail { id: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
