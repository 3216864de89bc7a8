//! # API crate: session gateway and notes API client
//!
//! Everything the shell knows about the network lives here. The UI depends on
//! the [`SessionGateway`] trait rather than on HTTP directly, so the session
//! state machine can be driven by a fake in tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Login/registration request bodies, client-side validation, token payload |
//! | [`client`] | [`NotesApi`]: `reqwest` client for `/login`, `/register`, `/users/me` |
//! | [`error`] | [`ApiError`] |
//! | [`models`] | [`UserInfo`] and the `{status, message, data}` response envelope |

use std::future::Future;

pub mod auth;
pub mod client;
pub mod error;
pub mod models;

pub use client::NotesApi;
pub use error::ApiError;
pub use models::UserInfo;

/// Session operations the root shell depends on.
pub trait SessionGateway {
    /// Fetch the user the stored token belongs to, `None` when signed out.
    fn fetch_current_user(&self) -> impl Future<Output = Result<Option<UserInfo>, ApiError>>;

    /// Store the bearer token used by subsequent requests.
    fn set_access_token(&self, token: &str);

    /// Forget the bearer token. Equivalent to storing the empty string.
    fn clear_access_token(&self) {
        self.set_access_token("");
    }
}
