//! Credential payloads for password authentication against the notes API.

mod credentials;

pub use credentials::{AccessToken, LoginRequest, RegisterRequest, MIN_PASSWORD_LEN};
