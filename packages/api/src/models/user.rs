//! # Authenticated user
//!
//! [`UserInfo`] is the `data` payload of `GET /users/me`. The shell treats it
//! as mostly opaque: it only needs something to show in the navigation bar,
//! which [`UserInfo::display_name`] provides.

use serde::{Deserialize, Serialize};

/// User information returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl UserInfo {
    /// Get display name, falling back to email if name is blank.
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            &self.email
        } else {
            name
        }
    }
}
