//! Login and registration request bodies with client-side validation.
//!
//! Validation mirrors the API's own rules so the form can report problems
//! without a round-trip; the server remains the authority.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Minimum password length accepted by the API.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Trim the email and reject empty fields.
    pub fn new(email: &str, password: &str) -> Result<Self, ApiError> {
        let email = email.trim().to_string();
        if email.is_empty() {
            return Err(ApiError::Invalid("Please enter your email".to_string()));
        }
        if password.is_empty() {
            return Err(ApiError::Invalid("Please enter your password".to_string()));
        }
        Ok(Self {
            email,
            password: password.to_string(),
        })
    }
}

/// Body of `POST /register`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Validate the registration form, including the password confirmation.
    pub fn new(name: &str, email: &str, password: &str, confirm: &str) -> Result<Self, ApiError> {
        let name = name.trim().to_string();
        let email = email.trim().to_string();

        if name.is_empty() {
            return Err(ApiError::Invalid("Name is required".to_string()));
        }
        if email.is_empty() || !email.contains('@') {
            return Err(ApiError::Invalid("Please enter a valid email".to_string()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::Invalid(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if password != confirm {
            return Err(ApiError::Invalid("Passwords do not match".to_string()));
        }

        Ok(Self {
            name,
            email,
            password: password.to_string(),
        })
    }
}

/// `data` payload of a successful `POST /login`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AccessToken {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_trims_email() {
        let req = LoginRequest::new("  alice@example.com ", "secret").unwrap();
        assert_eq!(req.email, "alice@example.com");
    }

    #[test]
    fn test_login_requires_fields() {
        assert!(LoginRequest::new("", "secret").is_err());
        assert!(LoginRequest::new("alice@example.com", "").is_err());
    }

    #[test]
    fn test_register_validation_order() {
        let err = RegisterRequest::new(" ", "nope", "x", "y").unwrap_err();
        assert_eq!(err.to_string(), "Name is required");

        let err = RegisterRequest::new("Alice", "nope", "x", "y").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid email");

        let err = RegisterRequest::new("Alice", "a@b.c", "12345", "12345").unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");

        let err = RegisterRequest::new("Alice", "a@b.c", "123456", "654321").unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn test_register_serializes_expected_body() {
        let req = RegisterRequest::new("Alice", "alice@example.com", "secret1", "secret1").unwrap();
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Alice",
                "email": "alice@example.com",
                "password": "secret1",
            })
        );
    }

    #[test]
    fn test_access_token_field_name() {
        let token: AccessToken = serde_json::from_str(r#"{"accessToken":"tok"}"#).unwrap();
        assert_eq!(token.access_token, "tok");
    }
}
