//! # Response envelope
//!
//! Every endpoint answers with the same JSON shape, whatever the HTTP status:
//!
//! ```json
//! { "status": "success", "message": "User retrieved", "data": { ... } }
//! { "status": "fail", "message": "Missing authentication" }
//! ```
//!
//! [`ApiResponse::into_data`] turns that into a `Result`: anything other than
//! `"success"` becomes [`ApiError::Rejected`] carrying the server's message.

use serde::Deserialize;

use crate::error::ApiError;

const SUCCESS: &str = "success";

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS
    }

    /// The payload of a successful response (`None` when `data` is absent).
    pub fn into_data(self) -> Result<Option<T>, ApiError> {
        if self.is_success() {
            Ok(self.data)
        } else if self.message.is_empty() {
            Err(ApiError::Rejected(format!("Request failed ({})", self.status)))
        } else {
            Err(ApiError::Rejected(self.message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserInfo;

    #[test]
    fn test_success_with_data() {
        let body = r#"{"status":"success","message":"User retrieved","data":{"id":"user-1","name":"Alice","email":"alice@example.com"}}"#;
        let response: ApiResponse<UserInfo> = serde_json::from_str(body).unwrap();
        let user = response.into_data().unwrap().unwrap();
        assert_eq!(user.name, "Alice");
    }

    #[test]
    fn test_success_without_data() {
        let body = r#"{"status":"success","message":"User Created"}"#;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(body).unwrap();
        assert!(response.into_data().unwrap().is_none());
    }

    #[test]
    fn test_fail_carries_message() {
        let body = r#"{"status":"fail","message":"Email is already in use"}"#;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(body).unwrap();
        match response.into_data() {
            Err(ApiError::Rejected(message)) => assert_eq!(message, "Email is already in use"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_fail_without_message() {
        let body = r#"{"status":"error"}"#;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(body).unwrap();
        let err = response.into_data().unwrap_err();
        assert_eq!(err.to_string(), "Request failed (error)");
    }
}
