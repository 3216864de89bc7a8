//! # Notes API client
//!
//! [`NotesApi`] talks to the REST backend over `reqwest` (which compiles to
//! `fetch` on WASM) and keeps the bearer token in a [`PreferenceStore`] under
//! [`ACCESS_TOKEN_KEY`], so a reload or restart stays signed in.
//!
//! | Method | Endpoint | Result |
//! |--------|----------|--------|
//! | [`login`](NotesApi::login) | `POST /login` | access token |
//! | [`register`](NotesApi::register) | `POST /register` | `()` |
//! | [`get_user_logged`](NotesApi::get_user_logged) | `GET /users/me` | `Some(user)`, or `None` when the API refuses the token |
//!
//! Bodies are read as text and decoded separately so that a transport
//! failure ([`ApiError::Http`]) and an unexpected body ([`ApiError::Decode`])
//! stay distinguishable.

use serde::de::DeserializeOwned;
use store::prefs::ACCESS_TOKEN_KEY;
use store::{ClientConfig, PreferenceStore};

use crate::auth::{AccessToken, LoginRequest, RegisterRequest};
use crate::error::ApiError;
use crate::models::{ApiResponse, UserInfo};
use crate::SessionGateway;

/// HTTP client for the notes API, generic over where the token is kept.
#[derive(Clone, Debug)]
pub struct NotesApi<S> {
    http: reqwest::Client,
    base_url: String,
    tokens: S,
}

impl<S: PreferenceStore> NotesApi<S> {
    pub fn new(config: &ClientConfig, tokens: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The stored token, if one is set and non-empty.
    pub fn access_token(&self) -> Option<String> {
        self.tokens
            .get(ACCESS_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    /// Persist a token; the empty string signs out.
    pub fn put_access_token(&self, token: &str) {
        self.tokens.set(ACCESS_TOKEN_KEY, token);
    }

    /// Exchange credentials for an access token. Does not store it.
    pub async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.url("/login"))
            .json(request)
            .send()
            .await?;
        login_token(decode(response).await?)
    }

    /// Create an account. The caller still has to log in afterwards.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/register"))
            .json(request)
            .send()
            .await?;
        let envelope: ApiResponse<serde_json::Value> = decode(response).await?;
        envelope.into_data()?;
        tracing::info!("Registered account for {}", request.email);
        Ok(())
    }

    /// Fetch the user the stored token belongs to.
    ///
    /// Without a token no request is made. A non-success envelope means the
    /// token was refused and maps to `Ok(None)`; only transport and decode
    /// failures are errors.
    pub async fn get_user_logged(&self) -> Result<Option<UserInfo>, ApiError> {
        let Some(token) = self.access_token() else {
            return Ok(None);
        };

        let response = self
            .http
            .get(self.url("/users/me"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(session_user(decode(response).await?))
    }
}

/// The access token out of a `/login` envelope.
fn login_token(envelope: ApiResponse<AccessToken>) -> Result<String, ApiError> {
    match envelope.into_data()? {
        Some(token) => Ok(token.access_token),
        None => Err(ApiError::Rejected("Login response had no token".to_string())),
    }
}

/// The user out of a `/users/me` envelope. A refused token is not an error.
fn session_user(envelope: ApiResponse<UserInfo>) -> Option<UserInfo> {
    if envelope.is_success() {
        envelope.data
    } else {
        tracing::info!("Token refused: {}", envelope.message);
        None
    }
}

async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<ApiResponse<T>, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        tracing::error!("Undecodable {} response: {}", status, e);
        ApiError::Decode(e)
    })
}

impl<S: PreferenceStore> SessionGateway for NotesApi<S> {
    async fn fetch_current_user(&self) -> Result<Option<UserInfo>, ApiError> {
        self.get_user_logged().await
    }

    fn set_access_token(&self, token: &str) {
        self.put_access_token(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn client(store: MemoryStore) -> NotesApi<MemoryStore> {
        // Unroutable address: any request that slips through fails fast.
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:9");
        NotesApi::new(&config, store)
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = ClientConfig::default().with_base_url("https://notes.test/v1/");
        let api = NotesApi::new(&config, MemoryStore::new());
        assert_eq!(api.url("/users/me"), "https://notes.test/v1/users/me");
    }

    #[test]
    fn test_token_roundtrip_through_store() {
        let store = MemoryStore::new();
        let api = client(store.clone());

        assert!(api.access_token().is_none());
        api.set_access_token("tok");
        assert_eq!(api.access_token().as_deref(), Some("tok"));
        assert_eq!(store.get("accessToken").as_deref(), Some("tok"));
    }

    #[test]
    fn test_clear_writes_empty_token() {
        let store = MemoryStore::with_values([("accessToken", "tok")]);
        let api = client(store.clone());

        api.clear_access_token();
        assert_eq!(store.get("accessToken").as_deref(), Some(""));
        assert!(api.access_token().is_none());
    }

    #[tokio::test]
    async fn test_no_token_skips_request() {
        let api = client(MemoryStore::new());
        assert_eq!(api.fetch_current_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_empty_token_skips_request() {
        let api = client(MemoryStore::with_values([("accessToken", "")]));
        assert_eq!(api.get_user_logged().await.unwrap(), None);
    }

    fn parse<T: DeserializeOwned>(body: &str) -> ApiResponse<T> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_session_user_from_success() {
        let envelope = parse(
            r#"{"status":"success","message":"User retrieved","data":{"id":"user-1","name":"Alice","email":"alice@example.com"}}"#,
        );
        let user = session_user(envelope).unwrap();
        assert_eq!(user.id, "user-1");
        assert_eq!(user.display_name(), "Alice");
    }

    #[test]
    fn test_refused_token_is_no_user() {
        let envelope = parse(r#"{"status":"fail","message":"Invalid token"}"#);
        assert_eq!(session_user(envelope), None);

        let envelope = parse(r#"{"status":"error","message":"","data":null}"#);
        assert_eq!(session_user(envelope), None);
    }

    #[test]
    fn test_login_token_from_success() {
        let envelope = parse(r#"{"status":"success","data":{"accessToken":"tok-123"}}"#);
        assert_eq!(login_token(envelope).unwrap(), "tok-123");
    }

    #[test]
    fn test_login_without_data_is_rejected() {
        let envelope = parse(r#"{"status":"success","message":"ok"}"#);
        match login_token(envelope) {
            Err(ApiError::Rejected(message)) => assert_eq!(message, "Login response had no token"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_login_failure_carries_server_message() {
        let envelope = parse(r#"{"status":"fail","message":"Email or password is wrong"}"#);
        let err = login_token(envelope).unwrap_err();
        assert_eq!(err.to_string(), "Email or password is wrong");
    }
}
