//! # Session state machine
//!
//! ```text
//!               fetch Ok(Some)            login ok
//! Initializing ───────────────► Authenticated ◄──────────── Unauthenticated
//!      │  fetch Ok(None)              │ logout                 ▲   ▲
//!      ├──────────────────────────────┼────────────────────────┘   │ login failed
//!      │  fetch Err                   ▼                            │
//!      └──────────────► Unavailable ──────────────────────────────┘
//! ```
//!
//! `Initializing` is left exactly once, by [`SessionState::resolve`], and is
//! never re-entered. Every other state maps to exactly one [`RouteTree`].

use api::{ApiError, SessionGateway, UserInfo};
use thiserror::Error;

/// Which route table the shell mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTree {
    /// Login and registration only.
    Guest,
    /// Notes pages under the navigation header.
    Member,
}

/// Current authentication state of the shell.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// Waiting for the first session fetch. Nothing is rendered.
    #[default]
    Initializing,
    Unauthenticated,
    /// The first session fetch failed; the guest routes are shown with a notice.
    Unavailable { reason: String },
    Authenticated(UserInfo),
}

/// Why a login could not be completed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Could not load your account: {0}")]
    Fetch(String),
    #[error("The server did not accept the new session")]
    NoUser,
    #[error("Still starting up, try again in a moment")]
    NotReady,
}

impl From<ApiError> for SessionError {
    fn from(e: ApiError) -> Self {
        SessionError::Fetch(e.to_string())
    }
}

impl SessionState {
    pub fn is_initializing(&self) -> bool {
        matches!(self, SessionState::Initializing)
    }

    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// The route table to mount, `None` while initializing.
    pub fn route_tree(&self) -> Option<RouteTree> {
        match self {
            SessionState::Initializing => None,
            SessionState::Authenticated(_) => Some(RouteTree::Member),
            SessionState::Unauthenticated | SessionState::Unavailable { .. } => {
                Some(RouteTree::Guest)
            }
        }
    }

    /// Apply the outcome of the mount-time fetch.
    ///
    /// Returns `false` and leaves the state untouched if the session was
    /// already resolved.
    pub fn resolve(&mut self, outcome: Result<Option<UserInfo>, ApiError>) -> bool {
        if !self.is_initializing() {
            tracing::warn!("Ignoring session resolution after initialization");
            return false;
        }
        *self = match outcome {
            Ok(Some(user)) => {
                tracing::info!("Session restored for {}", user.display_name());
                SessionState::Authenticated(user)
            }
            Ok(None) => {
                tracing::info!("No active session");
                SessionState::Unauthenticated
            }
            Err(e) => {
                tracing::error!("Session fetch failed: {}", e);
                SessionState::Unavailable {
                    reason: e.to_string(),
                }
            }
        };
        true
    }

    /// Apply the outcome of [`authenticate`].
    pub fn apply_login(
        &mut self,
        outcome: Result<UserInfo, SessionError>,
    ) -> Result<(), SessionError> {
        if self.is_initializing() {
            return Err(SessionError::NotReady);
        }
        match outcome {
            Ok(user) => {
                tracing::info!("Signed in as {}", user.display_name());
                *self = SessionState::Authenticated(user);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Login failed: {}", e);
                *self = SessionState::Unauthenticated;
                Err(e)
            }
        }
    }
}

/// Store `token` and fetch the user it belongs to.
///
/// On any failure the token is cleared again so that a reload does not try
/// to restore a session that never worked.
pub async fn authenticate<G: SessionGateway>(
    gateway: &G,
    token: &str,
) -> Result<UserInfo, SessionError> {
    gateway.set_access_token(token);
    match gateway.fetch_current_user().await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => {
            gateway.clear_access_token();
            Err(SessionError::NoUser)
        }
        Err(e) => {
            gateway.clear_access_token();
            Err(e.into())
        }
    }
}

/// Drop the local session, then forget the token. Never waits on the network.
pub fn sign_out<G: SessionGateway>(state: &mut SessionState, gateway: &G) {
    if !state.is_initializing() {
        if let Some(user) = state.user() {
            tracing::info!("Signing out {}", user.display_name());
        }
        *state = SessionState::Unauthenticated;
    }
    gateway.clear_access_token();
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Scripted gateway: pops one queued response per fetch.
    #[derive(Default)]
    pub(crate) struct FakeGateway {
        pub responses: RefCell<VecDeque<Result<Option<UserInfo>, ApiError>>>,
        pub token: RefCell<Option<String>>,
        pub fetches: RefCell<usize>,
    }

    impl FakeGateway {
        pub fn returning(responses: Vec<Result<Option<UserInfo>, ApiError>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                ..Self::default()
            }
        }
    }

    impl SessionGateway for FakeGateway {
        async fn fetch_current_user(&self) -> Result<Option<UserInfo>, ApiError> {
            *self.fetches.borrow_mut() += 1;
            self.responses.borrow_mut().pop_front().unwrap_or(Ok(None))
        }

        fn set_access_token(&self, token: &str) {
            *self.token.borrow_mut() = Some(token.to_string());
        }
    }

    pub(crate) fn alice() -> UserInfo {
        UserInfo {
            id: "user-1".into(),
            name: "Alice".into(),
            email: "alice@example.com".into(),
        }
    }

    #[test]
    fn test_initializing_renders_nothing() {
        assert_eq!(SessionState::default().route_tree(), None);
    }

    #[test]
    fn test_resolve_maps_outcomes() {
        let mut state = SessionState::Initializing;
        assert!(state.resolve(Ok(None)));
        assert_eq!(state, SessionState::Unauthenticated);
        assert_eq!(state.route_tree(), Some(RouteTree::Guest));

        let mut state = SessionState::Initializing;
        assert!(state.resolve(Ok(Some(alice()))));
        assert_eq!(state.user().map(|u| u.display_name()), Some("Alice"));
        assert_eq!(state.route_tree(), Some(RouteTree::Member));

        let mut state = SessionState::Initializing;
        assert!(state.resolve(Err(ApiError::Rejected("boom".into()))));
        assert_eq!(
            state,
            SessionState::Unavailable {
                reason: "boom".into()
            }
        );
        assert_eq!(state.route_tree(), Some(RouteTree::Guest));
    }

    #[test]
    fn test_resolve_only_once() {
        let mut state = SessionState::Initializing;
        state.resolve(Ok(None));
        assert!(!state.resolve(Ok(Some(alice()))));
        assert_eq!(state, SessionState::Unauthenticated);
    }

    #[test]
    fn test_login_while_initializing_is_rejected() {
        let mut state = SessionState::Initializing;
        assert_eq!(state.apply_login(Ok(alice())), Err(SessionError::NotReady));
        assert!(state.is_initializing());
    }

    #[test]
    fn test_failed_login_from_unavailable_becomes_unauthenticated() {
        let mut state = SessionState::Unavailable {
            reason: "offline".into(),
        };
        assert_eq!(
            state.apply_login(Err(SessionError::NoUser)),
            Err(SessionError::NoUser)
        );
        assert_eq!(state, SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_authenticate_stores_token_and_fetches() {
        let gateway = FakeGateway::returning(vec![Ok(Some(alice()))]);
        let user = authenticate(&gateway, "tok").await.unwrap();
        assert_eq!(user, alice());
        assert_eq!(gateway.token.borrow().as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_authenticate_clears_token_on_failure() {
        let gateway = FakeGateway::returning(vec![Err(ApiError::Rejected("down".into()))]);
        let err = authenticate(&gateway, "tok").await.unwrap_err();
        assert_eq!(err, SessionError::Fetch("down".into()));
        assert_eq!(gateway.token.borrow().as_deref(), Some(""));

        let gateway = FakeGateway::returning(vec![Ok(None)]);
        assert_eq!(
            authenticate(&gateway, "tok").await.unwrap_err(),
            SessionError::NoUser
        );
        assert_eq!(gateway.token.borrow().as_deref(), Some(""));
    }

    #[test]
    fn test_sign_out_is_idempotent() {
        let gateway = FakeGateway::default();
        let mut state = SessionState::Authenticated(alice());

        sign_out(&mut state, &gateway);
        assert_eq!(state, SessionState::Unauthenticated);

        *gateway.token.borrow_mut() = Some("stale".into());
        sign_out(&mut state, &gateway);
        assert_eq!(state, SessionState::Unauthenticated);
        assert_eq!(gateway.token.borrow().as_deref(), Some(""));
    }

    #[test]
    fn test_sign_out_during_initialization_keeps_state() {
        let gateway = FakeGateway::default();
        let mut state = SessionState::Initializing;
        sign_out(&mut state, &gateway);
        assert!(state.is_initializing());
        assert_eq!(gateway.token.borrow().as_deref(), Some(""));
    }
}
