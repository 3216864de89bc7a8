//! Session context and hooks for the UI.

use dioxus::prelude::*;

use crate::session::SessionState;

/// Progress of the hand-off from the login page to the shell.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoginStatus {
    #[default]
    Idle,
    /// Token stored, waiting for the user fetch.
    Pending,
    Failed(String),
}

impl LoginStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoginStatus::Pending)
    }

    /// Forget a finished attempt's failure, e.g. on a new submit or when
    /// leaving the login page.
    pub fn clear_failure(&mut self) {
        if let LoginStatus::Failed(_) = self {
            *self = LoginStatus::Idle;
        }
    }

    /// Error to show above the form. The page's own error wins.
    pub fn banner(&self, local: Option<String>) -> Option<String> {
        local.or_else(|| match self {
            LoginStatus::Failed(err) => Some(err.clone()),
            _ => None,
        })
    }
}

/// Session transitions the shell exposes to its pages.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionActions {
    /// Raised by the login page with a fresh access token.
    pub login_success: Callback<String>,
    pub logout: Callback<()>,
    pub status: Signal<LoginStatus>,
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

pub fn use_session_actions() -> SessionActions {
    use_context::<SessionActions>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_attempt_clears_previous_failure() {
        let mut status = LoginStatus::Failed("Could not load your account: offline".into());
        assert!(status.banner(None).is_some());

        status.clear_failure();
        assert_eq!(status, LoginStatus::Idle);
        assert_eq!(status.banner(None), None);
    }

    #[test]
    fn test_clear_failure_keeps_pending() {
        let mut status = LoginStatus::Pending;
        status.clear_failure();
        assert!(status.is_pending());
    }

    #[test]
    fn test_local_error_wins_banner() {
        let status = LoginStatus::Failed("server".into());
        assert_eq!(
            status.banner(Some("Please enter your email".into())).as_deref(),
            Some("Please enter your email")
        );
        assert_eq!(status.banner(None).as_deref(), Some("server"));
    }
}
