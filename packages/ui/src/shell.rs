//! # Root shell
//!
//! [`RootShell`] owns every shell transition: mount, login hand-off, logout
//! and the two preference toggles. Its session and preferences live in
//! [`StateCell`]s supplied by the caller. [`App`](crate::App) passes
//! signals, so every write re-renders the pages that read them; tests pass
//! plain `RefCell`s.
//!
//! No cell is borrowed across an `await`: async transitions read a
//! snapshot, await the gateway, then write the result back. Dropping the
//! pending future (or the scope that spawned it) cancels the fetch before
//! any write lands.

use std::cell::RefCell;
use std::rc::Rc;

use api::SessionGateway;
use dioxus::prelude::*;
use store::{Locale, PreferenceStore, Preferences, Theme};

use crate::i18n::app_title;
use crate::session::{authenticate, sign_out, RouteTree, SessionError, SessionState};
use crate::theme::ThemeAttribute;

/// Somewhere the shell keeps one piece of state.
pub trait StateCell<T> {
    /// Current value, without subscribing the caller to changes.
    fn snapshot(&self) -> T;
    fn put(&self, value: T);
}

impl<T: Clone> StateCell<T> for RefCell<T> {
    fn snapshot(&self) -> T {
        self.borrow().clone()
    }

    fn put(&self, value: T) {
        *self.borrow_mut() = value;
    }
}

impl<T, C: StateCell<T>> StateCell<T> for Rc<C> {
    fn snapshot(&self) -> T {
        C::snapshot(self)
    }

    fn put(&self, value: T) {
        C::put(self, value)
    }
}

impl<T: Clone + 'static> StateCell<T> for Signal<T> {
    fn snapshot(&self) -> T {
        T::clone(&self.peek())
    }

    fn put(&self, value: T) {
        let mut signal = *self;
        *signal.write() = value;
    }
}

#[derive(Clone)]
pub struct RootShell<G, S, D, SC = RefCell<SessionState>, PC = RefCell<Preferences>> {
    gateway: G,
    store: S,
    theme: D,
    session: SC,
    preferences: PC,
}

impl<G, S: PreferenceStore, D> RootShell<G, S, D> {
    /// Build a shell in the `Initializing` state with preferences read from `store`.
    pub fn new(gateway: G, store: S, theme: D) -> Self {
        let preferences = RefCell::new(Preferences::load(&store));
        Self {
            gateway,
            store,
            theme,
            session: RefCell::default(),
            preferences,
        }
    }
}

impl<G, S, D, SC, PC> RootShell<G, S, D, SC, PC>
where
    G: SessionGateway,
    S: PreferenceStore,
    D: ThemeAttribute,
    SC: StateCell<SessionState>,
    PC: StateCell<Preferences>,
{
    /// Build a shell over caller-owned cells. `session` should start out
    /// `Initializing` and `preferences` loaded from `store`.
    pub fn with_cells(gateway: G, store: S, theme: D, session: SC, preferences: PC) -> Self {
        Self {
            gateway,
            store,
            theme,
            session,
            preferences,
        }
    }

    /// Apply the persisted theme and resolve the session once.
    ///
    /// Later calls re-apply the theme but never fetch again.
    pub async fn mount(&self) {
        self.theme.apply(self.preferences.snapshot().theme);
        if !self.session.snapshot().is_initializing() {
            return;
        }
        let outcome = self.gateway.fetch_current_user().await;
        self.update_session(|session| session.resolve(outcome));
    }

    pub async fn handle_login_success(&self, token: &str) -> Result<(), SessionError> {
        if self.session.snapshot().is_initializing() {
            return Err(SessionError::NotReady);
        }
        let outcome = authenticate(&self.gateway, token).await;
        self.update_session(|session| session.apply_login(outcome))
    }

    pub fn handle_logout(&self) {
        self.update_session(|session| sign_out(session, &self.gateway));
    }

    pub fn toggle_locale(&self) -> Locale {
        let mut preferences = self.preferences.snapshot();
        let locale = preferences.toggle_locale(&self.store);
        self.preferences.put(preferences);
        locale
    }

    pub fn toggle_theme(&self) -> Theme {
        let mut preferences = self.preferences.snapshot();
        let theme = preferences.toggle_theme(&self.store);
        self.preferences.put(preferences);
        self.theme.apply(theme);
        theme
    }

    fn update_session<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut session = self.session.snapshot();
        let result = f(&mut session);
        self.session.put(session);
        result
    }

    pub fn session_cell(&self) -> &SC {
        &self.session
    }

    pub fn preference_cell(&self) -> &PC {
        &self.preferences
    }

    pub fn session(&self) -> SessionState {
        self.session.snapshot()
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences.snapshot()
    }

    pub fn route_tree(&self) -> Option<RouteTree> {
        self.session().route_tree()
    }

    /// Locale-dependent header title.
    pub fn title(&self) -> &'static str {
        app_title(self.preferences().locale)
    }

    /// Display name for the navigation bar, when signed in.
    pub fn header_name(&self) -> Option<String> {
        self.session().user().map(|u| u.display_name().to_string())
    }
}
