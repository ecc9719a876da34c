//! Session store: the single source of truth for "who is logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! An `RwSignal<SessionState>` is provided via context at the app root.
//! Route guards and identity-aware components read it; ONLY the operations
//! in this module write it or touch the persisted `token`/`user` slots.
//! Keeping a single writer makes the `user ⟺ token` invariant and the
//! storage layout locally checkable.
//!
//! ERROR HANDLING
//! ==============
//! `login`/`register` never swallow failures; they propagate the API error
//! unchanged so forms can show it. `restore` swallows failures and degrades
//! to anonymous, since nobody is waiting on that path. A `SessionExpired`
//! error observed anywhere is routed through `note_api_error`, which has
//! the same effect as `logout`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, Role, Signup, User};
use crate::util::storage;

/// Authentication state for the current browser session.
///
/// Invariant: `user` and `token` are always set or cleared together.
/// `loading` is true only while the initial restore attempt is in flight,
/// so a not-yet-restored session is never mistaken for anonymous.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for SessionState {
    /// State at process start: nothing known yet, restore pending.
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// A settled anonymous session (restore finished, nobody signed in).
    pub fn anonymous() -> Self {
        Self {
            user: None,
            token: None,
            loading: false,
        }
    }

    /// A settled authenticated session.
    pub fn authenticated(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_student(&self) -> bool {
        self.role() == Some(Role::Student)
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Set identity and credential together; also marks restore finished.
    pub fn apply_auth(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.loading = false;
    }

    /// Clear identity and credential together. Idempotent.
    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
        self.loading = false;
    }
}

/// Restore a persisted session at process start.
///
/// Fetches the profile for the persisted role to confirm the token is
/// still accepted. Any failure (missing slots, malformed record, network,
/// 401) degrades to anonymous and clears the persisted copies. Dependent
/// UI stays suspended until this settles `loading`.
pub async fn restore(session: RwSignal<SessionState>) {
    let Some((token, stored_user)) = storage::load_session() else {
        storage::clear_session();
        session.set(SessionState::anonymous());
        return;
    };
    match api::fetch_profile(stored_user.role, &token).await {
        Ok(profile) => {
            let user = profile.into_user(stored_user.role);
            storage::save_session(&token, &user);
            session.set(SessionState::authenticated(user, token));
        }
        Err(_err) => {
            #[cfg(feature = "hydrate")]
            log::warn!("session restore failed, continuing anonymous: {_err}");
            storage::clear_session();
            session.set(SessionState::anonymous());
        }
    }
}

/// Log in against the role's endpoint and persist the resulting session.
///
/// State is updated atomically: either both `user` and `token` change or
/// neither does.
///
/// # Errors
///
/// Propagates the API error unchanged for the form to display.
pub async fn login(
    session: RwSignal<SessionState>,
    role: Role,
    credentials: &Credentials,
) -> Result<User, ApiError> {
    let auth = api::login(role, credentials).await?;
    let (user, token) = auth.into_parts(role);
    storage::save_session(&token, &user);
    session.update(|s| s.apply_auth(user.clone(), token));
    Ok(user)
}

/// Register a new account; a success is treated as an immediate login.
///
/// # Errors
///
/// Propagates the API error unchanged for the form to display.
pub async fn register(
    session: RwSignal<SessionState>,
    role: Role,
    signup: &Signup,
) -> Result<User, ApiError> {
    let auth = api::register(role, signup).await?;
    let (user, token) = auth.into_parts(role);
    storage::save_session(&token, &user);
    session.update(|s| s.apply_auth(user.clone(), token));
    Ok(user)
}

/// Clear the session, in memory and persisted. Synchronous, never touches
/// the network, safe to call repeatedly.
pub fn logout(session: RwSignal<SessionState>) {
    storage::clear_session();
    session.update(SessionState::clear);
}

/// Apply the global 401 policy: a session-expired error from any
/// authenticated call clears the session exactly like `logout`.
///
/// Returns whether the session was invalidated, so callers can adjust the
/// message they show.
pub fn note_api_error(session: RwSignal<SessionState>, err: &ApiError) -> bool {
    if err.is_session_expired() {
        #[cfg(feature = "hydrate")]
        log::warn!("authenticated request returned 401, clearing session");
        logout(session);
        return true;
    }
    false
}
