//! Browser localStorage persistence for session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is the only module allowed to call the session
//! read/write/clear helpers here; the route guard owns the pending-redirect
//! slot. Centralizing the web-sys glue keeps the hydrate/SSR split out of
//! state and component code.
//!
//! Layout: `token` holds the opaque bearer credential, `user` the
//! serialized identity record (role included), and `pending_redirect` the
//! consume-once path recorded before a forced login. A `token`/`user` pair
//! that fails to parse is treated as absent and cleared by the caller.

use crate::net::types::User;

/// Storage key for the bearer credential.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized identity record.
pub const USER_KEY: &str = "user";
/// Storage key for the consume-once pending redirect path.
pub const PENDING_REDIRECT_KEY: &str = "pending_redirect";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the persisted session, if a complete and well-formed one exists.
///
/// Returns `None` when either slot is missing or the identity record does
/// not parse; callers treat that as anonymous and clear the leftovers.
pub fn load_session() -> Option<(String, User)> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let raw_user = storage.get_item(USER_KEY).ok().flatten()?;
        let user: User = serde_json::from_str(&raw_user).ok()?;
        Some((token, user))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session. Token and identity are written together so a
/// reload never observes one without the other.
pub fn save_session(token: &str, user: &User) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(raw_user) = serde_json::to_string(user) else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(USER_KEY, &raw_user);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Remove every persisted session slot. Safe to call repeatedly.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

/// Record the path a visitor tried to reach before being sent to a login
/// page. Last write wins; any prior unconsumed value is overwritten.
pub fn remember_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.set_item(PENDING_REDIRECT_KEY, path);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Read and clear the pending redirect in one step, so the slot is consumed
/// exactly once even when the subsequent navigation fails.
pub fn take_pending_redirect() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let path = storage.get_item(PENDING_REDIRECT_KEY).ok().flatten()?;
        let _ = storage.remove_item(PENDING_REDIRECT_KEY);
        Some(path)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
