use super::*;

fn student() -> User {
    User {
        id: "s1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: Role::Student,
    }
}

fn manager() -> User {
    User {
        id: "m1".to_owned(),
        name: "Bob".to_owned(),
        email: "bob@example.com".to_owned(),
        role: Role::Manager,
    }
}

// =============================================================
// Lifecycle states
// =============================================================

#[test]
fn default_session_is_loading_and_empty() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn anonymous_session_is_settled() {
    let state = SessionState::anonymous();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_session_is_settled() {
    let state = SessionState::authenticated(student(), "tok".to_owned());
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

// =============================================================
// user ⟺ token invariant across every transition
// =============================================================

fn assert_invariant(state: &SessionState) {
    assert_eq!(state.user.is_some(), state.token.is_some());
}

#[test]
fn user_and_token_always_set_or_cleared_together() {
    let mut state = SessionState::default();
    assert_invariant(&state);

    state.apply_auth(student(), "tok-1".to_owned());
    assert_invariant(&state);

    state.clear();
    assert_invariant(&state);

    state.apply_auth(manager(), "tok-2".to_owned());
    assert_invariant(&state);
}

#[test]
fn apply_auth_replaces_prior_identity_atomically() {
    let mut state = SessionState::authenticated(student(), "tok-s".to_owned());
    state.apply_auth(manager(), "tok-m".to_owned());
    assert_eq!(state.role(), Some(Role::Manager));
    assert_eq!(state.token.as_deref(), Some("tok-m"));
    assert_invariant(&state);
}

// =============================================================
// Clearing
// =============================================================

#[test]
fn clear_is_idempotent() {
    let mut state = SessionState::authenticated(student(), "tok".to_owned());
    state.clear();
    let once = state.clone();
    state.clear();
    assert_eq!(state, once);
    assert_eq!(state, SessionState::anonymous());
}

#[test]
fn clear_settles_loading() {
    let mut state = SessionState::default();
    state.clear();
    assert!(!state.loading);
}

// =============================================================
// Derived reads
// =============================================================

#[test]
fn role_reads_derive_from_user() {
    let state = SessionState::authenticated(student(), "tok".to_owned());
    assert!(state.is_student());
    assert_eq!(state.role(), Some(Role::Student));

    let state = SessionState::authenticated(manager(), "tok".to_owned());
    assert!(!state.is_student());
    assert_eq!(state.role(), Some(Role::Manager));

    assert_eq!(SessionState::anonymous().role(), None);
}
