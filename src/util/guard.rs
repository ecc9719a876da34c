//! Route classification and the session-based route guard.
//!
//! DESIGN
//! ======
//! The guard itself is a pure decision function of `(session, full path)`
//! re-evaluated on every navigation; it holds no state beyond the session
//! store and the pending-redirect slot. Components apply decisions through
//! `install_route_guard`, so every protected route redirects identically.
//!
//! Classification is static: `/student/*` and `/manager/*` are role-gated
//! except for their `login`/`register` subpaths, everything else is public.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::util::storage;

/// Student login route, also the redirect target for students who wander
/// into manager-only territory.
pub const STUDENT_LOGIN: &str = "/student/login";
/// Manager login route.
pub const MANAGER_LOGIN: &str = "/manager/login";
/// Default landing route after a student login with no pending redirect.
pub const STUDENT_DASHBOARD: &str = "/student/dashboard";
/// Default landing route after a manager login with no pending redirect.
pub const MANAGER_DASHBOARD: &str = "/manager/dashboard";

/// Static access classification of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    StudentOnly,
    ManagerOnly,
}

/// What the guard wants done for the current navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore still in flight; render a neutral waiting state.
    Wait,
    /// Session is permitted; render the protected content.
    Allow,
    /// Navigate to `to`; when `remember` is set, record it as the pending
    /// redirect first (anonymous-visitor case only).
    Redirect {
        to: String,
        remember: Option<String>,
    },
}

/// Classify a path (query string ignored) by its prefix.
pub fn classify(path: &str) -> RouteClass {
    let path = path.split('?').next().unwrap_or(path);
    if let Some(rest) = path.strip_prefix("/student") {
        if is_auth_subpath(rest) {
            return RouteClass::Public;
        }
        return RouteClass::StudentOnly;
    }
    if let Some(rest) = path.strip_prefix("/manager") {
        if is_auth_subpath(rest) {
            return RouteClass::Public;
        }
        return RouteClass::ManagerOnly;
    }
    RouteClass::Public
}

fn is_auth_subpath(rest: &str) -> bool {
    matches!(rest, "/login" | "/register")
}

/// Login route for a protected route class.
pub fn login_route(class: RouteClass) -> &'static str {
    match class {
        RouteClass::StudentOnly => STUDENT_LOGIN,
        _ => MANAGER_LOGIN,
    }
}

/// Login route for an identity's own role, used for the
/// "go to your own area" correction on role mismatch.
pub fn own_login_route(role: Role) -> &'static str {
    match role {
        Role::Student => STUDENT_LOGIN,
        Role::Manager => MANAGER_LOGIN,
    }
}

/// Dashboard a role lands on when no pending redirect exists.
pub fn default_landing(role: Role) -> &'static str {
    match role {
        Role::Student => STUDENT_DASHBOARD,
        Role::Manager => MANAGER_DASHBOARD,
    }
}

fn role_matches(role: Role, class: RouteClass) -> bool {
    match class {
        RouteClass::Public => true,
        RouteClass::StudentOnly => role == Role::Student,
        RouteClass::ManagerOnly => role == Role::Manager,
    }
}

/// Decide what happens for a navigation to `full_path` (path + query).
///
/// Anonymous visitors get the pending path recorded and are sent to the
/// login page matching the route class; a signed-in identity with the wrong
/// role is corrected to its own login page with no pending path recorded.
pub fn evaluate(session: &SessionState, full_path: &str) -> GuardDecision {
    let class = classify(full_path);
    if class == RouteClass::Public {
        return GuardDecision::Allow;
    }
    if session.loading {
        return GuardDecision::Wait;
    }
    match &session.user {
        None => GuardDecision::Redirect {
            to: login_route(class).to_owned(),
            remember: Some(full_path.to_owned()),
        },
        Some(user) if !role_matches(user.role, class) => GuardDecision::Redirect {
            to: own_login_route(user.role).to_owned(),
            remember: None,
        },
        Some(_) => GuardDecision::Allow,
    }
}

/// Navigation target after a successful login: the consumed pending
/// redirect when one exists, else the role's dashboard.
pub fn resolve_post_login(pending: Option<String>, role: Role) -> String {
    match pending {
        Some(path) if !path.is_empty() => path,
        _ => default_landing(role).to_owned(),
    }
}

/// Join pathname and query string back into the full path the guard
/// remembers, so a login detour returns to the exact view.
pub fn full_path(pathname: &str, query: &str) -> String {
    if query.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{query}")
    }
}

/// Apply guard decisions for the current location whenever the session or
/// path changes. Redirect effects run here; rendering gates on `evaluate`.
pub fn install_route_guard<P, F>(session: RwSignal<SessionState>, current_path: P, navigate: F)
where
    P: Fn() -> String + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if let GuardDecision::Redirect { to, remember } = evaluate(&session.get(), &current_path()) {
            if let Some(path) = remember {
                storage::remember_redirect(&path);
            }
            navigate(&to, NavigateOptions::default());
        }
    });
}
