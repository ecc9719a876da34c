use super::*;
use crate::net::types::User;

fn student_session() -> SessionState {
    SessionState::authenticated(
        User {
            id: "s1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            role: Role::Student,
        },
        "tok-s".to_owned(),
    )
}

fn manager_session() -> SessionState {
    SessionState::authenticated(
        User {
            id: "m1".to_owned(),
            name: "Bob".to_owned(),
            email: "bob@example.com".to_owned(),
            role: Role::Manager,
        },
        "tok-m".to_owned(),
    )
}

// =============================================================
// Route classification
// =============================================================

#[test]
fn public_routes_classify_as_public() {
    assert_eq!(classify("/"), RouteClass::Public);
    assert_eq!(classify("/events"), RouteClass::Public);
    assert_eq!(classify("/events/e42"), RouteClass::Public);
    assert_eq!(classify("/about"), RouteClass::Public);
    assert_eq!(classify("/contact"), RouteClass::Public);
}

#[test]
fn auth_pages_classify_as_public() {
    assert_eq!(classify("/student/login"), RouteClass::Public);
    assert_eq!(classify("/student/register"), RouteClass::Public);
    assert_eq!(classify("/manager/login"), RouteClass::Public);
    assert_eq!(classify("/manager/register"), RouteClass::Public);
}

#[test]
fn student_routes_classify_as_student_only() {
    assert_eq!(classify("/student/dashboard"), RouteClass::StudentOnly);
    assert_eq!(classify("/student/registered"), RouteClass::StudentOnly);
    assert_eq!(classify("/student/events/e1/register"), RouteClass::StudentOnly);
}

#[test]
fn manager_routes_classify_as_manager_only() {
    assert_eq!(classify("/manager/dashboard"), RouteClass::ManagerOnly);
    assert_eq!(classify("/manager/events/42/teams"), RouteClass::ManagerOnly);
}

#[test]
fn classification_ignores_query_string() {
    assert_eq!(classify("/manager/events?page=2"), RouteClass::ManagerOnly);
    assert_eq!(classify("/events?past=true"), RouteClass::Public);
}

// =============================================================
// Guard decisions
// =============================================================

#[test]
fn loading_session_waits_without_redirect() {
    let session = SessionState::default();
    assert!(session.loading);
    assert_eq!(evaluate(&session, "/student/dashboard"), GuardDecision::Wait);
}

#[test]
fn public_route_allows_even_while_loading() {
    let session = SessionState::default();
    assert_eq!(evaluate(&session, "/events"), GuardDecision::Allow);
}

#[test]
fn anonymous_student_route_redirects_to_student_login_and_remembers_path() {
    let session = SessionState::anonymous();
    assert_eq!(
        evaluate(&session, "/student/dashboard"),
        GuardDecision::Redirect {
            to: "/student/login".to_owned(),
            remember: Some("/student/dashboard".to_owned()),
        }
    );
}

#[test]
fn anonymous_manager_route_remembers_full_path_with_query() {
    let session = SessionState::anonymous();
    assert_eq!(
        evaluate(&session, "/manager/events/42/teams?filter=unpaid"),
        GuardDecision::Redirect {
            to: "/manager/login".to_owned(),
            remember: Some("/manager/events/42/teams?filter=unpaid".to_owned()),
        }
    );
}

#[test]
fn matching_role_allows_protected_route() {
    assert_eq!(
        evaluate(&student_session(), "/student/registered"),
        GuardDecision::Allow
    );
    assert_eq!(
        evaluate(&manager_session(), "/manager/events/42/teams"),
        GuardDecision::Allow
    );
}

#[test]
fn student_on_manager_route_is_corrected_to_student_login() {
    // Own-role correction: no pending redirect is recorded.
    assert_eq!(
        evaluate(&student_session(), "/manager/events/42/teams"),
        GuardDecision::Redirect {
            to: "/student/login".to_owned(),
            remember: None,
        }
    );
}

#[test]
fn manager_on_student_route_is_corrected_to_manager_login() {
    assert_eq!(
        evaluate(&manager_session(), "/student/registered"),
        GuardDecision::Redirect {
            to: "/manager/login".to_owned(),
            remember: None,
        }
    );
}

// =============================================================
// Post-login resolution
// =============================================================

#[test]
fn post_login_consumes_pending_path() {
    assert_eq!(
        resolve_post_login(Some("/manager/events/42/teams".to_owned()), Role::Manager),
        "/manager/events/42/teams"
    );
}

#[test]
fn post_login_falls_back_to_role_dashboard() {
    assert_eq!(resolve_post_login(None, Role::Student), "/student/dashboard");
    assert_eq!(resolve_post_login(None, Role::Manager), "/manager/dashboard");
}

#[test]
fn post_login_treats_empty_pending_as_absent() {
    assert_eq!(resolve_post_login(Some(String::new()), Role::Student), "/student/dashboard");
}

// =============================================================
// Path assembly
// =============================================================

#[test]
fn full_path_joins_query_when_present() {
    assert_eq!(full_path("/events", "past=true"), "/events?past=true");
    assert_eq!(full_path("/events", ""), "/events");
}

// =============================================================
// Scenario walks from the session model contract
// =============================================================

#[test]
fn anonymous_student_dashboard_detour_lands_back_on_dashboard() {
    let decision = evaluate(&SessionState::anonymous(), "/student/dashboard");
    let GuardDecision::Redirect { to, remember } = decision else {
        panic!("expected redirect");
    };
    assert_eq!(to, "/student/login");

    // Login succeeds, the remembered path is consumed exactly once.
    let target = resolve_post_login(remember, Role::Student);
    assert_eq!(target, "/student/dashboard");
}

#[test]
fn role_mismatch_detour_keeps_pending_slot_untouched() {
    let decision = evaluate(&manager_session(), "/student/registered");
    let GuardDecision::Redirect { remember, .. } = decision else {
        panic!("expected redirect");
    };
    assert_eq!(remember, None);
}
