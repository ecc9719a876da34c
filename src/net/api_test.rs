use super::*;

#[test]
fn login_endpoints_split_by_role() {
    assert_eq!(login_endpoint(Role::Student), "/api/student/login");
    assert_eq!(login_endpoint(Role::Manager), "/api/auth/login");
}

#[test]
fn register_endpoints_split_by_role() {
    assert_eq!(register_endpoint(Role::Student), "/api/student/register");
    assert_eq!(register_endpoint(Role::Manager), "/api/auth/register");
}

#[test]
fn profile_endpoints_split_by_role() {
    assert_eq!(profile_endpoint(Role::Student), "/api/student/profile");
    assert_eq!(profile_endpoint(Role::Manager), "/api/manager/profile");
}

#[test]
fn event_endpoints_format_expected_paths() {
    assert_eq!(event_endpoint("e42"), "/api/events/e42");
    assert_eq!(event_teams_endpoint("e42"), "/api/events/e42/teams");
}

#[test]
fn team_payment_endpoint_formats_expected_path() {
    assert_eq!(team_payment_endpoint("t7"), "/api/teams/t7/payment");
}

#[test]
fn export_endpoint_carries_format_query() {
    assert_eq!(
        export_endpoint("e42", "csv"),
        "/api/events/e42/teams/export?format=csv"
    );
    assert_eq!(
        export_endpoint("e42", "pdf"),
        "/api/events/e42/teams/export?format=pdf"
    );
}

#[test]
fn bearer_value_prefixes_token() {
    assert_eq!(bearer_value("abc"), "Bearer abc");
}

#[test]
fn http_failure_message_formats_status() {
    assert_eq!(http_failure_message(503), "request failed: 503");
}
