use super::*;

#[test]
fn status_error_displays_server_message_verbatim() {
    let err = ApiError::Status {
        status: 400,
        message: "Invalid email or password".to_owned(),
    };
    assert_eq!(err.to_string(), "Invalid email or password");
}

#[test]
fn session_expired_reports_status_401() {
    assert_eq!(ApiError::SessionExpired.status(), Some(401));
    assert!(ApiError::SessionExpired.is_session_expired());
}

#[test]
fn credential_401_is_not_session_expiry() {
    let err = ApiError::Status {
        status: 401,
        message: "Invalid email or password".to_owned(),
    };
    assert!(!err.is_session_expired());
    assert_eq!(err.status(), Some(401));
}

#[test]
fn transport_errors_carry_no_status() {
    assert_eq!(ApiError::Timeout.status(), None);
    assert_eq!(ApiError::Network("connection reset".to_owned()).status(), None);
}

#[test]
fn timeout_message_is_user_readable() {
    assert_eq!(ApiError::Timeout.to_string(), "request timed out");
}
