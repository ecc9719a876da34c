use super::*;

#[test]
fn validate_login_input_trims_email() {
    let credentials = validate_login_input("  user@example.com  ", "hunter2").unwrap();
    assert_eq!(credentials.email, "user@example.com");
    assert_eq!(credentials.password, "hunter2");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("", "hunter2"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("user@example.com", ""),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_login_input_rejects_non_email() {
    assert_eq!(
        validate_login_input("not-an-email", "hunter2"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_login_input_keeps_password_untouched() {
    // Passwords may legitimately contain surrounding whitespace.
    let credentials = validate_login_input("a@b.com", " spaced ").unwrap();
    assert_eq!(credentials.password, " spaced ");
}
