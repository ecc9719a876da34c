use super::*;

#[test]
fn validate_signup_input_accepts_complete_form() {
    let signup =
        validate_signup_input(" Alice ", " alice@example.com ", "secret1", "secret1").unwrap();
    assert_eq!(signup.name, "Alice");
    assert_eq!(signup.email, "alice@example.com");
    assert_eq!(signup.password, "secret1");
}

#[test]
fn validate_signup_input_requires_name() {
    assert_eq!(
        validate_signup_input("   ", "a@b.com", "secret1", "secret1"),
        Err("Enter your name.")
    );
}

#[test]
fn validate_signup_input_requires_valid_email() {
    assert_eq!(
        validate_signup_input("Alice", "", "secret1", "secret1"),
        Err("Enter a valid email address.")
    );
    assert_eq!(
        validate_signup_input("Alice", "nope", "secret1", "secret1"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_signup_input_enforces_password_length() {
    assert_eq!(
        validate_signup_input("Alice", "a@b.com", "short", "short"),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn validate_signup_input_requires_matching_confirmation() {
    assert_eq!(
        validate_signup_input("Alice", "a@b.com", "secret1", "secret2"),
        Err("Passwords do not match.")
    );
}
