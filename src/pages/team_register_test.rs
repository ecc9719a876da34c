use super::*;

fn event(min: u32, max: u32, fee: u32) -> Event {
    Event {
        id: "e1".to_owned(),
        title: "Hack Night".to_owned(),
        description: String::new(),
        venue: "Main Hall".to_owned(),
        start_date: "2026-09-01".to_owned(),
        end_date: "2026-09-02".to_owned(),
        registration_deadline: None,
        entry_fee: fee,
        min_team_size: min,
        max_team_size: max,
    }
}

fn member(name: &str, email: &str) -> (String, String) {
    (name.to_owned(), email.to_owned())
}

#[test]
fn valid_roster_produces_registration() {
    let roster = vec![member("Alice", "a@b.com"), member("Bob", "b@b.com")];
    let registration = validate_team_input(" Rustaceans ", &roster, "", &event(2, 4, 0)).unwrap();
    assert_eq!(registration.name, "Rustaceans");
    assert_eq!(registration.members.len(), 2);
    assert_eq!(registration.transaction_id, None);
}

#[test]
fn team_name_is_required() {
    let roster = vec![member("Alice", "a@b.com")];
    assert_eq!(
        validate_team_input("  ", &roster, "", &event(1, 4, 0)),
        Err("Enter a team name.".to_owned())
    );
}

#[test]
fn roster_must_meet_minimum_size() {
    let roster = vec![member("Alice", "a@b.com")];
    assert_eq!(
        validate_team_input("Team", &roster, "", &event(2, 4, 0)),
        Err("This event needs at least 2 members per team.".to_owned())
    );
}

#[test]
fn roster_must_not_exceed_maximum_size() {
    let roster = vec![
        member("A", "a@b.com"),
        member("B", "b@b.com"),
        member("C", "c@b.com"),
    ];
    assert_eq!(
        validate_team_input("Team", &roster, "", &event(1, 2, 0)),
        Err("This event allows at most 2 members per team.".to_owned())
    );
}

#[test]
fn each_member_needs_name_and_email() {
    let roster = vec![member("", "a@b.com")];
    assert_eq!(
        validate_team_input("Team", &roster, "", &event(1, 4, 0)),
        Err("Member 1 needs a name.".to_owned())
    );

    let roster = vec![member("Alice", "a@b.com"), member("Bob", "not-an-email")];
    assert_eq!(
        validate_team_input("Team", &roster, "", &event(1, 4, 0)),
        Err("Member 2 needs a valid email.".to_owned())
    );
}

#[test]
fn duplicate_emails_are_rejected_case_insensitively() {
    let roster = vec![member("Alice", "a@b.com"), member("Bob", "A@B.COM")];
    assert_eq!(
        validate_team_input("Team", &roster, "", &event(1, 4, 0)),
        Err("Each member needs a distinct email.".to_owned())
    );
}

#[test]
fn paid_event_requires_payment_reference() {
    let roster = vec![member("Alice", "a@b.com")];
    assert_eq!(
        validate_team_input("Team", &roster, "  ", &event(1, 4, 500)),
        Err("Enter the payment reference for the entry fee.".to_owned())
    );

    let registration = validate_team_input("Team", &roster, " TXN42 ", &event(1, 4, 500)).unwrap();
    assert_eq!(registration.transaction_id, Some("TXN42".to_owned()));
}

#[test]
fn free_event_omits_transaction_id() {
    let roster = vec![member("Alice", "a@b.com")];
    let registration = validate_team_input("Team", &roster, "", &event(1, 4, 0)).unwrap();
    assert_eq!(registration.transaction_id, None);
}

#[test]
fn member_fields_are_trimmed() {
    let roster = vec![member(" Alice ", " a@b.com ")];
    let registration = validate_team_input("Team", &roster, "", &event(1, 4, 0)).unwrap();
    assert_eq!(registration.members[0].name, "Alice");
    assert_eq!(registration.members[0].email, "a@b.com");
}
