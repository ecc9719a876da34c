use super::*;

fn filled() -> EventFormFields {
    EventFormFields {
        title: "Hack Night".to_owned(),
        description: "An evening hack.".to_owned(),
        venue: "Main Hall".to_owned(),
        start_date: "2026-09-01".to_owned(),
        end_date: "2026-09-02".to_owned(),
        registration_deadline: "2026-08-25".to_owned(),
        entry_fee: "250".to_owned(),
        min_team_size: "2".to_owned(),
        max_team_size: "4".to_owned(),
    }
}

#[test]
fn complete_fields_produce_a_draft() {
    let draft = validate_event_fields(&filled()).unwrap();
    assert_eq!(draft.title, "Hack Night");
    assert_eq!(draft.entry_fee, 250);
    assert_eq!(draft.registration_deadline, Some("2026-08-25".to_owned()));
    assert_eq!((draft.min_team_size, draft.max_team_size), (2, 4));
}

#[test]
fn title_venue_and_description_are_required() {
    let mut fields = filled();
    fields.title = "  ".to_owned();
    assert_eq!(
        validate_event_fields(&fields),
        Err("Enter an event title.".to_owned())
    );

    let mut fields = filled();
    fields.venue = String::new();
    assert_eq!(validate_event_fields(&fields), Err("Enter a venue.".to_owned()));

    let mut fields = filled();
    fields.description = String::new();
    assert_eq!(
        validate_event_fields(&fields),
        Err("Enter a description.".to_owned())
    );
}

#[test]
fn dates_are_required_and_ordered() {
    let mut fields = filled();
    fields.end_date = String::new();
    assert_eq!(
        validate_event_fields(&fields),
        Err("Enter start and end dates.".to_owned())
    );

    let mut fields = filled();
    fields.end_date = "2026-08-31".to_owned();
    assert_eq!(
        validate_event_fields(&fields),
        Err("End date must not be before the start date.".to_owned())
    );
}

#[test]
fn deadline_must_precede_start() {
    let mut fields = filled();
    fields.registration_deadline = "2026-09-02".to_owned();
    assert_eq!(
        validate_event_fields(&fields),
        Err("Registration deadline must not be after the event starts.".to_owned())
    );
}

#[test]
fn empty_deadline_is_allowed() {
    let mut fields = filled();
    fields.registration_deadline = String::new();
    let draft = validate_event_fields(&fields).unwrap();
    assert_eq!(draft.registration_deadline, None);
}

#[test]
fn empty_fee_defaults_to_zero() {
    let mut fields = filled();
    fields.entry_fee = String::new();
    let draft = validate_event_fields(&fields).unwrap();
    assert_eq!(draft.entry_fee, 0);
}

#[test]
fn non_numeric_fee_is_rejected() {
    let mut fields = filled();
    fields.entry_fee = "free".to_owned();
    assert_eq!(
        validate_event_fields(&fields),
        Err("Entry fee must be a whole number.".to_owned())
    );
}

#[test]
fn team_sizes_must_be_positive_and_ordered() {
    let mut fields = filled();
    fields.min_team_size = "0".to_owned();
    assert_eq!(
        validate_event_fields(&fields),
        Err("Team sizes must be at least 1.".to_owned())
    );

    let mut fields = filled();
    fields.min_team_size = "5".to_owned();
    fields.max_team_size = "3".to_owned();
    assert_eq!(
        validate_event_fields(&fields),
        Err("Minimum team size cannot exceed the maximum.".to_owned())
    );

    let mut fields = filled();
    fields.max_team_size = "two".to_owned();
    assert_eq!(
        validate_event_fields(&fields),
        Err("Team sizes must be whole numbers.".to_owned())
    );
}
