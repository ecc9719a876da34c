use super::*;

#[test]
fn event_summary_pluralizes() {
    assert_eq!(event_summary(0), "You have not published any events yet.");
    assert_eq!(event_summary(1), "You are running 1 event.");
    assert_eq!(event_summary(2), "You are running 2 events.");
}
