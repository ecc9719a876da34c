use super::*;

#[test]
fn payment_badge_labels_verified_state() {
    assert_eq!(payment_badge(true), ("badge badge--verified", "Payment verified"));
    assert_eq!(payment_badge(false), ("badge badge--pending", "Payment pending"));
}

#[test]
fn member_count_label_pluralizes() {
    assert_eq!(member_count_label(1), "1 member");
    assert_eq!(member_count_label(4), "4 members");
}
