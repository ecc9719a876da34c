use super::*;

fn team(id: &str, verified: bool) -> Team {
    Team {
        id: id.to_owned(),
        event_id: "e1".to_owned(),
        event_title: None,
        name: format!("Team {id}"),
        members: vec![
            TeamMember {
                name: "Alice".to_owned(),
                email: "a@b.com".to_owned(),
            },
            TeamMember {
                name: "Bob".to_owned(),
                email: "b@b.com".to_owned(),
            },
        ],
        payment_verified: verified,
        transaction_id: None,
    }
}

#[test]
fn member_summary_joins_names() {
    assert_eq!(member_summary(&team("t1", false).members), "Alice, Bob");
    assert_eq!(member_summary(&[]), "");
}

#[test]
fn verified_count_counts_only_verified_teams() {
    let teams = vec![team("t1", true), team("t2", false), team("t3", true)];
    assert_eq!(verified_count(&teams), 2);
    assert_eq!(verified_count(&[]), 0);
}

#[test]
fn summary_line_pluralizes_teams() {
    assert_eq!(summary_line(1, 0), "1 team · 0 payments verified");
    assert_eq!(summary_line(5, 3), "5 teams · 3 payments verified");
}

#[test]
fn payment_badge_labels_verified_state() {
    assert_eq!(payment_badge(true).1, "Payment verified");
    assert_eq!(payment_badge(false).1, "Payment pending");
}
