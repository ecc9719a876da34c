use super::*;

#[test]
fn first_ticket_is_current() {
    let mut generation = Generation::new();
    let ticket = generation.begin();
    assert!(generation.is_current(ticket));
}

#[test]
fn newer_fetch_invalidates_older_ticket() {
    let mut generation = Generation::new();
    let first = generation.begin();
    let second = generation.begin();
    assert!(!generation.is_current(first));
    assert!(generation.is_current(second));
}

#[test]
fn tickets_increase_monotonically() {
    let mut generation = Generation::new();
    let a = generation.begin();
    let b = generation.begin();
    let c = generation.begin();
    assert!(a < b && b < c);
}
