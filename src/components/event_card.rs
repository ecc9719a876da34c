//! Card component for event list items.
//!
//! DESIGN
//! ======
//! Keeps event list presentation consistent between the public browse page
//! and the manager's my-events page while centralizing the detail link.

#[cfg(test)]
#[path = "event_card_test.rs"]
mod event_card_test;

use leptos::prelude::*;

use crate::net::types::Event;

/// A clickable card summarizing one event.
#[component]
pub fn EventCard(event: Event, #[prop(optional)] footer: Option<AnyView>) -> impl IntoView {
    let href = format!("/events/{}", event.id);
    let dates = date_range_label(&event.start_date, &event.end_date);
    let meta = format!(
        "{} · {}",
        fee_label(event.entry_fee),
        team_size_label(event.min_team_size, event.max_team_size)
    );

    view! {
        <div class="event-card">
            <a class="event-card__body" href=href>
                <span class="event-card__title">{event.title}</span>
                <span class="event-card__venue">{event.venue}</span>
                <span class="event-card__dates">{dates}</span>
                <span class="event-card__meta">{meta}</span>
            </a>
            {footer}
        </div>
    }
}

fn date_range_label(start: &str, end: &str) -> String {
    if start == end {
        start.to_owned()
    } else {
        format!("{start} to {end}")
    }
}

fn fee_label(entry_fee: u32) -> String {
    if entry_fee == 0 {
        "Free entry".to_owned()
    } else {
        format!("Entry fee {entry_fee}")
    }
}

fn team_size_label(min: u32, max: u32) -> String {
    if min == max {
        format!("teams of {min}")
    } else {
        format!("teams of {min}-{max}")
    }
}
