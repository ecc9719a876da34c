//! Public event detail page with the team-registration entry point.
//!
//! Anonymous visitors may click through to the registration form; the
//! route guard sends them via the student login and brings them back.

#[cfg(test)]
#[path = "event_detail_test.rs"]
mod event_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::{Event, Role};
use crate::state::session::SessionState;

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    let event = LocalResource::new(move || {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        async move { crate::net::api::fetch_event(&id).await }
    });

    // Managers organize events; only students (or visitors who may become
    // students) get the registration call to action.
    let show_register = move || session.get().role() != Some(Role::Manager);

    view! {
        <div class="event-detail">
            <Suspense fallback=move || view! { <p class="page-loading">"Loading event..."</p> }>
                {move || {
                    event
                        .get()
                        .map(|result| match result {
                            Ok(event) => render_event(&event, show_register()).into_any(),
                            Err(err) => {
                                view! {
                                    <p class="page-error">
                                        {format!("Failed to load event: {err}")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn render_event(event: &Event, show_register: bool) -> impl IntoView + use<> {
    let register_href = format!("/student/events/{}/register", event.id);
    let description = render_markdown(&event.description);
    let deadline = event
        .registration_deadline
        .clone()
        .map(|d| format!("Registration closes {d}"));

    view! {
        <article class="event-detail__article">
            <h1>{event.title.clone()}</h1>
            <p class="event-detail__venue">{event.venue.clone()}</p>
            <p class="event-detail__dates">
                {format!("{} to {}", event.start_date, event.end_date)}
            </p>
            <p class="event-detail__meta">
                {format!(
                    "Teams of {}-{} · {}",
                    event.min_team_size,
                    event.max_team_size,
                    if event.entry_fee == 0 {
                        "free entry".to_owned()
                    } else {
                        format!("entry fee {}", event.entry_fee)
                    },
                )}
            </p>
            {deadline.map(|text| view! { <p class="event-detail__deadline">{text}</p> })}
            <div class="event-detail__description" inner_html=description></div>
            <Show when=move || show_register>
                <a class="btn btn--primary" href=register_href.clone()>
                    "Register a Team"
                </a>
            </Show>
        </article>
    }
}

/// Render an event's Markdown description to HTML.
fn render_markdown(source: &str) -> String {
    use pulldown_cmark::{Options, Parser, html};

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(source, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
