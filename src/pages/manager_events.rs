//! Manager's my-events list with edit and registrations links.

use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::net::error::ApiError;
use crate::state::session::{self, SessionState};

#[component]
pub fn ManagerEventsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let events = LocalResource::new(move || {
        let token = session.with(|s| s.token.clone());
        async move {
            let Some(token) = token else {
                return Err(ApiError::Unavailable);
            };
            let result = crate::net::api::fetch_my_events(&token).await;
            if let Err(err) = &result {
                session::note_api_error(session, err);
            }
            result
        }
    });

    view! {
        <div class="manager-events-page">
            <header class="manager-events-page__header">
                <h1>"My Events"</h1>
                <a class="btn btn--primary" href="/manager/events/new">
                    "+ New Event"
                </a>
            </header>
            <Suspense fallback=move || view! { <p class="page-loading">"Loading events..."</p> }>
                {move || {
                    events
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! {
                                        <p class="manager-events-page__empty">
                                            "No events yet. Create your first one."
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="manager-events-page__grid">
                                            {list
                                                .into_iter()
                                                .map(|event| {
                                                    let edit_href = format!(
                                                        "/manager/events/{}/edit",
                                                        event.id,
                                                    );
                                                    let teams_href = format!(
                                                        "/manager/events/{}/teams",
                                                        event.id,
                                                    );
                                                    let footer = view! {
                                                        <div class="event-card__actions">
                                                            <a class="btn" href=edit_href>
                                                                "Edit"
                                                            </a>
                                                            <a class="btn" href=teams_href>
                                                                "Teams"
                                                            </a>
                                                        </div>
                                                    }
                                                        .into_any();
                                                    view! { <EventCard event=event footer=footer/> }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                            Err(err) => {
                                view! {
                                    <p class="page-error">
                                        {format!("Failed to load events: {err}")}
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
