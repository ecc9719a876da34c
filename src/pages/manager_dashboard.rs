//! Manager dashboard landing page.

#[cfg(test)]
#[path = "manager_dashboard_test.rs"]
mod manager_dashboard_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::session::{self, SessionState};

#[component]
pub fn ManagerDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let name = move || {
        session
            .get()
            .user
            .map(|user| user.name)
            .unwrap_or_default()
    };

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
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || format!("Welcome, {}", name())}</h1>
            </header>
            <Suspense fallback=move || view! { <p class="page-loading">"Loading..."</p> }>
                {move || {
                    events
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <p class="dashboard-page__summary">
                                        {event_summary(list.len())}
                                    </p>
                                }
                                    .into_any()
                            }
                            Err(_) => view! { <p class="dashboard-page__summary"></p> }.into_any(),
                        })
                }}
            </Suspense>
            <div class="dashboard-page__links">
                <a class="btn btn--primary" href="/manager/events/new">
                    "Create Event"
                </a>
                <a class="btn" href="/manager/events">
                    "My Events"
                </a>
            </div>
        </div>
    }
}

fn event_summary(count: usize) -> String {
    match count {
        0 => "You have not published any events yet.".to_owned(),
        1 => "You are running 1 event.".to_owned(),
        n => format!("You are running {n} events."),
    }
}
