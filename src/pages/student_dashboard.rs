//! Student dashboard landing page.

#[cfg(test)]
#[path = "student_dashboard_test.rs"]
mod student_dashboard_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::session::{self, SessionState};

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let name = move || {
        session
            .get()
            .user
            .map(|user| user.name)
            .unwrap_or_default()
    };

    let teams = LocalResource::new(move || {
        let token = session.with(|s| s.token.clone());
        async move {
            let Some(token) = token else {
                return Err(ApiError::Unavailable);
            };
            let result = crate::net::api::fetch_my_teams(&token).await;
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
                    teams
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <p class="dashboard-page__summary">
                                        {registration_summary(list.len())}
                                    </p>
                                }
                                    .into_any()
                            }
                            Err(_) => view! { <p class="dashboard-page__summary"></p> }.into_any(),
                        })
                }}
            </Suspense>
            <div class="dashboard-page__links">
                <a class="btn btn--primary" href="/">
                    "Browse Events"
                </a>
                <a class="btn" href="/student/registered">
                    "My Registrations"
                </a>
            </div>
        </div>
    }
}

fn registration_summary(count: usize) -> String {
    match count {
        0 => "You have no registrations yet.".to_owned(),
        1 => "You have 1 registered team.".to_owned(),
        n => format!("You have {n} registered teams."),
    }
}
